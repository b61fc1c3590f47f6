use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-material-type slice of the "outstanding opportunities" chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityByType {
    #[serde(rename = "materialType")]
    pub material_type: String,
    pub value: f64,
    pub count: u64,
}

/// Per-material-type slice of the SME rejection-rate chart. A rejection is
/// an SME answering "keep_no_change" to a proposed change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionRateByType {
    #[serde(rename = "materialType")]
    pub material_type: String,
    pub count: u64,
    pub total: u64,
    pub percentage: f64,
}

/// `GET /api/dashboard` response. Change fields are ratios relative to the
/// snapshot taken at the previous upload (0.0 when no snapshot exists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_inventory_value: f64,
    pub total_inventory_value_change: f64,
    pub opportunity_value: f64,
    pub opportunity_value_change: f64,
    pub total_overdue_reviews: u64,
    pub total_overdue_reviews_change: f64,
    pub acceptance_rate: f64,
    pub acceptance_rate_change: f64,
    #[serde(default)]
    pub outstanding_opportunities_chart_data: Vec<OpportunityByType>,
    #[serde(default)]
    pub review_status_chart_data: Vec<RejectionRateByType>,
    pub last_upload_date: Option<DateTime<Utc>>,
}
