use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_review::aggregate::ReviewSummary;
use crate::domain::common::Paginated;
use crate::system::users::UserProfile;

/// Analytical insight attached to a material (produced by the upload
/// pipeline on the server side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub insight_id: Option<i64>,
    /// One of: "info", "warning", "error", "success".
    pub insight_type: String,
    pub message: String,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub acknowledged_by: Option<Uuid>,
    pub acknowledged_by_user: Option<UserProfile>,
    pub opportunity_value: Option<f64>,
}

impl Insight {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_at.is_some()
    }
}

/// One year of consumption, counted backwards from the latest upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionHistory {
    pub years_ago: u8,
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarMaterial {
    pub material_number: i64,
    pub similarity_score: f64,
    pub material_description: String,
    pub total_qty: Option<f64>,
    pub total_value: Option<f64>,
    pub unrestricted_qty: Option<f64>,
    pub safety_stock: Option<f64>,
}

/// Material master record with stock aggregates, as served by
/// `GET /api/materials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub material_number: i64,
    pub material_desc: String,
    pub material_type: String,
    pub created_on: NaiveDate,
    pub mat_group: Option<String>,
    pub mat_group_desc: Option<String>,
    pub mrp_controller: Option<String>,
    pub plant: Option<String>,
    pub total_quantity: Option<f64>,
    pub total_value: Option<f64>,
    /// total_value / total_quantity, computed server side.
    pub unit_value: Option<f64>,
    pub unrestricted_quantity: Option<f64>,
    pub unrestricted_value: Option<f64>,
    pub safety_stock: Option<f64>,
    /// total_quantity / safety_stock.
    pub stock_safety_ratio: Option<f64>,
    pub coverage_ratio: Option<serde_json::Value>,
    pub max_cons_demand: Option<f64>,
    pub demand_fc_12m: Option<f64>,
    pub demand_fc_total: Option<f64>,
    pub cons_1y: Option<f64>,
    pub cons_2y: Option<f64>,
    pub cons_3y: Option<f64>,
    pub cons_4y: Option<f64>,
    pub cons_5y: Option<f64>,
    pub purchased_qty_2y: Option<f64>,
    pub consumption_history_5yr: Option<Vec<ConsumptionHistory>>,
    pub last_reviewed: Option<NaiveDate>,
    pub next_review: Option<NaiveDate>,
    #[serde(default)]
    pub reviews_count: Option<u32>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    pub opportunity_value_sum: Option<f64>,
    /// True while a non-terminal review exists for this material.
    #[serde(default)]
    pub has_active_review: bool,
}

impl Material {
    pub fn error_insights(&self) -> usize {
        self.insights
            .iter()
            .filter(|i| i.insight_type == "error")
            .count()
    }

    pub fn warning_insights(&self) -> usize {
        self.insights
            .iter()
            .filter(|i| i.insight_type == "warning")
            .count()
    }
}

/// One upload-to-upload change of the master record, as served by
/// `GET /api/materials/{n}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDataHistory {
    pub history_id: i64,
    pub upload_job_id: Uuid,
    pub material_number: i64,
    /// "INSERT" or "UPDATE"; the endpoint only serves updates.
    pub change_type: String,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub fields_changed: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Material detail payload: the master record plus its review history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialWithReviews {
    #[serde(flatten)]
    pub material: Material,
    pub reviews: Vec<ReviewSummary>,
}

pub type PaginatedMaterials = Paginated<Material>;
