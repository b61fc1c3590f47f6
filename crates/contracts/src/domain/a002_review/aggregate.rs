use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workflow::{ReviewStatus, ReviewStep};
use crate::system::users::UserProfile;

/// What the requesting user may do with a review, computed by the server
/// from role and assignments. Drives the guidance banner and per-step
/// editability in the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReviewContext {
    /// "initiator", "sme", "approver", "admin" or "viewer".
    pub role: String,
    pub editable_steps: Vec<ReviewStep>,
    pub guidance: Option<String>,
}

impl UserReviewContext {
    pub fn can_edit_step(&self, step: ReviewStep) -> bool {
        self.editable_steps.contains(&step)
    }
}

/// Verification checklist, joined from the review_checklist table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewChecklist {
    pub has_open_orders: bool,
    pub has_forecast_demand: bool,
    pub checked_alternate_plants: bool,
    pub contacted_procurement: bool,
    pub reviewed_bom_usage: bool,
    pub checked_supersession: bool,
    pub checked_historical_usage: bool,
    pub open_order_numbers: Option<String>,
    pub forecast_next_12m: Option<f64>,
    pub alternate_plant_qty: Option<f64>,
    pub procurement_feedback: Option<String>,
}

/// Minimal review data for the material card's history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub review_id: i64,
    pub status: ReviewStatus,
    pub review_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub initiated_by: Uuid,
    pub initiated_by_user: Option<UserProfile>,

    #[serde(default)]
    pub current_step: ReviewStep,

    pub assigned_sme_id: Option<Uuid>,
    pub assigned_sme_name: Option<String>,
    pub assigned_approver_id: Option<Uuid>,
    pub assigned_approver_name: Option<String>,

    pub final_decision: Option<String>,
    pub final_safety_stock_qty: Option<f64>,
    pub final_unrestricted_qty: Option<f64>,
    pub final_notes: Option<String>,

    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub is_read_only: bool,
}

/// Full review record as served by
/// `GET /api/materials/{n}/reviews/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialReview {
    pub review_id: Option<i64>,
    pub material_number: i64,

    pub created_by: Option<Uuid>,
    pub last_updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub initiated_by: Uuid,
    pub initiated_by_user: Option<UserProfile>,
    pub review_date: NaiveDate,

    // Step 1: general info
    pub review_reason: Option<String>,
    pub current_stock_qty: Option<f64>,
    pub current_stock_value: Option<f64>,
    pub months_no_movement: Option<i32>,
    pub proposed_action: Option<String>,
    pub proposed_safety_stock_qty: Option<f64>,
    pub proposed_unrestricted_qty: Option<f64>,
    pub business_justification: Option<String>,

    // Step 4: SME investigation
    pub sme_recommendation: Option<String>,
    pub sme_recommended_safety_stock_qty: Option<f64>,
    pub sme_recommended_unrestricted_qty: Option<f64>,
    pub sme_analysis: Option<String>,
    pub alternative_applications: Option<String>,
    pub risk_assessment: Option<String>,

    // Step 6: final decision
    pub final_decision: Option<String>,
    pub final_safety_stock_qty: Option<f64>,
    pub final_unrestricted_qty: Option<f64>,
    pub final_notes: Option<String>,

    // Step 5: follow-up scheduling
    pub requires_follow_up: Option<bool>,
    pub next_review_date: Option<NaiveDate>,
    pub follow_up_reason: Option<String>,
    pub review_frequency_weeks: Option<i32>,

    pub previous_review_id: Option<i64>,

    pub estimated_savings: Option<f64>,
    pub implementation_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub completed_checklist: bool,
    pub checklist: Option<ReviewChecklist>,

    pub assigned_sme_id: Option<Uuid>,
    pub assigned_sme_name: Option<String>,
    pub assigned_approver_id: Option<Uuid>,
    pub assigned_approver_name: Option<String>,

    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub comments_count: u32,

    // Workflow position computed by the server; the client recomputes the
    // same values locally after optimistic updates (see workflow module).
    #[serde(default)]
    pub current_step: ReviewStep,
    #[serde(default)]
    pub sme_required: bool,
    #[serde(default)]
    pub has_assignments: bool,

    pub user_context: Option<UserReviewContext>,
}

/// Body of `POST /api/materials/{n}/review`. Material number comes from
/// the URL; later-step fields are filled by subsequent updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialReviewCreate {
    pub review_reason: Option<String>,
    pub months_no_movement: Option<i32>,
    pub proposed_action: Option<String>,
    pub proposed_safety_stock_qty: Option<f64>,
    pub proposed_unrestricted_qty: Option<f64>,
    pub business_justification: Option<String>,
    pub previous_review_id: Option<i64>,
}

/// Partial update sent with `PUT /api/materials/{n}/review/{id}?step=...`.
/// `None` fields are omitted from the wire so the server treats them as
/// unset rather than cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_no_movement: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_safety_stock_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_unrestricted_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_justification: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_open_orders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_forecast_demand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_alternate_plants: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacted_procurement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_bom_usage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_supersession: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_historical_usage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_order_numbers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_next_12m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_plant_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procurement_feedback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_recommended_safety_stock_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_recommended_unrestricted_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_applications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_safety_stock_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_unrestricted_qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_follow_up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_frequency_weeks: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_review_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
}
