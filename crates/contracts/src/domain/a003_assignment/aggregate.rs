use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    Owner,
    Sme,
    Approver,
    Watcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
    Reassigned,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAssignmentCreate {
    pub user_id: Uuid,
    pub assignment_type: AssignmentType,
    pub sme_type: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewAssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAssignment {
    pub assignment_id: i64,
    pub review_id: i64,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub assignment_type: String,
    pub sme_type: Option<String>,
    pub status: String,
    pub assigned_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_by: Uuid,
    pub assigned_by_name: Option<String>,
}

/// Body of the assignment step: creates the approver assignment and, when
/// SME review is required, the SME assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentStepPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_user_id: Option<Uuid>,
    pub approver_user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_due_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_due_at: Option<DateTime<Utc>>,
}

/// User row for the permission-filtered pickers on the assignment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithPermission {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub sme_type: Option<String>,
    pub sme_types: Option<Vec<String>>,
}

/// Row of the "assigned to me" table on the My Reviews page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyAssignment {
    pub assignment_id: i64,
    /// "sme" or "approver".
    pub assignment_type: String,
    pub status: String,
    pub assigned_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub material_number: i64,
    pub material_description: Option<String>,
    pub review_id: i64,
    pub review_status: String,
    pub assigned_by_name: Option<String>,
}

/// Row of the "initiated by me" table on the My Reviews page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyInitiatedReview {
    pub review_id: i64,
    pub material_number: i64,
    pub material_description: Option<String>,
    pub status: String,
    pub proposed_action: Option<String>,
    pub review_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
