use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleListItem {
    pub role_id: i64,
    pub role_code: String,
    pub role_name: String,
    pub role_type: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Role with the full permission matrix. Roles are read-only from the
/// client; only user-role assignments are administered here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub role_id: i64,
    pub role_code: String,
    pub role_name: String,
    pub role_type: String,
    pub description: Option<String>,

    pub can_create_reviews: bool,
    pub can_edit_reviews: bool,
    pub can_delete_reviews: bool,
    pub can_approve_reviews: bool,
    pub can_provide_sme_review: bool,
    pub can_assign_reviews: bool,
    pub can_manage_users: bool,
    pub can_manage_settings: bool,
    pub can_view_all_reviews: bool,
    pub can_export_data: bool,
    pub can_manage_acknowledgements: bool,

    pub approval_limit: Option<f64>,
    pub is_active: bool,
}

impl Role {
    /// (label, granted) pairs for the permission matrix table.
    pub fn permission_rows(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("Create reviews", self.can_create_reviews),
            ("Edit reviews", self.can_edit_reviews),
            ("Delete reviews", self.can_delete_reviews),
            ("Approve reviews", self.can_approve_reviews),
            ("Provide SME review", self.can_provide_sme_review),
            ("Assign reviews", self.can_assign_reviews),
            ("Manage users", self.can_manage_users),
            ("Manage settings", self.can_manage_settings),
            ("View all reviews", self.can_view_all_reviews),
            ("Export data", self.can_export_data),
            ("Manage acknowledgements", self.can_manage_acknowledgements),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleCreate {
    pub user_id: Uuid,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRole {
    pub user_role_id: i64,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub role_id: i64,
    pub role_code: String,
    pub role_name: String,
    pub role_type: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub assigned_by: Option<Uuid>,
    pub assigned_by_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmeExpertiseCreate {
    pub user_id: Uuid,
    pub sme_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    pub max_concurrent_reviews: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmeExpertiseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sme_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_until: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmeExpertise {
    pub expertise_id: i64,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub sme_type: String,
    pub sme_type_label: Option<String>,
    pub material_group: Option<String>,
    pub plant: Option<String>,
    pub max_concurrent_reviews: u32,
    pub current_review_count: u32,
    pub is_available: bool,
    pub unavailable_until: Option<NaiveDate>,
    pub unavailable_reason: Option<String>,
    pub backup_user_id: Option<Uuid>,
    pub backup_user_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
