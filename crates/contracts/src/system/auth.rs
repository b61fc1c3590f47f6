use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Authenticated user with the effective permission set of their active
/// roles, as served by `GET /api/system/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Permissions,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown user")
    }
}

/// Effective permission flags, the union over active role assignments.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub can_create_reviews: bool,
    #[serde(default)]
    pub can_edit_reviews: bool,
    #[serde(default)]
    pub can_delete_reviews: bool,
    #[serde(default)]
    pub can_approve_reviews: bool,
    #[serde(default)]
    pub can_provide_sme_review: bool,
    #[serde(default)]
    pub can_assign_reviews: bool,
    #[serde(default)]
    pub can_manage_users: bool,
    #[serde(default)]
    pub can_manage_settings: bool,
    #[serde(default)]
    pub can_view_all_reviews: bool,
    #[serde(default)]
    pub can_export_data: bool,
    #[serde(default)]
    pub can_manage_acknowledgements: bool,
}
