use contracts::system::rbac::{
    Role, RoleListItem, SmeExpertise, UserRole, UserRoleCreate, UserRoleUpdate,
};
use contracts::system::users::UserListItem;

use crate::shared::api_utils::{http_delete, http_get, http_post, http_put};

pub async fn fetch_roles() -> Result<Vec<RoleListItem>, String> {
    http_get("/api/roles").await
}

pub async fn fetch_role(role_id: i64) -> Result<Role, String> {
    http_get(&format!("/api/roles/{}", role_id)).await
}

pub async fn fetch_user_roles() -> Result<Vec<UserRole>, String> {
    http_get("/api/user-roles").await
}

pub async fn create_user_role(payload: &UserRoleCreate) -> Result<UserRole, String> {
    http_post("/api/user-roles", payload).await
}

pub async fn update_user_role(
    user_role_id: i64,
    payload: &UserRoleUpdate,
) -> Result<UserRole, String> {
    http_put(&format!("/api/user-roles/{}", user_role_id), payload).await
}

pub async fn delete_user_role(user_role_id: i64) -> Result<(), String> {
    http_delete(&format!("/api/user-roles/{}", user_role_id)).await
}

pub async fn fetch_sme_expertise() -> Result<Vec<SmeExpertise>, String> {
    http_get("/api/sme-expertise").await
}

pub async fn fetch_users() -> Result<Vec<UserListItem>, String> {
    http_get("/api/users").await
}
