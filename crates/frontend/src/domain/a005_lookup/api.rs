use contracts::domain::a005_lookup::aggregate::{
    LookupOption, LookupOptionCreate, LookupOptionHistory, LookupOptionUpdate,
    LookupOptionsGrouped,
};

use crate::shared::api_utils::{http_delete, http_get, http_post, http_put};

/// All options, optionally narrowed to one category.
pub async fn fetch_all(category: Option<&str>) -> Result<Vec<LookupOption>, String> {
    let path = match category {
        Some(c) => format!("/api/lookup-options?category={}", c),
        None => "/api/lookup-options".to_string(),
    };
    http_get(&path).await
}

/// Grouped options of one category, for dropdown rendering.
pub async fn fetch_category(category: &str) -> Result<LookupOptionsGrouped, String> {
    http_get(&format!("/api/lookup-options/{}", category)).await
}

pub async fn fetch_option(option_id: i64) -> Result<LookupOption, String> {
    http_get(&format!("/api/lookup-options/detail/{}", option_id)).await
}

pub async fn fetch_option_history(
    option_id: i64,
) -> Result<Vec<LookupOptionHistory>, String> {
    http_get(&format!("/api/lookup-options/detail/{}/history", option_id)).await
}

pub async fn create_option(payload: &LookupOptionCreate) -> Result<LookupOption, String> {
    http_post("/api/lookup-options", payload).await
}

pub async fn update_option(
    option_id: i64,
    payload: &LookupOptionUpdate,
) -> Result<LookupOption, String> {
    http_put(&format!("/api/lookup-options/{}", option_id), payload).await
}

/// Deactivates the option (soft delete on the server).
pub async fn delete_option(option_id: i64) -> Result<(), String> {
    http_delete(&format!("/api/lookup-options/{}", option_id)).await
}
