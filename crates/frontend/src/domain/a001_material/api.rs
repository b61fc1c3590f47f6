use contracts::domain::a001_material::aggregate::{
    MaterialDataHistory, MaterialWithReviews, PaginatedMaterials,
};
use contracts::domain::a001_material::query::MaterialListQuery;

use crate::shared::api_utils::{http_get, http_put_empty};

pub async fn fetch_materials(query: &MaterialListQuery) -> Result<PaginatedMaterials, String> {
    let qs = query.to_query_string();
    let path = if qs.is_empty() {
        "/api/materials".to_string()
    } else {
        format!("/api/materials?{}", qs)
    };
    http_get(&path).await
}

pub async fn fetch_material(material_number: i64) -> Result<MaterialWithReviews, String> {
    http_get(&format!("/api/materials/{}", material_number)).await
}

/// Master-data changes recorded between uploads, newest first.
pub async fn fetch_history(material_number: i64) -> Result<Vec<MaterialDataHistory>, String> {
    http_get(&format!("/api/materials/{}/history", material_number)).await
}

pub async fn acknowledge_insight(
    material_number: i64,
    insight_id: i64,
) -> Result<serde_json::Value, String> {
    http_put_empty(&format!(
        "/api/materials/{}/insights/{}/acknowledge",
        material_number, insight_id
    ))
    .await
}

pub async fn unacknowledge_insight(
    material_number: i64,
    insight_id: i64,
) -> Result<serde_json::Value, String> {
    http_put_empty(&format!(
        "/api/materials/{}/insights/{}/unacknowledge",
        material_number, insight_id
    ))
    .await
}
