use contracts::domain::a006_audit::aggregate::{PaginatedAuditLogs, PaginatedMaterialAuditLogs};
use serde::Serialize;

use crate::shared::api_utils::http_get;

/// Filters for the raw audit-log table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditLogFilter {
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

pub async fn fetch_audit_logs(filter: &AuditLogFilter) -> Result<PaginatedAuditLogs, String> {
    let qs = serde_qs::to_string(filter).unwrap_or_default();
    http_get(&format!("/api/audit-logs?{}", qs)).await
}

/// Filters for the human-readable material feed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterialAuditFilter {
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

pub async fn fetch_material_audit_logs(
    filter: &MaterialAuditFilter,
) -> Result<PaginatedMaterialAuditLogs, String> {
    let qs = serde_qs::to_string(filter).unwrap_or_default();
    http_get(&format!("/api/audit-logs/materials?{}", qs)).await
}
