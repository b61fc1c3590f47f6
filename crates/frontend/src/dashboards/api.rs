use contracts::dashboards::summary::DashboardSummary;
use contracts::domain::a006_audit::aggregate::MaterialAuditLogEntry;

use crate::shared::api_utils::http_get;

pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    http_get("/api/dashboard").await
}

pub async fn fetch_recent_activity() -> Result<Vec<MaterialAuditLogEntry>, String> {
    http_get("/api/dashboard/recent-activity").await
}
