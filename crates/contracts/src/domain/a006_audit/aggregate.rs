use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Paginated;
use crate::system::users::UserProfile;

/// Raw audit trail row (`GET /api/audit-logs`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub audit_id: i64,
    pub table_name: String,
    pub record_id: i64,
    /// "INSERT", "UPDATE" or "DELETE".
    pub operation: String,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub fields_changed: Option<Vec<String>>,
    pub changed_by: Uuid,
    pub changed_at: DateTime<Utc>,
}

/// Human-readable per-material feed (`GET /api/audit-logs/materials`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialAuditLogEntry {
    pub audit_id: i64,
    pub timestamp: DateTime<Utc>,
    pub material_number: i64,
    pub material_desc: Option<String>,
    pub change_summary: String,
    pub changed_by: Option<String>,
    pub changed_by_user: Option<UserProfile>,
    pub table_name: String,
    pub operation: String,
}

pub type PaginatedAuditLogs = Paginated<AuditLogEntry>;
pub type PaginatedMaterialAuditLogs = Paginated<MaterialAuditLogEntry>;
