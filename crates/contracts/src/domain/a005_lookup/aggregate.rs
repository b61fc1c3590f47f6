use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configurable dropdown option. The `config` object carries
/// category-specific flags, e.g. `requires_sme` for the `proposed_action`
/// category which feeds the review workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOption {
    pub option_id: Option<i64>,
    pub category: String,
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    /// "#rrggbb" badge color.
    pub color: Option<String>,

    pub group_name: Option<String>,
    #[serde(default)]
    pub group_order: i32,
    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    pub config: Option<serde_json::Value>,

    pub created_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl LookupOption {
    /// `requires_sme` flag from the option config; absent means false.
    pub fn requires_sme(&self) -> bool {
        self.config
            .as_ref()
            .and_then(|c| c.get("requires_sme"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOptionCreate {
    pub category: String,
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default)]
    pub group_order: i32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupOptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOptionHistory {
    pub history_id: i64,
    pub option_id: i64,
    /// "created", "updated", "deactivated" or "reactivated".
    pub change_type: String,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub changed_by: Option<Uuid>,
    pub changed_at: DateTime<Utc>,
}

/// Option inside a rendered group (keeps option_id for CRUD).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOptionInGroup {
    pub option_id: i64,
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOptionGroup {
    pub group_name: Option<String>,
    #[serde(default)]
    pub group_order: i32,
    #[serde(default)]
    pub options: Vec<LookupOptionInGroup>,
}

/// `GET /api/lookup-options/{category}` response: grouped for dropdown
/// rendering, plus the flat list for simple selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupOptionsGrouped {
    pub category: String,
    #[serde(default)]
    pub groups: Vec<LookupOptionGroup>,
    #[serde(default)]
    pub options: Vec<LookupOptionInGroup>,
}

impl LookupOptionsGrouped {
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Config of an option by value, for workflow decisions.
    pub fn config_for(&self, value: &str) -> Option<&serde_json::Value> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .and_then(|o| o.config.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(config: Option<serde_json::Value>) -> LookupOption {
        LookupOption {
            option_id: Some(1),
            category: "proposed_action".to_string(),
            value: "scrap_partial".to_string(),
            label: "Scrap (partial)".to_string(),
            description: None,
            color: None,
            group_name: None,
            group_order: 0,
            sort_order: 0,
            is_active: true,
            config,
            created_by: None,
            created_at: None,
            updated_by: None,
            updated_at: None,
        }
    }

    #[test]
    fn requires_sme_defaults_to_false() {
        assert!(!option(None).requires_sme());
        assert!(!option(Some(serde_json::json!({}))).requires_sme());
        assert!(option(Some(serde_json::json!({"requires_sme": true}))).requires_sme());
    }
}
