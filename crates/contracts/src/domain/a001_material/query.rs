use serde::{Deserialize, Serialize};

/// Server-side list parameters for `GET /api/materials`.
///
/// The same structure backs the browser URL: the materials list serializes
/// its current state with `serde_qs` into the query string, and restoring a
/// URL deserializes it back. Defaults are skipped during serialization so
/// shared links stay short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialListQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub skip: u64,
    #[serde(skip_serializing_if = "is_default_limit")]
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub material_type: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_quantity: Option<f64>,
    /// "overdue_90", "overdue_30" or "never".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_filter: Option<String>,
    /// "overdue", "due_soon" or "not_scheduled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_reviews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_warnings: Option<bool>,
}

pub const DEFAULT_PAGE_SIZE: u64 = 20;

fn is_zero(v: &u64) -> bool {
    *v == 0
}

fn is_default_limit(v: &u64) -> bool {
    *v == DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Default for MaterialListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: None,
            search: None,
            exclude: Vec::new(),
            material_type: Vec::new(),
            min_total_value: None,
            max_total_value: None,
            min_total_quantity: None,
            max_total_quantity: None,
            last_reviewed_filter: None,
            next_review_filter: None,
            has_reviews: None,
            has_errors: None,
            has_warnings: None,
        }
    }
}

impl MaterialListQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    /// Parses a query string, ignoring anything it does not understand.
    /// A leading '?' is tolerated.
    pub fn from_query_string(qs: &str) -> Self {
        serde_qs::from_str(qs.trim_start_matches('?')).unwrap_or_default()
    }

    /// Flip or set the sort column. Sorting a new column starts ascending;
    /// sorting the current column flips direction. Always resets to page 0.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_order = Some(
                self.sort_order
                    .unwrap_or(SortOrder::Asc)
                    .toggled(),
            );
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_order = Some(SortOrder::Asc);
        }
        self.skip = 0;
    }

    pub fn set_page(&mut self, page: u64) {
        self.skip = page * self.limit;
    }

    pub fn has_active_filters(&self) -> bool {
        let d = Self::default();
        let mut normalized = self.clone();
        normalized.skip = 0;
        normalized.sort_by = None;
        normalized.sort_order = None;
        normalized != d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_serializes_empty() {
        assert_eq!(MaterialListQuery::default().to_query_string(), "");
    }

    #[test]
    fn round_trip_preserves_filters() {
        let mut q = MaterialListQuery::default();
        q.skip = 40;
        q.search = Some("bearing".to_string());
        q.material_type = vec!["SPRS".to_string(), "HALB".to_string()];
        q.min_total_value = Some(1000.0);
        q.last_reviewed_filter = Some("overdue_90".to_string());
        q.has_errors = Some(true);
        q.sort_by = Some("total_value".to_string());
        q.sort_order = Some(SortOrder::Desc);

        let qs = q.to_query_string();
        let back = MaterialListQuery::from_query_string(&qs);
        assert_eq!(back, q);
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let q = MaterialListQuery::from_query_string("?search=valve&skip=20");
        assert_eq!(q.search.as_deref(), Some("valve"));
        assert_eq!(q.skip, 20);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn unknown_params_are_ignored() {
        let q = MaterialListQuery::from_query_string("bogus=1&search=valve");
        assert_eq!(q.search.as_deref(), Some("valve"));
        assert_eq!(q.skip, 0);
    }

    #[test]
    fn malformed_input_falls_back_to_defaults() {
        let q = MaterialListQuery::from_query_string("skip=not_a_number");
        assert_eq!(q, MaterialListQuery::default());
    }

    #[test]
    fn toggle_sort_flips_direction_and_resets_page() {
        let mut q = MaterialListQuery::default();
        q.skip = 60;
        q.toggle_sort("total_value");
        assert_eq!(q.sort_by.as_deref(), Some("total_value"));
        assert_eq!(q.sort_order, Some(SortOrder::Asc));
        assert_eq!(q.skip, 0);

        q.toggle_sort("total_value");
        assert_eq!(q.sort_order, Some(SortOrder::Desc));

        q.toggle_sort("material_desc");
        assert_eq!(q.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn pagination_is_not_an_active_filter() {
        let mut q = MaterialListQuery::default();
        q.skip = 100;
        q.sort_by = Some("plant".to_string());
        assert!(!q.has_active_filters());

        q.has_warnings = Some(true);
        assert!(q.has_active_filters());
    }
}
