use serde::{Deserialize, Serialize};

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Human-readable message for an error response: the server's `detail`
    /// when the body parses, the bare status code otherwise.
    pub fn message_from(status: u16, body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(|| format!("HTTP {}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_preferred() {
        assert_eq!(
            ApiErrorBody::message_from(409, r#"{"detail":"An active review already exists"}"#),
            "An active review already exists"
        );
    }

    #[test]
    fn falls_back_to_status_code() {
        assert_eq!(ApiErrorBody::message_from(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(ApiErrorBody::message_from(404, r#"{"other":1}"#), "HTTP 404");
    }
}
