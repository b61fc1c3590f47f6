//! Query-string helpers for URL-driven view state.
//!
//! The active tab and the materials list filters share the browser query
//! string. Writers merge their own keys and leave the others alone, so a
//! copied URL restores both the open tab and its filters.
//!
//! Pairs are handled in their raw percent-encoded form: the filter section
//! is produced by `serde_qs` (already encoded, bracketed array keys
//! included) and must round-trip byte-for-byte.

use web_sys::window;

/// Current query string without the leading '?'.
pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
        .trim_start_matches('?')
        .to_string()
}

fn split_pairs(qs: &str) -> Vec<(String, String)> {
    qs.split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Raw value of a top-level parameter, if present.
pub fn get_param(key: &str) -> Option<String> {
    split_pairs(&current_query())
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Replace the URL query string without adding a history entry.
pub fn replace_query(qs: &str) {
    let new_url = if qs.is_empty() {
        "?".to_string()
    } else {
        format!("?{}", qs)
    };

    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current == new_url {
        return;
    }

    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        }
    }
}

fn merged(qs: &str, key: &str, value: &str) -> String {
    let mut pairs: Vec<(String, String)> = split_pairs(qs)
        .into_iter()
        .filter(|(k, _)| k != key)
        .collect();
    pairs.push((key.to_string(), value.to_string()));
    join_pairs(&pairs)
}

fn with_state(qs: &str, state_qs: &str) -> String {
    let mut pairs: Vec<(String, String)> = split_pairs(qs)
        .into_iter()
        .filter(|(k, _)| k == "active")
        .collect();
    pairs.extend(split_pairs(state_qs));
    join_pairs(&pairs)
}

/// Set `key=value` in the URL, preserving every other parameter.
pub fn merge_param(key: &str, value: &str) {
    replace_query(&merged(&current_query(), key, value));
}

/// Replace everything except `active` with the given serialized state.
/// Used by list views that own the whole filter section of the URL.
pub fn replace_state_params(state_qs: &str) {
    replace_query(&with_state(&current_query(), state_qs));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_bracketed_filter_keys() {
        let qs = "material_type%5B0%5D=SPRS&material_type%5B1%5D=HALB&search=valve";
        let out = merged(qs, "active", "a001_material");
        assert_eq!(
            out,
            "material_type%5B0%5D=SPRS&material_type%5B1%5D=HALB&search=valve&active=a001_material"
        );
    }

    #[test]
    fn merge_replaces_existing_value() {
        let out = merged("active=dashboard&search=valve", "active", "a006_audit");
        assert_eq!(out, "search=valve&active=a006_audit");
    }

    #[test]
    fn state_replacement_preserves_active_tab() {
        let qs = "active=a001_material&search=old&skip=40";
        let out = with_state(qs, "search=valve&has_errors=true");
        assert_eq!(out, "active=a001_material&search=valve&has_errors=true");
    }

    #[test]
    fn empty_state_leaves_only_active() {
        let out = with_state("active=a001_material&search=old", "");
        assert_eq!(out, "active=a001_material");
    }
}
