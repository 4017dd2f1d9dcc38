use super::Issue;
use crate::error::ParserError;
use serde_json::Value;

/// Top-level keys that may hold the issue array, in priority order.
const CONTAINER_KEYS: [&str; 3] = ["errors", "issues", "results"];

/// Parse issue records out of a JSON report.
///
/// Returns `None` on invalid JSON so the caller can fall back to the
/// markdown report; a readable report with no issues is `Some(vec![])`.
pub fn try_parse_json(raw: &str) -> Option<Vec<Issue>> {
    let value: Value = match serde_json::from_str(raw).map_err(ParserError::Json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to parse JSON report: {}", e);
            return None;
        }
    };

    Some(extract_records(value))
}

fn extract_records(value: Value) -> Vec<Issue> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => CONTAINER_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Issue>(item) {
            Ok(issue) => Some(issue),
            Err(e) => {
                tracing::debug!("Skipping malformed issue record: {}", e);
                None
            }
        })
        .collect()
}
