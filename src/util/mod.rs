//! Small utility helpers for JSON extraction, preview text and time formatting.
//!
//! The catalog API returns loosely shaped records (a field may be a string in
//! one record and a list in the next), so extraction here never fails: a
//! missing or oddly typed field yields an empty value.

pub mod config;

use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - The string value, or `""` when the key is missing or the value is not a string.
///
/// Details:
/// - Numbers are rendered with their JSON text so a numeric `year` still shows.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    match v.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// What: Extract a list of strings from a JSON object by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - The string elements of the array; a bare string becomes a one-element list.
///
/// Details:
/// - Non-string elements are skipped; anything else yields an empty vector.
#[must_use]
pub fn arrs(v: &Value, key: &str) -> Vec<String> {
    match v.get(key) {
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(|e| e.as_str().map(ToOwned::to_owned))
            .collect(),
        Some(Value::String(text)) if !text.is_empty() => vec![text.clone()],
        _ => Vec::new(),
    }
}

/// What: Extract an unsigned integer that may arrive as a number or a numeric string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(u64)` when the value converts, `None` otherwise.
#[must_use]
pub fn u64_of(v: &Value, key: &str) -> Option<u64> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(i) = n.as_i64() {
        return u64::try_from(i).ok();
    }
    n.as_str().and_then(|text| text.trim().parse().ok())
}

/// What: Cut text to a preview length and mark the cut.
///
/// Inputs:
/// - `text`: Full text.
/// - `max`: Maximum number of characters kept.
///
/// Output:
/// - `text` unchanged when it fits, otherwise its first `max` characters followed by `...`.
///
/// Details:
/// - Counts characters, not bytes, so multi-byte text is never split mid-codepoint.
#[must_use]
pub fn truncate_preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - Timestamp in the form `YYYY-MM-DD-T HH:MM:SS`.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
