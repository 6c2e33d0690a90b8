//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` settings format: comment skipping,
//! key-value splitting, inline comment stripping and boolean words.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`
/// - Inline comments are stripped from the value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_value).to_string()))
}

/// What: Remove an inline comment from a value.
///
/// Inputs:
/// - `s`: Raw value text.
///
/// Output:
/// - Trimmed text before the first ` #` or `//` that is not part of a URL scheme.
fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    if let Some(i) = s.find(" #") {
        end = end.min(i);
    }
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s.as_bytes()[i - 1] == b':' {
            search_from = i + 2;
            continue;
        }
        end = end.min(i);
        break;
    }
    s[..end].trim()
}

/// What: Interpret a settings value as a boolean.
///
/// Inputs:
/// - `value`: Raw value text.
///
/// Output:
/// - `Some(bool)` for the usual on/off words, `None` for anything else.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped.
    fn skips_comments() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("page_size = 20"));
    }

    #[test]
    /// What: Keys normalize and inline comments are dropped, URLs survive.
    fn key_value_normalizes() {
        assert_eq!(
            parse_key_value("Page-Size = 20 # per page"),
            Some(("page_size".into(), "20".into()))
        );
        assert_eq!(
            parse_key_value("api.url = https://api.finna.fi // mirror"),
            Some(("api_url".into(), "https://api.finna.fi".into()))
        );
        assert_eq!(parse_key_value("no separator"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }

    #[test]
    /// What: Boolean words map to booleans.
    fn bool_words() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
