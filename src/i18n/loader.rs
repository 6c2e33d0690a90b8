//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::TranslationMap;

/// Built-in English strings.
const BUILTIN_EN: &str = include_str!("../../config/locales/en.yml");
/// Built-in Finnish strings.
const BUILTIN_FI: &str = include_str!("../../config/locales/fi.yml");

/// What: Load a locale YAML file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "fi")
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or error
///
/// # Errors
/// - Returns `Err` when the locale code has an invalid format
/// - Returns `Err` when the locale file does not exist or cannot be read
/// - Returns `Err` when the locale file is empty or is not valid YAML
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationMap, String> {
    if !is_valid_locale_format(locale) {
        return Err(format!(
            "Invalid locale code format: '{locale}'. Expected format: language[-region] (e.g., 'fi', 'en-GB')"
        ));
    }

    let file_path = locales_dir.join(format!("{locale}.yml"));
    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Built-in translations for a locale.
///
/// Inputs:
/// - `locale`: Locale code; only the language part is considered (`fi-FI` → `fi`).
///
/// Output:
/// - `Some(map)` for `en` and `fi`, `None` for anything else.
#[must_use]
pub fn builtin_locale(locale: &str) -> Option<TranslationMap> {
    let language = locale.split('-').next().unwrap_or(locale).to_ascii_lowercase();
    let source = match language.as_str() {
        "en" => BUILTIN_EN,
        "fi" => BUILTIN_FI,
        _ => return None,
    };
    match parse_locale_yaml(source) {
        Ok(map) => Some(map),
        Err(e) => {
            tracing::error!(locale, error = %e, "built-in locale failed to parse");
            None
        }
    }
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Allows simple language codes (e.g., "fi") or full codes (e.g., "en-GB")
/// - Rejects empty codes, spaces and most special characters
#[must_use]
pub fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// Details:
/// - Expects a top-level key naming the locale (e.g., "fi:")
/// - Flattens nested structure into dot-notation keys
fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();

    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "picker")
/// - `translations`: Map to populate
///
/// Details:
/// - Nested maps become dotted keys (e.g., `picker.search`)
/// - Scalars other than strings are stored in their display form; sequences are skipped
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_yaml_nested() {
        let yaml = r#"
fi:
  picker:
    search: "Hae"
  detail:
    use_image: "Käytä kuvaa"
    count: 3
"#;
        let result = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(result.get("picker.search"), Some(&"Hae".to_string()));
        assert_eq!(result.get("detail.use_image"), Some(&"Käytä kuvaa".to_string()));
        assert_eq!(result.get("detail.count"), Some(&"3".to_string()));
    }

    #[test]
    fn test_parse_locale_yaml_invalid() {
        assert!(parse_locale_yaml("fi: [unclosed").is_err());
    }

    #[test]
    /// What: Built-in tables exist for en and fi and share their keys.
    fn test_builtin_locales_cover_same_keys() {
        let en = builtin_locale("en").expect("en");
        let fi = builtin_locale("fi-FI").expect("fi");
        assert!(builtin_locale("sv").is_none());
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut fi_keys: Vec<_> = fi.keys().collect();
        en_keys.sort();
        fi_keys.sort();
        assert_eq!(en_keys, fi_keys);
        assert_eq!(fi.get("picker.search"), Some(&"Hae".to_string()));
    }

    #[test]
    fn test_load_locale_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("sv.yml"), "sv:\n  picker:\n    search: \"Sök\"\n")
            .expect("write");
        let map = load_locale_file("sv", dir.path()).expect("loaded");
        assert_eq!(map.get("picker.search"), Some(&"Sök".to_string()));

        assert!(load_locale_file("de", dir.path()).is_err());
        assert!(load_locale_file("../etc", dir.path()).is_err());

        std::fs::write(dir.path().join("da.yml"), "  \n").expect("write");
        assert!(load_locale_file("da", dir.path()).is_err());
    }

    #[test]
    fn test_is_valid_locale_format() {
        assert!(is_valid_locale_format("fi"));
        assert!(is_valid_locale_format("en-GB"));
        assert!(is_valid_locale_format("zh-Hans-CN"));
        assert!(!is_valid_locale_format(""));
        assert!(!is_valid_locale_format("en US"));
        assert!(!is_valid_locale_format("-en"));
        assert!(!is_valid_locale_format("en--GB"));
    }
}
