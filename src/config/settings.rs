use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::ConfigError;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// What: Parse a numeric setting, keeping the previous value on failure.
///
/// Inputs:
/// - `key`: Setting name (for the warning).
/// - `val`: Raw value.
/// - `slot`: Field to update.
fn set_parsed<T: std::str::FromStr>(key: &str, val: &str, slot: &mut T) {
    match val.parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => tracing::warn!(key, value = val, "ignoring unparseable setting"),
    }
}

/// What: Parse a boolean setting, keeping the previous value on failure.
fn set_bool(key: &str, val: &str, slot: &mut bool) {
    match parse_bool(val) {
        Some(v) => *slot = v,
        None => tracing::warn!(key, value = val, "ignoring non-boolean setting"),
    }
}

/// What: Parse settings.conf content on top of existing settings.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are logged at debug level and skipped.
/// - Values that do not parse keep the previous value and log a warning;
///   range checks happen later in `Settings::validate`.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let val = val.as_str();
        match key.as_str() {
            "page_size" | "results_per_page" => set_parsed(&key, val, &mut settings.page_size),
            "page_size_cap" | "max_page_size" => {
                set_parsed(&key, val, &mut settings.page_size_cap);
            }
            "locale" => settings.locale = val.to_string(),
            "locales_dir" => {
                settings.locales_dir = (!val.is_empty()).then(|| PathBuf::from(val));
            }
            "debounce_ms" | "search_debounce_ms" => {
                set_parsed(&key, val, &mut settings.debounce_ms);
            }
            "image_max_width" => set_parsed(&key, val, &mut settings.image_max_width),
            "image_max_height" => set_parsed(&key, val, &mut settings.image_max_height),
            "allow_image_pick" => set_bool(&key, val, &mut settings.allow_image_pick),
            "allow_page_pick" => set_bool(&key, val, &mut settings.allow_page_pick),
            "summary_preview_max" => set_parsed(&key, val, &mut settings.summary_preview_max),
            "collection_preview_max" => {
                set_parsed(&key, val, &mut settings.collection_preview_max);
            }
            "api_url" | "api_base_url" => settings.api_base_url = val.to_string(),
            "site_url" | "site_base_url" => settings.site_base_url = val.to_string(),
            other => tracing::debug!(key = other, "unknown setting"),
        }
    }
}

/// What: Load settings from a file on top of the defaults.
///
/// Inputs:
/// - `path`: Settings file, or `None` to use defaults only.
///
/// Output:
/// - Merged settings.
///
/// # Errors
/// - `ConfigError::Unreadable` when the file exists but cannot be read.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    let Some(path) = path else {
        return Ok(settings);
    };
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_settings(&content, &mut settings);
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}
