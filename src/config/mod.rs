//! Picker configuration.
//!
//! Settings are layered: built-in defaults, then `settings.conf`, then
//! command-line flags. The merged [`Settings`] are validated once into an
//! immutable [`SessionConfig`]; invalid values are fatal at that point and
//! never at runtime.

mod paths;
mod settings;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub use paths::{config_dir, logs_dir, resolve_settings_path};
pub use settings::{load_settings, parse_settings};

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: u64 = 15;
/// Default upper bound for the page size.
pub const DEFAULT_PAGE_SIZE_CAP: u64 = 100;
/// Default locale key.
pub const DEFAULT_LOCALE: &str = "fi";
/// Default quiet period before a typed query is sent.
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
/// Default maximum image edge, both directions.
pub const DEFAULT_IMAGE_MAX_EDGE: u32 = 1200;
/// Default summary preview length in characters.
pub const DEFAULT_SUMMARY_PREVIEW_MAX: usize = 40;
/// Default collections preview length in characters.
pub const DEFAULT_COLLECTION_PREVIEW_MAX: usize = 20;
/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.finna.fi";
/// Default public catalog site root.
pub const DEFAULT_SITE_BASE_URL: &str = "https://finna.fi";

/// Unvalidated, mergeable settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Requested results per page.
    pub page_size: u64,
    /// Upper bound applied to `page_size`.
    pub page_size_cap: u64,
    /// Locale key for UI strings.
    pub locale: String,
    /// Optional directory of `{locale}.yml` files overriding built-in strings.
    pub locales_dir: Option<PathBuf>,
    /// Debounce interval in milliseconds; `0` disables coalescing.
    pub debounce_ms: u64,
    /// Maximum width of picked images.
    pub image_max_width: u32,
    /// Maximum height of picked images.
    pub image_max_height: u32,
    /// Offer "use image".
    pub allow_image_pick: bool,
    /// Offer "use as material link".
    pub allow_page_pick: bool,
    /// Summary preview length.
    pub summary_preview_max: usize,
    /// Collections preview length.
    pub collection_preview_max: usize,
    /// API root URL.
    pub api_base_url: String,
    /// Public catalog site root URL.
    pub site_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_cap: DEFAULT_PAGE_SIZE_CAP,
            locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_max_width: DEFAULT_IMAGE_MAX_EDGE,
            image_max_height: DEFAULT_IMAGE_MAX_EDGE,
            allow_image_pick: true,
            allow_page_pick: true,
            summary_preview_max: DEFAULT_SUMMARY_PREVIEW_MAX,
            collection_preview_max: DEFAULT_COLLECTION_PREVIEW_MAX,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
        }
    }
}

/// Validated, immutable session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Results per page, within `1..=cap`.
    pub page_size: u64,
    /// Locale key for UI strings.
    pub locale: String,
    /// Optional locale override directory.
    pub locales_dir: Option<PathBuf>,
    /// Debounce interval for typed queries.
    pub debounce: Duration,
    /// Maximum width of picked images.
    pub image_max_width: u32,
    /// Maximum height of picked images.
    pub image_max_height: u32,
    /// Offer "use image".
    pub allow_image_pick: bool,
    /// Offer "use as material link".
    pub allow_page_pick: bool,
    /// Summary preview length.
    pub summary_preview_max: usize,
    /// Collections preview length.
    pub collection_preview_max: usize,
    /// API root URL without trailing slash.
    pub api_base_url: String,
    /// Catalog site root URL without trailing slash.
    pub site_base_url: String,
}

/// What: Normalize and check a base URL.
///
/// Output:
/// - The URL without trailing slashes.
///
/// # Errors
/// - `ConfigError::InvalidUrl` when empty or not `http(s)://`.
fn validate_base_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    if host.is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl Settings {
    /// What: Validate the merged settings into a session configuration.
    ///
    /// Output:
    /// - `SessionConfig` with the page size bounded by the cap.
    ///
    /// # Errors
    /// - `ConfigError::InvalidPageSize` for a zero page size.
    /// - `ConfigError::InvalidPageSizeCap` for a zero cap.
    /// - `ConfigError::InvalidImageDimensions` for a zero image edge.
    /// - `ConfigError::InvalidLocale` for a malformed locale key.
    /// - `ConfigError::InvalidUrl` for a malformed base URL.
    ///
    /// Details:
    /// - A page size above the cap is clamped to the cap with a warning, not rejected.
    pub fn validate(self) -> Result<SessionConfig, ConfigError> {
        if self.page_size_cap == 0 {
            return Err(ConfigError::InvalidPageSizeCap(0));
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize(0));
        }
        let page_size = if self.page_size > self.page_size_cap {
            tracing::warn!(
                requested = self.page_size,
                cap = self.page_size_cap,
                "page size above cap; clamping"
            );
            self.page_size_cap
        } else {
            self.page_size
        };
        if self.image_max_width == 0 || self.image_max_height == 0 {
            return Err(ConfigError::InvalidImageDimensions {
                width: self.image_max_width,
                height: self.image_max_height,
            });
        }
        let locale = self.locale.trim().to_string();
        if !crate::i18n::is_valid_locale_format(&locale) {
            return Err(ConfigError::InvalidLocale(self.locale));
        }
        Ok(SessionConfig {
            page_size,
            locale,
            locales_dir: self.locales_dir,
            debounce: Duration::from_millis(self.debounce_ms),
            image_max_width: self.image_max_width,
            image_max_height: self.image_max_height,
            allow_image_pick: self.allow_image_pick,
            allow_page_pick: self.allow_page_pick,
            summary_preview_max: self.summary_preview_max,
            collection_preview_max: self.collection_preview_max,
            api_base_url: validate_base_url("API", &self.api_base_url)?,
            site_base_url: validate_base_url("site", &self.site_base_url)?,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            image_max_width: DEFAULT_IMAGE_MAX_EDGE,
            image_max_height: DEFAULT_IMAGE_MAX_EDGE,
            allow_image_pick: true,
            allow_page_pick: true,
            summary_preview_max: DEFAULT_SUMMARY_PREVIEW_MAX,
            collection_preview_max: DEFAULT_COLLECTION_PREVIEW_MAX,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
        }
    }
}
