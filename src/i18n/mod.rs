//! Internationalization (i18n) for the picker.
//!
//! # Overview
//!
//! UI strings are looked up by dot-notation key (`picker.search`,
//! `detail.use_image`). Lookup order is the configured locale, then the
//! default locale (`en`), then the raw key itself.
//!
//! # Locale Sources
//!
//! English and Finnish tables are compiled in from `config/locales/*.yml`.
//! A `locales_dir` setting points at a directory of `{locale}.yml` files;
//! a file there replaces the built-in table of the same locale key by key:
//!
//! ```yaml
//! sv:
//!   picker:
//!     search: "Sök"
//! ```
//!
//! # Error Handling
//!
//! - Unknown locales fall back to the default locale
//! - Unreadable override files are logged and ignored
//! - Missing keys return the key itself

mod loader;

pub use loader::{builtin_locale, is_valid_locale_format, load_locale_file};

use std::collections::HashMap;
use std::path::Path;

/// Dot-notation key to display string.
pub type TranslationMap = HashMap<String, String>;

/// Locale used when a key is missing from the configured locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolved translation tables for one locale.
#[derive(Clone, Debug, Default)]
pub struct Translator {
    /// Locale key the primary table was resolved for.
    locale: String,
    /// Strings of the configured locale.
    primary: TranslationMap,
    /// Strings of the default locale.
    fallback: TranslationMap,
}

impl Translator {
    /// What: Resolve tables for a locale.
    ///
    /// Inputs:
    /// - `locale`: Configured locale key.
    /// - `locales_dir`: Optional override directory.
    ///
    /// Output:
    /// - Translator with built-in strings, overridden key by key from the directory.
    #[must_use]
    pub fn new(locale: &str, locales_dir: Option<&Path>) -> Self {
        let mut primary = builtin_locale(locale).unwrap_or_default();
        if let Some(dir) = locales_dir {
            match load_locale_file(locale, dir) {
                Ok(overrides) => primary.extend(overrides),
                Err(e) => tracing::warn!(locale, error = %e, "locale override not loaded"),
            }
        }
        if primary.is_empty() {
            tracing::debug!(locale, "no strings for locale; using {DEFAULT_LOCALE}");
        }
        Self {
            locale: locale.to_string(),
            primary,
            fallback: builtin_locale(DEFAULT_LOCALE).unwrap_or_default(),
        }
    }

    /// Locale key this translator was built for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// What: Get a translation for a key.
    ///
    /// Output:
    /// - Translated string, or the key itself if no table has it.
    ///
    /// Details:
    /// - Misses are traced only; this runs on every frame.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        if let Some(s) = self.primary.get(key) {
            return s.clone();
        }
        if let Some(s) = self.fallback.get(key) {
            tracing::trace!(key, locale = %self.locale, "string taken from {DEFAULT_LOCALE}");
            return s.clone();
        }
        tracing::debug!(key, "no translation; showing the key");
        key.to_string()
    }
}

/// What: One-off lookup of a key in a built-in locale.
///
/// Inputs:
/// - `key`: Dot-notation key.
/// - `locale`: Locale key.
///
/// Output:
/// - Display string, falling back to the default locale and then the raw key.
#[must_use]
pub fn lookup(key: &str, locale: &str) -> String {
    Translator::new(locale, None).t(key)
}
