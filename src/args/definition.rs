//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// finnapick - search the Finna catalog and pick an openly licensed image
#[derive(Parser, Debug, Default)]
#[command(name = "finnapick")]
#[command(version)]
#[command(about = "Search the Finna catalog and pick an openly licensed image", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Start with this query already searched
    #[arg(short, long)]
    pub query: Option<String>,

    /// UI language (e.g. fi, en)
    #[arg(long)]
    pub locale: Option<String>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Quiet period in milliseconds before a typed query is searched (0 disables)
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Do not offer "use image"
    #[arg(long)]
    pub no_image_pick: bool,

    /// Do not offer "use as material link"
    #[arg(long)]
    pub no_page_pick: bool,

    /// Finna API root URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Settings file (default: $XDG_CONFIG_HOME/finnapick/settings.conf)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Layer command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from defaults and `settings.conf`.
    ///
    /// Output:
    /// - None (modifies `settings` in-place).
    ///
    /// Details:
    /// - Only flags that were given override; the `--no-*` flags can only disable.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(locale) = &self.locale {
            settings.locale.clone_from(locale);
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            settings.debounce_ms = debounce_ms;
        }
        if self.no_image_pick {
            settings.allow_image_pick = false;
        }
        if self.no_page_pick {
            settings.allow_page_pick = false;
        }
        if let Some(api_url) = &self.api_url {
            settings.api_base_url.clone_from(api_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse and override only what they name.
    ///
    /// Inputs:
    /// - A command line with a query, locale, page size and one `--no-*` flag.
    ///
    /// Output:
    /// - Named settings change; the rest keep their file values.
    fn flags_override_settings() {
        let args = Args::try_parse_from([
            "finnapick",
            "--query",
            "laiva",
            "--locale",
            "en",
            "--page-size",
            "30",
            "--no-page-pick",
        ])
        .expect("valid args");
        assert_eq!(args.query.as_deref(), Some("laiva"));

        let mut settings = Settings {
            debounce_ms: 250,
            ..Settings::default()
        };
        args.apply_to(&mut settings);
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.page_size, 30);
        assert_eq!(settings.debounce_ms, 250);
        assert!(settings.allow_image_pick);
        assert!(!settings.allow_page_pick);
    }

    #[test]
    fn rejects_non_numeric_page_size() {
        assert!(Args::try_parse_from(["finnapick", "--page-size", "many"]).is_err());
    }
}
