//! finnapick binary entrypoint kept minimal. The picker runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use finnapick::args::{Args, determine_log_level};
use finnapick::config::{load_settings, logs_dir, resolve_settings_path};
use finnapick::{AppError, PickResult};

/// Log line timestamps in local time.
struct FinnapickTimer;

impl tracing_subscriber::fmt::time::FormatTime for FinnapickTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&finnapick::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `finnapick.log` under the config directory.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened, so startup never blocks on logging.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = logs_dir();
    log_path.push("finnapick.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FinnapickTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FinnapickTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// What: Build the configuration, run the picker and print the result.
///
/// Inputs:
/// - `args`: Parsed command line.
///
/// Output:
/// - The delivered result, already written to stdout as JSON.
///
/// # Errors
/// - Any configuration, terminal or encoding failure.
async fn pick(args: Args) -> Result<PickResult, AppError> {
    let settings_path = args.config.clone().or_else(resolve_settings_path);
    let mut settings = load_settings(settings_path.as_deref())?;
    args.apply_to(&mut settings);
    let config = settings.validate()?;
    tracing::info!(locale = %config.locale, page_size = config.page_size, "finnapick starting");

    let result = finnapick::app::run(config, args.query).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(result)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));
    match pick(args).await {
        Ok(result) => {
            tracing::info!(picked = result.is_picked(), "finnapick exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "finnapick failed");
            eprintln!("finnapick: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn finnapick_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::FinnapickTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
