//! Error types for the picker.
//!
//! Only configuration problems are fatal. Transport failures degrade to an
//! empty result list and never leave the session, stale responses are not
//! errors at all.

use thiserror::Error;

use crate::state::SessionPhase;

/// Invalid construction-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Page size must be at least one.
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(u64),
    /// The page size cap itself must be at least one.
    #[error("page size cap must be at least 1 (got {0})")]
    InvalidPageSizeCap(u64),
    /// Image dimension limits must be positive.
    #[error("image dimensions must be positive (got {width}x{height})")]
    InvalidImageDimensions {
        /// Requested maximum width.
        width: u32,
        /// Requested maximum height.
        height: u32,
    },
    /// Locale key is empty or not of the form `language[-region]`.
    #[error("invalid locale code '{0}'")]
    InvalidLocale(String),
    /// A base URL is empty or not http(s).
    #[error("invalid {name} URL '{value}'")]
    InvalidUrl {
        /// Which URL setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {message}")]
    Unreadable {
        /// Path of the settings file.
        path: String,
        /// I/O error text.
        message: String,
    },
}

/// Failure of one remote search request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("request failed: {0}")]
    Request(String),
    /// The API answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
    /// The body was not a valid search response.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Lifecycle misuse of a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The requested lifecycle operation is not allowed from the current phase.
    #[error("cannot {operation} while the session is {phase:?}")]
    InvalidTransition {
        /// Operation that was attempted.
        operation: &'static str,
        /// Phase the session was in.
        phase: SessionPhase,
    },
}

/// Top-level error of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Session lifecycle error.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The HTTP client could not be created.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    /// The pick result could not be written out.
    #[error("failed to encode pick result: {0}")]
    Encode(#[from] serde_json::Error),
}
