//! Library entry for finnapick: a Finna catalog image picker.
//!
//! The picker session lives in [`logic::session`]; it is driven by the
//! terminal front end in [`app`] but works with any [`sources::Transport`]
//! and [`logic::Presenter`].

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;

pub use error::{AppError, ConfigError, SessionError, TransportError};
pub use logic::{Session, pick_image};
pub use state::{CatalogItem, PickMode, PickResult};
