//! Session value types and terminal-local picker state.
//!
//! Everything the session owns or hands to collaborators lives in `types`
//! and is re-exported under `crate::state::*`.

pub mod types;
pub mod ui;

pub use types::{
    CatalogItem, EmptyReason, PageTarget, PickMode, PickResult, ResultPage, SearchIntent,
    SessionPhase, SessionView,
};
pub use ui::{Focus, PickerUi};
