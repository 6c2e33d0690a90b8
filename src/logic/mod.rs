//! Core non-UI logic split into modular submodules.
//!
//! - `debounce` coalesces typed query bursts.
//! - `pagination` derives page counts and display ranges.
//! - `delivery` guarantees one result per session.
//! - `session` ties them together into the picker state machine.

pub mod debounce;
pub mod delivery;
pub mod pagination;
pub mod session;

pub use debounce::Debouncer;
pub use delivery::{DeliveryGuard, PickCallback, Presenter};
pub use pagination::{DisplayRange, PaginationView, clamp_page, compute_view};
pub use session::{Session, pick_image};
