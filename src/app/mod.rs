//! Terminal front end: presenter, terminal setup and the event loop that
//! drives a session.

/// Ratatui presenter implementation.
mod presenter;
/// Event loop and input thread.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use presenter::TuiPresenter;
pub use runtime::{run, run_event_loop, spawn_event_thread};
pub use terminal::{restore_terminal, setup_terminal};
