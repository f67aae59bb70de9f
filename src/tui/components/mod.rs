//! # TUI Components
//!
//! Components follow two patterns, as elsewhere in the codebase:
//!
//! - **Stateful, event-driven**: `NavBar` owns its dialog and fullscreen
//!   mirror, handles events, and emits [`nav_bar::NavEvent`]s upward.
//! - **Transient wrappers**: `LogoutDialog` borrows persistent state
//!   each frame and only renders.
//!
//! Each component file co-locates its state types, event handling,
//! rendering, and tests.

pub mod logout_dialog;
pub mod nav_bar;

pub use logout_dialog::LogoutDialog;
pub use nav_bar::{NavBar, NavEvent};
