//! # Actions
//!
//! Completions from outside the draw/poll loop become `Action` values.
//! Logout finished? That's `Action::LogoutFinished`. The document fired
//! a fullscreen-change notification? That's `Action::FullscreenChanged`.
//!
//! Background tasks and document listeners send these over a channel;
//! the event loop drains it once per turn, in delivery order. That
//! ordering is what keeps the fullscreen icon in step with the platform:
//! by the time the last queued notification is applied, the mirror
//! equals the document's real state.

use crate::platform::document::FullscreenEvent;

#[derive(Debug)]
pub enum Action {
    /// The async logout call completed (success or failure alike).
    LogoutFinished,
    /// A fullscreen-change notification fired, carrying which of the
    /// variant event names delivered it.
    FullscreenChanged(FullscreenEvent),
}
