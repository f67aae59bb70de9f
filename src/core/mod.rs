//! # Core Application Logic
//!
//! Domain state and collaborator seams for the BigBrain console.
//! It knows nothing about any specific UI technology.
//!
//! ## Modules
//!
//! - [`route`]: pure path classification (dashboard / game-play flags)
//! - [`router`]: the current path and `navigate`
//! - [`auth`]: `AuthProvider` seam and the HTTP implementation
//! - [`search`]: the shared dashboard search store
//! - [`state`]: the `App` struct, shared app state in one place
//! - [`action`]: completions delivered back into the event loop
//! - [`config`]: settings file, env vars, CLI resolution

pub mod action;
pub mod auth;
pub mod config;
pub mod route;
pub mod router;
pub mod search;
pub mod state;
