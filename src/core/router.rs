//! # Router
//!
//! Owns the current path. Navigation is a plain string swap — route
//! semantics (what the path *means*) live in [`crate::core::route`],
//! and reactions to a change (search clearing, control visibility) are
//! re-derived from the new path on the next render.

use log::info;

/// The current location of the app. One instance, owned by `App`.
pub struct Router {
    path: String,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: initial.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the current path. No return value, no validation — any
    /// string is a legal path as far as the router is concerned.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.path {
            info!("Navigating {} -> {}", self.path, path);
            self.path = path;
        }
    }
}
