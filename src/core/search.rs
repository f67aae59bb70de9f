//! # Shared Search Store
//!
//! The dashboard search query is shared across the app: the nav bar
//! writes it, the dashboard view filters by it, and the nav bar also
//! force-clears it whenever the route leaves the dashboard. The store is
//! a cheap clonable handle so every reader/writer sees the same value;
//! writes are last-write-wins (the UI event loop serializes them, so no
//! finer coordination is needed).

use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct SearchStore {
    inner: Arc<Mutex<String>>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> String {
        self.inner.lock().unwrap().clone()
    }

    /// Replace the query verbatim. No trimming, no validation.
    pub fn set_query(&self, value: impl Into<String>) {
        *self.inner.lock().unwrap() = value.into();
    }

    /// Reset to the empty string. Idempotent, safe to call every cycle.
    pub fn clear(&self) {
        self.set_query(String::new());
    }
}
