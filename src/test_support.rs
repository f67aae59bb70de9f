//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::auth::{AuthError, AuthProvider};
use crate::core::state::App;
use crate::platform::document::{
    Document, FullscreenApi, FullscreenEvent, Listener, ListenerId,
};

/// An in-memory auth provider. Logout always succeeds and counts its
/// invocations so tests can assert "exactly once".
pub struct StubAuth {
    authenticated: AtomicBool,
    logout_calls: AtomicUsize,
}

impl StubAuth {
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.authenticated.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Creates a test App with an authenticated StubAuth.
pub fn test_app() -> App {
    App::new(Arc::new(StubAuth::new(true)), "/dashboard")
}

/// A scriptable document: which API variants the host implements is
/// configured per test, every request/exit attempt is recorded, and
/// change notifications can be dispatched by hand.
pub struct MockDocument {
    supported: Vec<FullscreenApi>,
    inner: Mutex<MockInner>,
}

#[derive(Default)]
struct MockInner {
    fullscreen: bool,
    request_calls: Vec<FullscreenApi>,
    exit_calls: Vec<FullscreenApi>,
    next_id: u64,
    listeners: Vec<(ListenerId, FullscreenEvent, Listener)>,
}

impl MockDocument {
    pub fn supporting(apis: &[FullscreenApi]) -> Self {
        Self {
            supported: apis.to_vec(),
            inner: Mutex::new(MockInner::default()),
        }
    }

    /// Flip the fullscreen element without notifying. Tests dispatch
    /// explicitly, so request/notify ordering stays under their control.
    pub fn set_fullscreen(&self, value: bool) {
        self.inner.lock().unwrap().fullscreen = value;
    }

    /// Fire one change-notification event name at its subscribers.
    pub fn dispatch(&self, event: FullscreenEvent) {
        let inner = self.inner.lock().unwrap();
        for (_, registered, listener) in inner.listeners.iter() {
            if *registered == event {
                listener(event);
            }
        }
    }

    pub fn request_calls(&self) -> Vec<FullscreenApi> {
        self.inner.lock().unwrap().request_calls.clone()
    }

    pub fn exit_calls(&self) -> Vec<FullscreenApi> {
        self.inner.lock().unwrap().exit_calls.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }
}

impl Document for MockDocument {
    fn fullscreen_element(&self) -> bool {
        self.inner.lock().unwrap().fullscreen
    }

    fn request_fullscreen(&self, api: FullscreenApi) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.request_calls.push(api);
        if self.supported.contains(&api) {
            inner.fullscreen = true;
            true
        } else {
            false
        }
    }

    fn exit_fullscreen(&self, api: FullscreenApi) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.exit_calls.push(api);
        if self.supported.contains(&api) {
            inner.fullscreen = false;
            true
        } else {
            false
        }
    }

    fn add_event_listener(&self, event: FullscreenEvent, listener: Listener) -> ListenerId {
        let mut inner = self.inner.lock().unwrap();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, event, listener));
        id
    }

    fn remove_event_listener(&self, id: ListenerId) {
        self.inner
            .lock()
            .unwrap()
            .listeners
            .retain(|(lid, _, _)| *lid != id);
    }
}
