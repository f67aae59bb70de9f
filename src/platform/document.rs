//! # Document Fullscreen Seam
//!
//! Hosts disagree on what the fullscreen API is called: one logical
//! "change" event hides behind four vendor event names, and the
//! request/exit calls behind three. The [`Document`] trait flattens that
//! zoo into one seam the nav bar can subscribe to, and
//! [`toggle_fullscreen`] walks the variants in priority order.
//!
//! Two rules keep the mirror honest:
//!
//! 1. A toggle only *requests* a change. The tracked boolean is set
//!    exclusively from change notifications, by re-reading
//!    `fullscreen_element()`. The notification is authoritative.
//! 2. Listeners registered at mount are removed exactly once at
//!    unmount, via the Drop impl on [`FullscreenSubscription`].

use std::sync::Mutex;

use log::{debug, warn};

/// Vendor variants of the request/exit calls, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Ms,
}

impl FullscreenApi {
    /// Fallback order for both request and exit.
    pub const PRIORITY: [FullscreenApi; 3] =
        [FullscreenApi::Standard, FullscreenApi::Webkit, FullscreenApi::Ms];
}

/// Vendor variants of the change-notification event name. All four name
/// the same logical event; subscribers fan them into one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenEvent {
    FullscreenChange,
    WebkitFullscreenChange,
    MozFullscreenChange,
    MsFullscreenChange,
}

impl FullscreenEvent {
    pub const ALL: [FullscreenEvent; 4] = [
        FullscreenEvent::FullscreenChange,
        FullscreenEvent::WebkitFullscreenChange,
        FullscreenEvent::MozFullscreenChange,
        FullscreenEvent::MsFullscreenChange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FullscreenEvent::FullscreenChange => "fullscreenchange",
            FullscreenEvent::WebkitFullscreenChange => "webkitfullscreenchange",
            FullscreenEvent::MozFullscreenChange => "mozfullscreenchange",
            FullscreenEvent::MsFullscreenChange => "MSFullscreenChange",
        }
    }
}

/// Handle returned by `add_event_listener`, used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub u64);

/// A change-notification callback. Must not call back into the
/// document: implementations may dispatch while holding their lock.
pub type Listener = Box<dyn Fn(FullscreenEvent) + Send + Sync>;

/// Browser-style document surface: fullscreen state, vendor-variant
/// request/exit, and change-notification registration.
pub trait Document: Send + Sync {
    /// Whether some element currently holds fullscreen.
    fn fullscreen_element(&self) -> bool;

    /// Request fullscreen on the root element via the given variant.
    /// Returns `false` when the host doesn't implement that variant
    /// (nothing was requested).
    fn request_fullscreen(&self, api: FullscreenApi) -> bool;

    /// Exit fullscreen via the given variant. Returns `false` when the
    /// host doesn't implement that variant.
    fn exit_fullscreen(&self, api: FullscreenApi) -> bool;

    fn add_event_listener(&self, event: FullscreenEvent, listener: Listener) -> ListenerId;

    fn remove_event_listener(&self, id: ListenerId);
}

/// Request or exit fullscreen, trying vendor variants in priority order
/// until one is implemented. Does not touch any tracked state; the
/// follow-up change notification does that.
///
/// A host with no variant at all degrades to a silent no-op.
pub fn toggle_fullscreen(document: &dyn Document) {
    if document.fullscreen_element() {
        for api in FullscreenApi::PRIORITY {
            if document.exit_fullscreen(api) {
                debug!("Exit fullscreen requested via {:?}", api);
                return;
            }
        }
        warn!("No fullscreen exit variant available, ignoring toggle");
    } else {
        for api in FullscreenApi::PRIORITY {
            if document.request_fullscreen(api) {
                debug!("Fullscreen requested via {:?}", api);
                return;
            }
        }
        warn!("No fullscreen request variant available, ignoring toggle");
    }
}

/// Scoped registration of one handler across all four change-event
/// names. Dropping the subscription removes every listener it added,
/// each exactly once, however the owner goes away.
pub struct FullscreenSubscription {
    document: std::sync::Arc<dyn Document>,
    ids: Vec<ListenerId>,
}

impl FullscreenSubscription {
    /// Register `handler` for every variant event name on `document`.
    pub fn subscribe<F>(document: std::sync::Arc<dyn Document>, handler: F) -> Self
    where
        F: Fn(FullscreenEvent) + Send + Sync + Clone + 'static,
    {
        let ids = FullscreenEvent::ALL
            .iter()
            .map(|&event| {
                let handler = handler.clone();
                document.add_event_listener(event, Box::new(move |ev| handler(ev)))
            })
            .collect();
        Self { document, ids }
    }
}

impl Drop for FullscreenSubscription {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.document.remove_event_listener(id);
        }
    }
}

// ============================================================================
// Terminal implementation
// ============================================================================

/// The console's own document. A terminal has no vendor zoo, so only
/// the standard variant exists; webkit/ms report unsupported and the
/// fallback walk in [`toggle_fullscreen`] skips past them.
#[derive(Default)]
pub struct TerminalDocument {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    fullscreen: bool,
    next_id: u64,
    listeners: Vec<(ListenerId, FullscreenEvent, Listener)>,
}

impl TerminalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_fullscreen(&self, value: bool) {
        let mut inner = self.inner.lock().unwrap();
        if inner.fullscreen == value {
            return;
        }
        inner.fullscreen = value;
        // Standard-only host: the standard event name is the one fired.
        for (_, event, listener) in inner.listeners.iter() {
            if *event == FullscreenEvent::FullscreenChange {
                listener(*event);
            }
        }
    }
}

impl Document for TerminalDocument {
    fn fullscreen_element(&self) -> bool {
        self.inner.lock().unwrap().fullscreen
    }

    fn request_fullscreen(&self, api: FullscreenApi) -> bool {
        match api {
            FullscreenApi::Standard => {
                self.set_fullscreen(true);
                true
            }
            _ => false,
        }
    }

    fn exit_fullscreen(&self, api: FullscreenApi) -> bool {
        match api {
            FullscreenApi::Standard => {
                self.set_fullscreen(false);
                true
            }
            _ => false,
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
