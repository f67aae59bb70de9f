//! # Platform Adapters
//!
//! The host-facing seam. The only capability the console needs from the
//! host is the fullscreen surface of a browser-style document object:
//! query the fullscreen element, request/exit across vendor variants,
//! and subscribe to change notifications.

pub mod document;
