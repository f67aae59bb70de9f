//! # Authentication
//!
//! The nav bar only consumes two things from auth: `is_authenticated`
//! and an async `logout`. Both sit behind a trait so the TUI can be
//! exercised against a stub and the HTTP implementation can be tested
//! against a mock server.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use log::{info, warn};

/// Errors from auth operations.
#[derive(Debug)]
pub enum AuthError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server rejected the request.
    Api { status: u16, message: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Network(msg) => write!(f, "network error: {msg}"),
            AuthError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Whether a session is currently held.
    fn is_authenticated(&self) -> bool;

    /// End the current session. The nav bar's confirm dialog stays open
    /// until this resolves; it does not distinguish success from failure.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// Auth against the BigBrain backend. Holds the admin bearer token.
pub struct ApiAuth {
    base_url: String,
    client: reqwest::Client,
    token: Mutex<Option<String>>,
}

impl ApiAuth {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            token: Mutex::new(token),
        }
    }
}

#[async_trait]
impl AuthProvider for ApiAuth {
    fn is_authenticated(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        // Drop the token up front: the local session ends regardless of
        // whether the server hears about it.
        let token = self.token.lock().unwrap().take();
        let Some(token) = token else {
            info!("Logout with no active session, nothing to do");
            return Ok(());
        };

        let response = self
            .client
            .post(format!("{}/admin/auth/logout", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The backend wraps errors as {"error": "..."}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            warn!("Logout rejected by server: HTTP {} {}", status, message);
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!("Logged out");
        Ok(())
    }
}
