//! # Application State
//!
//! Core business state for the BigBrain console. This module contains
//! domain state only - no TUI-specific types. Presentation state (nav
//! bar dialog, fullscreen mirror) lives with the components that own it.
//!
//! ```text
//! App
//! ├── auth: Arc<dyn AuthProvider>   // session + async logout
//! ├── router: Router                // current path
//! ├── search: SearchStore           // shared dashboard search query
//! ├── games: Vec<GameSummary>       // dashboard content
//! └── status_message: String        // status line text
//! ```

use crate::core::auth::AuthProvider;
use crate::core::config::ResolvedConfig;
use crate::core::router::Router;
use crate::core::search::SearchStore;
use std::sync::Arc;

/// A quiz game shown on the dashboard.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub id: u32,
    pub name: String,
    pub question_count: usize,
    /// Unix timestamp of creation, rendered as a short date.
    pub created_at: i64,
}

pub struct App {
    pub auth: Arc<dyn AuthProvider>,
    pub router: Router,
    pub search: SearchStore,
    pub games: Vec<GameSummary>,
    pub status_message: String,
}

impl App {
    pub fn new(auth: Arc<dyn AuthProvider>, start_path: impl Into<String>) -> Self {
        // Unauthenticated sessions land on the welcome screen instead.
        let initial = if auth.is_authenticated() {
            start_path.into()
        } else {
            "/".to_string()
        };
        Self {
            auth,
            router: Router::new(initial),
            search: SearchStore::new(),
            games: sample_games(),
            status_message: String::from("Welcome to BigBrain!"),
        }
    }

    pub fn from_config(auth: Arc<dyn AuthProvider>, config: &ResolvedConfig) -> Self {
        Self::new(auth, config.start_path.clone())
    }

    /// Dashboard games matching the shared search query
    /// (case-insensitive substring on the name; empty query matches all).
    pub fn filtered_games(&self) -> Vec<&GameSummary> {
        let query = self.search.query().to_lowercase();
        self.games
            .iter()
            .filter(|g| query.is_empty() || g.name.to_lowercase().contains(&query))
            .collect()
    }
}

/// Built-in demo catalogue. The admin API serves the real one; the
/// console seeds this so the dashboard is browsable offline.
fn sample_games() -> Vec<GameSummary> {
    vec![
        GameSummary {
            id: 1,
            name: "Zombie Trivia Night".to_string(),
            question_count: 12,
            created_at: 1_754_006_400, // Aug 1 2025
        },
        GameSummary {
            id: 2,
            name: "Capital Cities Blitz".to_string(),
            question_count: 8,
            created_at: 1_754_611_200,
        },
        GameSummary {
            id: 3,
            name: "Movie Quotes Marathon".to_string(),
            question_count: 20,
            created_at: 1_755_216_000,
        },
        GameSummary {
            id: 4,
            name: "Zoology 101".to_string(),
            question_count: 15,
            created_at: 1_755_820_800,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, StubAuth};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to BigBrain!");
        assert_eq!(app.router.path(), "/dashboard");
        assert!(!app.games.is_empty());
        assert_eq!(app.search.query(), "");
    }

    #[test]
    fn test_unauthenticated_start_lands_on_welcome() {
        let app = App::new(Arc::new(StubAuth::new(false)), "/dashboard");
        assert_eq!(app.router.path(), "/");
    }

    #[test]
    fn test_filtered_games_matches_substring_case_insensitive() {
        let app = test_app();
        app.search.set_query("zo");
        let names: Vec<&str> = app
            .filtered_games()
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zombie Trivia Night", "Zoology 101"]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let app = test_app();
        assert_eq!(app.filtered_games().len(), app.games.len());
    }
}
