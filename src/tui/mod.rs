//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and routes keyboard events into the nav bar and the router.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop shape
//!
//! Single-threaded draw/poll loop. Each turn:
//!
//! 1. Sync nav bar props from `App` (this is also where the shared
//!    search query gets cleared on non-dashboard routes).
//! 2. Draw if anything changed.
//! 3. Drain input events; the nav bar gets first crack (its dialog is
//!    modal), leftovers become route shortcuts.
//! 4. Drain the `Action` channel: logout completions and fullscreen
//!    change notifications, applied in delivery order.
//!
//! The only suspension point is the spawned logout task; the dialog
//! stays open until its `Action::LogoutFinished` comes back.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::Action;
use crate::core::auth::{ApiAuth, AuthProvider};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::platform::document::{Document, TerminalDocument};
use crate::tui::component::EventHandler;
use crate::tui::components::{NavBar, NavEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core app state).
pub struct TuiState {
    pub nav_bar: NavBar,
}

/// Build the auth provider from resolved config.
pub fn build_auth(config: &ResolvedConfig) -> Arc<dyn AuthProvider> {
    Arc::new(ApiAuth::new(
        config.base_url.clone(),
        config.admin_token.clone(),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let auth = build_auth(&config);
    let document: Arc<dyn Document> = Arc::new(TerminalDocument::new());
    let mut app = App::from_config(auth.clone(), &config);

    // Channel for completions from background tasks and document listeners
    let (tx, rx) = mpsc::channel();
    let mut tui = TuiState {
        nav_bar: NavBar::new(document.clone(), app.search.clone(), tx.clone()),
    };

    let mut terminal = ratatui::init();
    info!("Console started at {}", app.router.path());

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync NavBar props with App state each turn
        tui.nav_bar
            .sync(app.router.path(), app.auth.is_authenticated());

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let mut should_quit = false;
        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // While the logout dialog is open it is modal: every event
            // goes to the nav bar and nowhere else
            if tui.nav_bar.dialog().is_some() {
                if let Some(NavEvent::ConfirmLogout) = tui.nav_bar.handle_event(&event) {
                    spawn_logout(auth.clone(), tx.clone());
                }
                continue;
            }

            // NavBar gets first crack: search input, fullscreen toggle,
            // logout request, brand shortcut
            if let Some(nav_event) = tui.nav_bar.handle_event(&event) {
                match nav_event {
                    NavEvent::Navigate(path) => app.router.navigate(path),
                    NavEvent::ConfirmLogout => spawn_logout(auth.clone(), tx.clone()),
                }
                continue;
            }

            // Leftovers: route shortcuts and quit
            match event {
                TuiEvent::Escape => should_quit = true,
                TuiEvent::GoPlay => {
                    let path = match app.games.first() {
                        Some(game) => format!("/play/game/{}", game.id),
                        None => "/play/game".to_string(),
                    };
                    app.router.navigate(path);
                }
                TuiEvent::GoLeaderboard => app.router.navigate("/leaderboard"),
                _ => {}
            }
        }

        // Handle background completions, in delivery order
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match action {
                Action::LogoutFinished => {
                    tui.nav_bar.logout_finished();
                    app.status_message = String::from("Logged out");
                }
                Action::FullscreenChanged(event) => {
                    debug!("Fullscreen change via {}", event.name());
                    tui.nav_bar.sync_fullscreen();
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run the async logout off the UI thread and report completion back
/// over the action channel. The dialog layer never sees the result.
fn spawn_logout(auth: Arc<dyn AuthProvider>, tx: mpsc::Sender<Action>) {
    info!("Spawning logout request");
    tokio::spawn(async move {
        if let Err(e) = auth.logout().await {
            warn!("Logout failed: {}", e);
        }
        if tx.send(Action::LogoutFinished).is_err() {
            warn!("Failed to send LogoutFinished: receiver dropped");
        }
    });
}
