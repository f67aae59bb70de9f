//! # NavBar Component
//!
//! The persistent top bar. This is the one place in the console with
//! real state coordination: it keeps three independent pieces of UI
//! state in step with the route and the platform document.
//!
//! - **Route flags** are derived from the path every cycle, never stored.
//! - **Fullscreen** is mirrored from the document. The toggle only
//!   *requests* a change; `sync_fullscreen` re-reads the document when a
//!   change notification arrives, so the mirror cannot drift for longer
//!   than one loop turn.
//! - **Search** binds the shared [`SearchStore`]: keystrokes forward the
//!   new value verbatim, and any cycle spent off the dashboard clears
//!   the store (idempotent, so level-triggered beats edge tracking).
//! - **Logout** is a two-step confirmation. Once confirmed, the dialog
//!   stays open until the async logout completes, which also blocks a
//!   second confirmation.
//!
//! The right-hand control is mutually exclusive: fullscreen toggle on a
//! game-play route (authenticated or not), logout button when
//! authenticated elsewhere, nothing otherwise.

use std::sync::{Arc, mpsc};

use log::{info, warn};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::route::{self, DASHBOARD_PATH, RouteFlags};
use crate::core::search::SearchStore;
use crate::platform::document::{Document, FullscreenSubscription, toggle_fullscreen};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// State of the logout confirmation overlay while it is open.
pub struct LogoutDialogState {
    /// True from confirm until the async logout completes. While set,
    /// the dialog accepts no input; only `logout_finished` closes it.
    pub pending: bool,
}

/// Events the nav bar hands back to the event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(String),
    /// Spawn the async logout; report back with `Action::LogoutFinished`.
    ConfirmLogout,
}

pub struct NavBar {
    // Props, synced from App once per loop turn
    path: String,
    is_authenticated: bool,
    // Owned state
    is_fullscreen: bool,
    logout_dialog: Option<LogoutDialogState>,
    // Injected collaborators
    search: SearchStore,
    document: Arc<dyn Document>,
    // Held for its Drop: deregisters the four change listeners
    _subscription: FullscreenSubscription,
}

impl NavBar {
    /// Mounts the nav bar: registers one handler across all four
    /// fullscreen-change event names. Each firing is forwarded to the
    /// event loop, which answers with [`NavBar::sync_fullscreen`].
    pub fn new(
        document: Arc<dyn Document>,
        search: SearchStore,
        tx: mpsc::Sender<Action>,
    ) -> Self {
        let subscription = FullscreenSubscription::subscribe(document.clone(), move |event| {
            if tx.send(Action::FullscreenChanged(event)).is_err() {
                warn!("Failed to deliver fullscreen change: receiver dropped");
            }
        });
        Self {
            path: String::new(),
            is_authenticated: false,
            is_fullscreen: false,
            logout_dialog: None,
            search,
            document,
            _subscription: subscription,
        }
    }

    fn flags(&self) -> RouteFlags {
        route::classify(&self.path)
    }

    fn search_active(&self) -> bool {
        self.flags().is_dashboard && self.is_authenticated
    }

    /// Sync props from app state. Runs once per loop turn before the
    /// draw. Off the dashboard the shared query is force-cleared; the
    /// clear is idempotent so re-running it every turn is safe.
    pub fn sync(&mut self, path: &str, is_authenticated: bool) {
        if self.path != path {
            self.path = path.to_string();
        }
        self.is_authenticated = is_authenticated;
        if !self.flags().is_dashboard {
            self.search.clear();
        }
    }

    /// Apply a change notification by re-reading the document. The
    /// notification, not the toggle, is authoritative for the mirror.
    pub fn sync_fullscreen(&mut self) {
        self.is_fullscreen = self.document.fullscreen_element();
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn dialog(&self) -> Option<&LogoutDialogState> {
        self.logout_dialog.as_ref()
    }

    /// The async logout completed (either way): close the dialog.
    pub fn logout_finished(&mut self) {
        info!("Logout completed, closing dialog");
        self.logout_dialog = None;
    }
}

impl EventHandler for NavBar {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        // An open dialog is modal.
        if let Some(dialog) = &mut self.logout_dialog {
            if dialog.pending {
                // Logout in flight: nothing else may move the dialog.
                return None;
            }
            return match event {
                TuiEvent::Submit => {
                    dialog.pending = true;
                    Some(NavEvent::ConfirmLogout)
                }
                TuiEvent::Escape | TuiEvent::Logout => {
                    self.logout_dialog = None;
                    None
                }
                _ => None,
            };
        }

        let flags = self.flags();
        match event {
            TuiEvent::ToggleFullscreen if flags.is_game_play => {
                // Request only; is_fullscreen changes when the
                // notification comes back around.
                toggle_fullscreen(&*self.document);
                None
            }
            TuiEvent::Logout if !flags.is_game_play && self.is_authenticated => {
                self.logout_dialog = Some(LogoutDialogState { pending: false });
                None
            }
            // Brand shortcut: back to the dashboard
            TuiEvent::GoDashboard => Some(NavEvent::Navigate(DASHBOARD_PATH.to_string())),
            TuiEvent::InputChar(c) if self.search_active() => {
                let mut value = self.search.query();
                value.push(*c);
                self.search.set_query(value);
                None
            }
            TuiEvent::Backspace if self.search_active() => {
                let mut value = self.search.query();
                value.pop();
                self.search.set_query(value);
                None
            }
            _ => None,
        }
    }
}

impl Component for NavBar {
    /// Single-line bar: brand on the left, search box in the middle
    /// (dashboard + authenticated only), the mutually exclusive control
    /// flush right.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let flags = self.flags();
        let brand_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(" ☰ ", Style::default().fg(Color::DarkGray)),
            Span::styled("BigBrain", brand_style),
        ];

        if self.search_active() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                "Search games: ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                self.search.query(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled("▏", Style::default().fg(Color::DarkGray)));
        }

        let control = if flags.is_game_play {
            Some(if self.is_fullscreen {
                "[ Exit Fullscreen ^F ]"
            } else {
                "[ Fullscreen ^F ]"
            })
        } else if self.is_authenticated {
            Some("[ Logout ^L ]")
        } else {
            None
        };

        if let Some(label) = control {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let gap = (area.width as usize)
                .saturating_sub(used)
                .saturating_sub(label.width() + 1);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
