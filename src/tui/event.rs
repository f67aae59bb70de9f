use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C - quit regardless of state
    ForceQuit,
    /// Esc - cancel the open dialog, otherwise quit
    Escape,
    /// Enter - confirm the open dialog
    Submit,

    InputChar(char),
    Backspace,

    // Nav bar controls
    ToggleFullscreen, // Ctrl+F (terminals swallow F11)
    Logout,           // Ctrl+L

    // Route shortcuts
    GoDashboard,   // Ctrl+D
    GoPlay,        // Ctrl+P
    GoLeaderboard, // Ctrl+B

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::ToggleFullscreen),
                    (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Logout),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::GoDashboard),
                    (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::GoPlay),
                    (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(TuiEvent::GoLeaderboard),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
