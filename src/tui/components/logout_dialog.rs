//! # Logout Dialog Component
//!
//! Centered confirmation overlay guarding the logout action.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LogoutDialogState` lives on the `NavBar` (it owns the flow)
//! - `LogoutDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::components::nav_bar::LogoutDialogState;

/// Transient render wrapper for the logout confirmation overlay.
pub struct LogoutDialog<'a> {
    state: &'a LogoutDialogState,
}

impl<'a> LogoutDialog<'a> {
    pub fn new(state: &'a LogoutDialogState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 20, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.pending {
            " Logging out... "
        } else {
            " Enter Logout  Esc Cancel "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Logout ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let body = Paragraph::new("Are you sure you want to logout?")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_state(state: &LogoutDialogState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LogoutDialog::new(state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_dialog_offers_confirm_and_cancel() {
        let text = render_state(&LogoutDialogState { pending: false });
        assert!(text.contains("Are you sure you want to logout?"));
        assert!(text.contains("Enter Logout"));
        assert!(text.contains("Esc Cancel"));
    }

    #[test]
    fn test_pending_dialog_shows_progress_instead_of_actions() {
        let text = render_state(&LogoutDialogState { pending: true });
        assert!(text.contains("Logging out..."));
        assert!(!text.contains("Enter Logout"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(40, 20, outer);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() <= outer.right());
        assert!(inner.bottom() <= outer.bottom());
    }
}
