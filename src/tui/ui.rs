use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::route::{self, GAME_PLAY_SEGMENT};
use crate::core::state::{App, GameSummary};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::LogoutDialog;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, body_area, status_area] = layout.areas(frame.area());

    tui.nav_bar.render(frame, nav_area);

    let path = app.router.path();
    let flags = route::classify(path);
    if flags.is_dashboard {
        draw_dashboard(frame, body_area, app);
    } else if flags.is_game_play {
        draw_game_play(frame, body_area, path);
    } else if path == "/leaderboard" {
        draw_leaderboard(frame, body_area);
    } else {
        draw_welcome(frame, body_area, app);
    }

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", app.status_message),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            " ^D Dashboard  ^P Play  ^B Leaderboard  ^C Quit ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(status, status_area);

    // Logout confirmation overlay sits above everything
    if let Some(dialog_state) = tui.nav_bar.dialog() {
        LogoutDialog::new(dialog_state).render(frame, frame.area());
    }
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let games = app.filtered_games();
    let block = Block::bordered().title(" Games ");

    if games.is_empty() {
        let empty = Paragraph::new("No games match your search.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = games
        .into_iter()
        .map(|game| ListItem::new(game_line(game, inner_width)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn game_line(game: &GameSummary, inner_width: usize) -> Line<'static> {
    let date = format_timestamp(game.created_at);
    let count = format!("{} questions", game.question_count);

    // Layout: "  Aug 01  <name>   12 questions "
    let fixed_width = date.width() + 2 + count.width() + 2;
    let name_width = inner_width.saturating_sub(fixed_width).max(8);
    let name = truncate_str(&game.name, name_width);
    let padded_name = format!("{:<width$}", name, width = name_width);

    Line::from(vec![
        Span::styled(date, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(padded_name, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_game_play(frame: &mut Frame, area: Rect, path: &str) {
    let game_id = path
        .split(GAME_PLAY_SEGMENT)
        .nth(1)
        .map(|rest| rest.trim_start_matches('/'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or("?");

    let body = Paragraph::new(format!(
        "Playing game {game_id}.\n\nWaiting for the host to advance the question..."
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title(" Game "));
    frame.render_widget(body, area);
}

fn draw_leaderboard(frame: &mut Frame, area: Rect) {
    let body = Paragraph::new("Top players will appear here after a session ends.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Leaderboard "));
    frame.render_widget(body, area);
}

fn draw_welcome(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.auth.is_authenticated() {
        "Nothing here. Press Ctrl+D for the dashboard."
    } else {
        "You are not logged in.\n\nSet BIGBRAIN_TOKEN (or [server].admin_token in\n~/.bigbrain/config.toml) and restart."
    };
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" BigBrain "));
    frame.render_widget(body, area);
}

/// Format a Unix timestamp as "Aug 01" style date.
fn format_timestamp(ts: i64) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default();
    dt.format("%b %d").to_string()
}

/// Truncate a string to fit within `max_width` columns, adding "..." if
/// needed. Width-aware so wide glyphs don't overflow the row.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let budget = max_width - 3;
    for c in s.chars() {
        let next = format!("{out}{c}");
        if next.width() > budget {
            break;
        }
        out = next;
    }
    format!("{out}...")
}
