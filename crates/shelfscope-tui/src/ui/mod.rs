pub(crate) mod overlays;
pub(crate) mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;
use crate::popup::Popup;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header + search
            Constraint::Length(1), // filter bar
            Constraint::Min(3),    // body
            Constraint::Length(1), // pagination
            Constraint::Length(1), // status bar
        ])
        .split(size);

    panels::header::render(frame, app, main_layout[0]);
    panels::filter_bar::render(frame, app, main_layout[1]);
    panels::body::render(frame, app, main_layout[2]);
    panels::pagination::render(frame, app, main_layout[3]);
    panels::statusbar::render(frame, app, main_layout[4]);

    // Popup overlay (on top of everything)
    match &app.popup {
        Some(Popup::Help) => overlays::help::render(frame, app, size),
        Some(Popup::Favorites(state)) => overlays::favorites::render(frame, app, state, size),
        None => {}
    }
}

// ─── Helpers ───────────────────────────────────────────────

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

/// Create a centered rectangle.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
