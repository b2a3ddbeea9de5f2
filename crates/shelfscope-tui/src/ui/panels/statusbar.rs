use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Mode, NotificationLevel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Mode
            Constraint::Min(10),    // Notification
            Constraint::Length(24), // Indicators
        ])
        .split(area);

    render_mode_zone(frame, app, chunks[0]);
    render_notification_zone(frame, app, chunks[1]);
    render_right_zone(frame, app, chunks[2]);
}

fn render_mode_zone(frame: &mut Frame, app: &App, area: Rect) {
    let (label, bg, fg) = match app.mode {
        Mode::Normal => (" NORMAL ", app.theme.frost_dark(), app.theme.fg_white()),
        Mode::Search => (" SEARCH ", app.theme.yellow(), app.theme.bg()),
    };

    let content = Line::from(Span::styled(
        label,
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}

fn render_notification_zone(frame: &mut Frame, app: &App, area: Rect) {
    let content = match &app.notification {
        Some(n) => {
            let color = match n.level {
                NotificationLevel::Info => app.theme.success(),
                NotificationLevel::Error => app.theme.danger(),
            };
            Line::from(Span::styled(format!(" {}", n.message), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}

fn render_right_zone(frame: &mut Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled(
            format!(" ★ {} ", app.favorites.len()),
            Style::default().fg(app.theme.star_color()),
        ),
        Span::styled(" ? help ", Style::default().fg(app.theme.muted())),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(app.theme.bg_secondary()))
            .alignment(Alignment::Right),
        area,
    );
}
