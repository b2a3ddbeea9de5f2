use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let state = screen.view_state();
    let results = match screen {
        Screen::Genres(view) => view.filtered_len(),
        Screen::Books(view) => view.list.filtered_len(),
    };

    let label = Style::default().fg(app.theme.muted());
    let value = Style::default().fg(app.theme.frost_blue());
    let content = Line::from(vec![
        Span::styled(
            format!(" {} ", screen.title()),
            Style::default()
                .fg(app.theme.fg_bright())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {results} results "), label),
        Span::styled("│ Items per page: ", label),
        Span::styled(state.items_per_page().to_string(), value),
        Span::styled(" │ Layout: ", label),
        Span::styled(state.layout().label(), value),
    ]);

    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}
