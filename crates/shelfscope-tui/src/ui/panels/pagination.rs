use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

/// `<  1 2 [3] 4 5 6  >` built from the focused view's page controls.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let controls = app.screen().controls();

    let arrow = |enabled: bool, glyph: &'static str| {
        let style = if enabled {
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(app.theme.border())
                .add_modifier(Modifier::DIM)
        };
        Span::styled(glyph, style)
    };

    let mut spans = vec![arrow(controls.prev_enabled, " < "), Span::raw(" ")];
    for page in &controls.pages {
        if *page == controls.current_page {
            spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(app.theme.cursor_fg())
                    .bg(app.theme.cursor_bg())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {page} "),
                Style::default().fg(app.theme.fg()),
            ));
        }
    }
    spans.push(Span::raw(" "));
    spans.push(arrow(controls.next_enabled, " > "));

    let shown = if controls.total_pages == 0 {
        0
    } else {
        controls.current_page
    };
    spans.push(Span::styled(
        format!("   Page {shown} of {}", controls.total_pages),
        Style::default().fg(app.theme.muted()),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg())),
        area,
    );
}
