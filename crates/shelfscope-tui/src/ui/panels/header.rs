use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Mode, Screen};

/// Breadcrumb on the left, search box on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut crumbs = vec![Span::styled(
        " shelfscope ",
        Style::default()
            .fg(app.theme.frost_ice())
            .add_modifier(Modifier::BOLD),
    )];
    for screen in &app.screens {
        crumbs.push(Span::styled(" › ", Style::default().fg(app.theme.muted())));
        let style = match screen {
            Screen::Genres(_) => Style::default().fg(app.theme.frost_mint()),
            Screen::Books(_) => Style::default().fg(app.theme.fg_bright()),
        };
        crumbs.push(Span::styled(screen.title().to_string(), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(crumbs)]).block(block),
        chunks[0],
    );

    let searching = app.mode == Mode::Search;
    let term = app.screen().view_state().search_term();
    let search_line = if term.is_empty() && !searching {
        Line::from(Span::styled(
            "press / to search by title",
            Style::default().fg(app.theme.muted()),
        ))
    } else {
        let mut spans = vec![
            Span::styled("Search: ", Style::default().fg(app.theme.yellow())),
            Span::styled(term.to_string(), Style::default().fg(app.theme.fg_bright())),
        ];
        if searching {
            spans.push(Span::styled("▏", Style::default().fg(app.theme.cursor_bg())));
        }
        Line::from(spans)
    };
    let border = if searching {
        app.theme.yellow()
    } else {
        app.theme.border()
    };
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(app.theme.bg()));
    frame.render_widget(Paragraph::new(search_line).block(search_block), chunks[1]);
}
