use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::App;
use crate::popup::FavoritesPopup;

pub fn render(frame: &mut Frame, app: &App, popup: &FavoritesPopup, area: Rect) {
    let overlay_area = crate::ui::centered_rect(70, 60, area);
    frame.render_widget(Clear, overlay_area);

    let entries = app.favorites.list();
    let block = Block::default()
        .title(Span::styled(
            format!(" Favorites ({}) ", entries.len()),
            Style::default()
                .fg(app.theme.star_color())
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " j/k move · d remove · Esc close ",
            Style::default().fg(app.theme.muted()),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.frost_blue()))
        .style(Style::default().bg(app.theme.bg()));

    if entries.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No favorites yet. Press f on a book to add one.",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, overlay_area);
        return;
    }

    let items: Vec<ListItem> = entries
        .into_iter()
        .map(|entry| {
            let mut spans = vec![Span::styled(
                entry.title,
                Style::default().fg(app.theme.fg_bright()),
            )];
            if !entry.author.is_empty() {
                spans.push(Span::styled(
                    format!("  by {}", entry.author),
                    Style::default().fg(app.theme.muted()),
                ));
            }
            if !entry.price.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", entry.price),
                    Style::default().fg(app.theme.price_color()),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(app.theme.cursor_bg())
                .fg(app.theme.cursor_fg())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(popup.selected));
    frame.render_stateful_widget(list, overlay_area, &mut state);
}
