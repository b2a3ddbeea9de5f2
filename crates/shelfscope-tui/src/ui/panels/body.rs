use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use shelfscope_core::{Book, GenreSummary, LayoutMode};

use crate::app::{App, Screen};
use crate::ui::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    if screen.is_loading() {
        render_message(frame, app, block, area, "Loading…");
        return;
    }

    let width = usize::from(area.width.saturating_sub(4));
    let cards: Vec<Vec<Line<'static>>> = match screen {
        Screen::Genres(view) => view
            .visible()
            .into_iter()
            .map(|g| genre_lines(app, g))
            .collect(),
        Screen::Books(view) => view
            .list
            .visible()
            .into_iter()
            .map(|b| book_lines(app, b, width))
            .collect(),
    };

    if cards.is_empty() {
        let term = screen.view_state().search_term();
        let msg = if term.is_empty() {
            "No results".to_string()
        } else {
            format!("No results for \"{term}\"")
        };
        render_message(frame, app, block, area, &msg);
        return;
    }

    let selected = screen.view_state().selected();
    match screen.view_state().layout() {
        LayoutMode::List => render_list(frame, app, block, area, cards, selected),
        LayoutMode::Column => render_grid(frame, app, area, cards, selected),
    }
}

fn render_message(frame: &mut Frame, app: &App, block: Block, area: Rect, msg: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), Style::default().fg(app.theme.muted()))),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_list(
    frame: &mut Frame,
    app: &App,
    block: Block,
    area: Rect,
    cards: Vec<Vec<Line<'static>>>,
    selected: usize,
) {
    let items: Vec<ListItem> = cards
        .into_iter()
        .map(|mut lines| {
            lines.push(Line::from(""));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(app.theme.cursor_bg())
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_grid(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    cards: Vec<Vec<Line<'static>>>,
    selected: usize,
) {
    let cols = usize::from(app.config.ui.grid_columns.max(1));
    let rows = cards.len().div_ceil(cols);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (i, lines) in cards.into_iter().enumerate() {
        let row_area = row_areas[i / cols];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(row_area);

        let border = if i == selected {
            app.theme.frost_ice()
        } else {
            app.theme.border()
        };
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(app.theme.bg())),
            );
        frame.render_widget(card, cells[i % cols]);
    }
}

fn genre_lines(app: &App, genre: &GenreSummary) -> Vec<Line<'static>> {
    let label = Style::default().fg(app.theme.muted());
    let date = Style::default().fg(app.theme.date_color());
    vec![
        Line::from(Span::styled(
            genre.display_name.clone(),
            Style::default()
                .fg(app.theme.frost_mint())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Updated: ", label),
            Span::styled(genre.updated.clone(), Style::default().fg(app.theme.fg())),
        ]),
        Line::from(vec![
            Span::styled("Newest: ", label),
            Span::styled(genre.newest_published_date.clone(), date),
            Span::styled("  Oldest: ", label),
            Span::styled(genre.oldest_published_date.clone(), date),
        ]),
    ]
}

fn book_lines(app: &App, book: &Book, width: usize) -> Vec<Line<'static>> {
    let Some(detail) = book.primary_detail() else {
        return vec![Line::from(format!("#{}", book.rank))];
    };
    let muted = Style::default().fg(app.theme.muted());

    let mut title = vec![
        Span::styled(format!("#{} ", book.rank), Style::default().fg(app.theme.yellow())),
        Span::styled(
            detail.title.clone(),
            Style::default()
                .fg(app.theme.fg_bright())
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.is_favorite(detail) {
        title.push(Span::styled(" ★", Style::default().fg(app.theme.star_color())));
    }

    let mut byline = Vec::new();
    if !detail.author.is_empty() {
        byline.push(Span::styled(format!("by {}", detail.author), Style::default().fg(app.theme.fg())));
    }
    if !detail.publisher.is_empty() {
        if !byline.is_empty() {
            byline.push(Span::styled(" · ", muted));
        }
        byline.push(Span::styled(detail.publisher.clone(), muted));
    }

    let cover = if detail.has_cover() {
        Span::styled(
            truncate(&format!("Cover: {}", detail.image), width),
            Style::default().fg(app.theme.link_color()),
        )
    } else {
        Span::styled("No cover", muted)
    };

    vec![
        Line::from(title),
        Line::from(byline),
        Line::from(vec![
            Span::styled("Buy for ", muted),
            Span::styled(detail.price.clone(), Style::default().fg(app.theme.price_color())),
        ]),
        Line::from(Span::styled(truncate(&detail.description, width), muted)),
        Line::from(cover),
    ]
}
