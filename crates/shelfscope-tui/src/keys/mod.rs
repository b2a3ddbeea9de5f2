mod popup_keys;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode, Screen, ViewAction};
use crate::popup::{FavoritesPopup, Popup};

pub(crate) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Popup takes priority
    if app.popup.is_some() {
        popup_keys::handle_popup_key(app, code);
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code),
        Mode::Search => handle_search_mode(app, code),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.popup = Some(Popup::Help),
        KeyCode::Char('F') => app.popup = Some(Popup::Favorites(FavoritesPopup::default())),
        KeyCode::Char('/') => app.mode = Mode::Search,

        KeyCode::Char('j') | KeyCode::Down => app.apply(ViewAction::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => app.apply(ViewAction::SelectPrev),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => app.apply(ViewAction::NextPage),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => app.apply(ViewAction::PrevPage),
        KeyCode::Char('g') | KeyCode::Home => app.apply(ViewAction::FirstPage),
        KeyCode::Char('G') | KeyCode::End => app.apply(ViewAction::LastPage),
        KeyCode::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).unwrap_or(1);
            app.apply(ViewAction::GotoPage(page));
        }

        KeyCode::Char('n') => app.apply(ViewAction::CyclePageSize),
        KeyCode::Char('v') => app.apply(ViewAction::ToggleLayout),
        KeyCode::Char('r') => app.reload(),

        KeyCode::Enter => match app.screen() {
            Screen::Genres(_) => app.open_selected_genre(),
            Screen::Books(_) => app.open_selected_link(),
        },
        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_favorite_selected(),
        KeyCode::Esc | KeyCode::Backspace => {
            if app.screen().view_state().search_term().is_empty() {
                app.go_back();
            } else {
                app.apply(ViewAction::ClearSearch);
            }
        }
        _ => {}
    }
}

/// Live search: every keystroke re-filters the focused view.
fn handle_search_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Normal,
        KeyCode::Backspace => app.apply(ViewAction::SearchBackspace),
        KeyCode::Char(c) => app.apply(ViewAction::SearchChar(c)),
        _ => {}
    }
}
