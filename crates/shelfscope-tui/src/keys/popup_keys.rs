use crossterm::event::KeyCode;

use crate::app::{App, NotificationLevel};
use crate::popup::Popup;

pub(super) fn handle_popup_key(app: &mut App, code: KeyCode) {
    let Some(popup) = app.popup.as_mut() else {
        return;
    };

    match popup {
        Popup::Help => {
            if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter) {
                app.popup = None;
            }
        }
        Popup::Favorites(state) => {
            let len = app.favorites.len();
            match code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('F') => app.popup = None,
                KeyCode::Char('j') | KeyCode::Down => state.move_down(len),
                KeyCode::Char('k') | KeyCode::Up => state.move_up(),
                KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                    let Some(entry) = app.favorites.list().into_iter().nth(state.selected) else {
                        return;
                    };
                    // Title is the identity, so every entry sharing it goes.
                    app.favorites.remove(&entry.title);
                    state.clamp(app.favorites.len());
                    app.notify(
                        NotificationLevel::Info,
                        format!("Removed \"{}\" from favorites", entry.title),
                    );
                }
                _ => {}
            }
        }
    }
}
