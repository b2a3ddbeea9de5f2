//! Route changes and (re)loading.

use tracing::{debug, info};

use super::{App, BooksView, Mode, NotificationLevel, Screen};

impl App {
    /// Push the Books view for the genre under the cursor and start loading it.
    pub fn open_selected_genre(&mut self) {
        let Screen::Genres(view) = self.screen() else {
            return;
        };
        let Some(genre) = view.selected() else {
            return;
        };
        let key = genre.list_name_encoded.clone();
        let title = genre.display_name.clone();
        self.open_books(key, Some(title));
    }

    /// Push a Books view for `genre_key`. `title` may be absent when the
    /// route was entered directly.
    pub fn open_books(&mut self, genre_key: String, title: Option<String>) {
        info!(genre = %genre_key, "opening book list");
        self.mode = Mode::Normal;
        self.screens.push(Screen::Books(BooksView {
            genre_key,
            title,
            list: Self::list_view(&self.config),
        }));
        self.reload();
    }

    /// Pop back to the previous view. Dropping the view cancels its load.
    pub fn go_back(&mut self) {
        self.mode = Mode::Normal;
        if self.screens.len() > 1 {
            self.screens.pop();
        }
    }

    /// Refetch the focused view's data.
    pub fn reload(&mut self) {
        let load_id = self.allocate_load_id();
        let loader = self.loader.clone();
        match self.screen_mut() {
            Screen::Genres(view) => {
                let token = view.begin_load(load_id);
                debug!(load_id, "loading genres");
                if let Some(loader) = loader {
                    loader.spawn_genre_load(load_id, token);
                }
            }
            Screen::Books(view) => {
                let token = view.list.begin_load(load_id);
                debug!(load_id, genre = %view.genre_key, "loading books");
                if let Some(loader) = loader {
                    loader.spawn_books_load(load_id, view.genre_key.clone(), token);
                }
            }
        }
    }

    /// Queue the selected book's purchase link for the event loop to open.
    pub fn open_selected_link(&mut self) {
        let Some(book) = self.selected_book() else {
            return;
        };
        if book.amazon_product_url.is_empty() {
            let title = book.title().to_string();
            self.notify(NotificationLevel::Info, format!("No purchase link for \"{title}\""));
            return;
        }
        let url = book.amazon_product_url.clone();
        self.pending_open_url = Some(url);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shelfscope_core::{AppConfig, Book, BookDetail, FavoritesStore, GenreSummary};

    use super::*;
    use crate::app::ViewAction;
    use crate::app::async_tasks::AsyncResult;

    fn app() -> App {
        let mut app = App::new(AppConfig::default(), Arc::new(FavoritesStore::new()));
        app.start();
        let load_id = app.screen().load_id();
        app.handle_async(AsyncResult::GenresLoaded {
            load_id,
            result: Ok(vec![
                GenreSummary {
                    display_name: "Hardcover Fiction".to_string(),
                    list_name_encoded: "hardcover-fiction".to_string(),
                    ..Default::default()
                },
                GenreSummary {
                    display_name: "Travel".to_string(),
                    list_name_encoded: "travel".to_string(),
                    ..Default::default()
                },
            ]),
        });
        app
    }

    #[test]
    fn opening_a_genre_pushes_books_with_title() {
        let mut app = app();
        app.apply(ViewAction::SelectNext);
        app.open_selected_genre();

        assert_eq!(app.screens.len(), 2);
        let Screen::Books(view) = app.screen() else {
            panic!("expected books");
        };
        assert_eq!(view.genre_key, "travel");
        assert_eq!(view.display_title(), "Travel");
        assert!(view.list.loading);
    }

    #[test]
    fn back_keeps_genres_loaded() {
        let mut app = app();
        app.open_selected_genre();
        app.go_back();
        assert_eq!(app.screens.len(), 1);
        assert!(!app.screen().is_loading());

        // Root is never popped.
        app.go_back();
        assert_eq!(app.screens.len(), 1);
    }

    #[test]
    fn direct_route_uses_placeholder_title() {
        let mut app = app();
        app.open_books("audio-fiction".to_string(), None);
        assert_eq!(app.screen().title(), "Untitled list");
    }

    #[test]
    fn link_is_queued_for_selected_book() {
        let mut app = app();
        app.open_selected_genre();
        let load_id = app.screen().load_id();
        app.handle_async(AsyncResult::BooksLoaded {
            load_id,
            result: Ok(vec![
                Book {
                    rank: 1,
                    amazon_product_url: "https://a.example/dune".to_string(),
                    book_details: vec![BookDetail::new("Dune")],
                },
                Book {
                    rank: 2,
                    amazon_product_url: String::new(),
                    book_details: vec![BookDetail::new("Emma")],
                },
            ]),
        });

        app.open_selected_link();
        assert_eq!(app.pending_open_url.as_deref(), Some("https://a.example/dune"));

        app.pending_open_url = None;
        app.apply(ViewAction::SelectNext);
        app.open_selected_link();
        assert!(app.pending_open_url.is_none());
        assert!(app.notification.is_some());
    }
}
