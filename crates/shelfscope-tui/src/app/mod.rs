pub mod async_tasks;
mod navigation;
pub mod views;

use std::sync::Arc;
use std::time::{Duration, Instant};

use shelfscope_core::{AppConfig, Book, BookDetail, FavoritesStore};
use tracing::{debug, error};

use crate::popup::Popup;
use crate::theme::NordTheme;
use async_tasks::{AsyncResult, Loader};
pub use views::{BooksView, GenreView, ListView, Screen, ViewAction};

/// Shown for any failed list load.
pub const LOAD_ERROR_MESSAGE: &str = "An error occurred while loading the data!";

/// Input modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A non-blocking message in the status line that dismisses itself.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub mode: Mode,
    /// Route stack. The bottom entry is always the genre list.
    pub screens: Vec<Screen>,
    pub favorites: Arc<FavoritesStore>,
    pub notification: Option<Notification>,
    pub popup: Option<Popup>,
    pub config: AppConfig,
    pub theme: NordTheme,
    /// Set by the key handler, consumed by the event loop.
    pub pending_open_url: Option<String>,
    loader: Option<Loader>,
    next_load_id: u64,
}

impl App {
    /// An app rooted at the genre list. Nothing is fetched until a loader is
    /// attached and [`App::start`] runs.
    pub fn new(config: AppConfig, favorites: Arc<FavoritesStore>) -> Self {
        let root = Screen::Genres(Self::list_view(&config));
        Self {
            should_quit: false,
            mode: Mode::Normal,
            screens: vec![root],
            favorites,
            notification: None,
            popup: None,
            config,
            theme: NordTheme::default(),
            pending_open_url: None,
            loader: None,
            next_load_id: 0,
        }
    }

    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Kick off the initial genre load.
    pub fn start(&mut self) {
        self.reload();
    }

    pub fn screen(&self) -> &Screen {
        // `screens` is never empty: `go_back` keeps the root.
        &self.screens[self.screens.len() - 1]
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        let last = self.screens.len() - 1;
        &mut self.screens[last]
    }

    /// Apply a browsing action to the focused view.
    pub fn apply(&mut self, action: ViewAction) {
        self.screen_mut().apply(action);
    }

    /// The book under the cursor, when the Books view is focused.
    pub fn selected_book(&self) -> Option<&Book> {
        match self.screen() {
            Screen::Books(view) => view.list.selected(),
            Screen::Genres(_) => None,
        }
    }

    /// Toggle favorite membership of the selected book's primary detail.
    pub fn toggle_favorite_selected(&mut self) {
        let Some(detail) = self.selected_book().and_then(Book::primary_detail).cloned() else {
            return;
        };
        let added = self.favorites.toggle(&detail);
        debug!(title = %detail.title, added, "favorite toggled");
        let message = if added {
            format!("Added \"{}\" to favorites", detail.title)
        } else {
            format!("Removed \"{}\" from favorites", detail.title)
        };
        self.notify(NotificationLevel::Info, message);
    }

    pub fn is_favorite(&self, detail: &BookDetail) -> bool {
        self.favorites.is_favorite(&detail.title)
    }

    // ─── Notifications ─────────────────────────────────────

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notify_at(level, message, Instant::now());
    }

    fn notify_at(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification {
            level,
            message: message.into(),
            expires_at: now + Duration::from_millis(self.config.ui.notification_ms),
        });
    }

    /// Periodic housekeeping: drop an expired notification.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }

    // ─── Async ─────────────────────────────────────────────

    /// Route a finished load to the view that requested it. Results for views
    /// that were torn down or reloaded since are dropped.
    pub fn handle_async(&mut self, result: AsyncResult) {
        let failure = match result {
            AsyncResult::GenresLoaded { load_id, result } => {
                let Some(view) = self.screens.iter_mut().find_map(|s| match s {
                    Screen::Genres(v) if v.accepts(load_id) => Some(v),
                    _ => None,
                }) else {
                    debug!(load_id, "dropping stale genre result");
                    return;
                };
                match result {
                    Ok(items) => {
                        view.finish_ok(items);
                        None
                    }
                    Err(e) => {
                        view.finish_err();
                        Some(e)
                    }
                }
            }
            AsyncResult::BooksLoaded { load_id, result } => {
                let Some(view) = self.screens.iter_mut().find_map(|s| match s {
                    Screen::Books(v) if v.list.accepts(load_id) => Some(&mut v.list),
                    _ => None,
                }) else {
                    debug!(load_id, "dropping stale books result");
                    return;
                };
                match result {
                    Ok(items) => {
                        view.finish_ok(items);
                        None
                    }
                    Err(e) => {
                        view.finish_err();
                        Some(e)
                    }
                }
            }
        };

        if let Some(e) = failure {
            error!(error = %e, "list load failed");
            self.notify(NotificationLevel::Error, LOAD_ERROR_MESSAGE);
        }
    }

    fn allocate_load_id(&mut self) -> u64 {
        self.next_load_id += 1;
        self.next_load_id
    }

    fn list_view<T: shelfscope_core::Searchable>(config: &AppConfig) -> ListView<T> {
        ListView::new(
            config.ui.page_size(),
            config.ui.default_layout,
            config.ui.max_visible_pages,
        )
    }
}
