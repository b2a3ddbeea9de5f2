use shelfscope_core::{Book, GenreSummary, LayoutMode, PageControls, PageSize, Searchable, ViewState};
use tokio_util::sync::CancellationToken;

/// Loaded items plus the browsing state of one mounted screen.
///
/// Each load is tagged with a fresh `load_id` and owns a cancellation token.
/// Starting another load or dropping the view cancels the previous token, so a
/// late result can never land in a view that no longer wants it.
#[derive(Debug)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub state: ViewState,
    load_id: u64,
    cancel: CancellationToken,
}

impl<T: Searchable> ListView<T> {
    pub fn new(page_size: PageSize, layout: LayoutMode, max_visible_pages: u32) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            state: ViewState::new(page_size, layout, max_visible_pages),
            load_id: 0,
            cancel: CancellationToken::new(),
        }
    }

    /// Mark a new load as in flight and hand back the token its task must honour.
    pub fn begin_load(&mut self, load_id: u64) -> CancellationToken {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.load_id = load_id;
        self.loading = true;
        self.cancel.clone()
    }

    pub fn load_id(&self) -> u64 {
        self.load_id
    }

    /// Whether a result tagged `load_id` still belongs to this view.
    pub fn accepts(&self, load_id: u64) -> bool {
        self.loading && self.load_id == load_id && !self.cancel.is_cancelled()
    }

    pub fn finish_ok(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.state.on_loaded();
    }

    pub fn finish_err(&mut self) {
        self.items.clear();
        self.loading = false;
        self.state.on_loaded();
    }

    pub fn selected(&self) -> Option<&T> {
        self.state.selected_item(&self.items)
    }

    pub fn visible(&self) -> Vec<&T> {
        self.state.visible(&self.items)
    }
}

impl<T> Drop for ListView<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A user action against the browsing state of the focused view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    SearchChar(char),
    SearchBackspace,
    ClearSearch,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GotoPage(u32),
    SelectNext,
    SelectPrev,
    CyclePageSize,
    ToggleLayout,
}

impl<T: Searchable> ListView<T> {
    pub fn apply(&mut self, action: ViewAction) {
        let items = &self.items;
        let state = &mut self.state;
        match action {
            ViewAction::SearchChar(c) => state.push_search_char(c, items),
            ViewAction::SearchBackspace => state.pop_search_char(items),
            ViewAction::ClearSearch => state.set_search(String::new(), items),
            ViewAction::NextPage => {
                state.next_page(items);
            }
            ViewAction::PrevPage => {
                state.prev_page(items);
            }
            ViewAction::FirstPage => {
                state.first_page(items);
            }
            ViewAction::LastPage => {
                state.final_page(items);
            }
            ViewAction::GotoPage(page) => {
                state.set_page(page, items);
            }
            ViewAction::SelectNext => state.select_next(items),
            ViewAction::SelectPrev => state.select_prev(),
            ViewAction::CyclePageSize => state.cycle_page_size(),
            ViewAction::ToggleLayout => state.toggle_layout(),
        }
    }

    pub fn controls(&self) -> PageControls {
        self.state.controls(&self.items)
    }

    pub fn filtered_len(&self) -> usize {
        self.state.filtered(&self.items).len()
    }
}

pub type GenreView = ListView<GenreSummary>;

/// Books of one category. `title` is transient navigation state and may be
/// absent when the screen was opened directly by key.
#[derive(Debug)]
pub struct BooksView {
    pub genre_key: String,
    pub title: Option<String>,
    pub list: ListView<Book>,
}

impl BooksView {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled list")
    }
}

/// One mounted route.
#[derive(Debug)]
pub enum Screen {
    Genres(GenreView),
    Books(BooksView),
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Self::Genres(_) => "Genres",
            Self::Books(view) => view.display_title(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Genres(view) => view.loading,
            Self::Books(view) => view.list.loading,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        match self {
            Self::Genres(view) => &view.state,
            Self::Books(view) => &view.list.state,
        }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match self {
            Self::Genres(view) => view.apply(action),
            Self::Books(view) => view.list.apply(action),
        }
    }

    pub fn controls(&self) -> PageControls {
        match self {
            Self::Genres(view) => view.controls(),
            Self::Books(view) => view.list.controls(),
        }
    }

    pub fn load_id(&self) -> u64 {
        match self {
            Self::Genres(view) => view.load_id(),
            Self::Books(view) => view.list.load_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> GenreView {
        ListView::new(PageSize::Five, LayoutMode::List, 6)
    }

    #[test]
    fn new_load_cancels_previous_token() {
        let mut v = view();
        let first = v.begin_load(1);
        let second = v.begin_load(2);
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!v.accepts(1));
        assert!(v.accepts(2));
    }

    #[test]
    fn dropping_view_cancels_inflight_load() {
        let mut v = view();
        let token = v.begin_load(7);
        drop(v);
        assert!(token.is_cancelled());
    }

    #[test]
    fn finished_view_rejects_late_results() {
        let mut v = view();
        v.begin_load(3);
        v.finish_ok(Vec::new());
        assert!(!v.loading);
        assert!(!v.accepts(3));
    }

    #[test]
    fn actions_drive_the_view_state() {
        let mut v = view();
        v.finish_ok(
            (0..12)
                .map(|i| GenreSummary {
                    display_name: format!("Genre {i}"),
                    ..Default::default()
                })
                .collect(),
        );

        v.apply(ViewAction::NextPage);
        v.apply(ViewAction::SelectNext);
        assert_eq!(v.state.current_page(), 2);
        assert_eq!(v.selected().map(|g| g.display_name.as_str()), Some("Genre 6"));

        v.apply(ViewAction::LastPage);
        assert_eq!(v.state.current_page(), 3);
        assert!(!v.controls().next_enabled);

        v.apply(ViewAction::SearchChar('1'));
        assert_eq!(v.filtered_len(), 3);
        assert_eq!(v.state.current_page(), 1);

        v.apply(ViewAction::ClearSearch);
        v.apply(ViewAction::CyclePageSize);
        assert_eq!(v.state.items_per_page(), 10);
        v.apply(ViewAction::ToggleLayout);
        assert_eq!(v.state.layout(), LayoutMode::Column);
    }

    #[test]
    fn missing_title_falls_back_to_placeholder() {
        let books = BooksView {
            genre_key: "hardcover-fiction".to_string(),
            title: None,
            list: ListView::new(PageSize::Five, LayoutMode::List, 6),
        };
        assert_eq!(books.display_title(), "Untitled list");
    }
}
