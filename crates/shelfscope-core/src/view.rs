//! Per-view browsing state and the filtered/paged derivation over loaded data.
//!
//! Nothing here is cached: every accessor recomputes from the loaded items and
//! the current [`ViewState`]. Lists are bounded by a single API page.

use serde::{Deserialize, Serialize};

use crate::models::{Book, GenreSummary};
use crate::pagination::{self, PageControls};

/// Items shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Fifteen,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Fifteen];

    pub fn count(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
        }
    }

    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            15 => Some(Self::Fifteen),
            _ => None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::Fifteen,
            Self::Fifteen => Self::Five,
        }
    }
}

/// Display arrangement. Never affects which items are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    List,
    Column,
}

impl LayoutMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::List => Self::Column,
            Self::Column => Self::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Column => "grid",
        }
    }
}

/// The field a view's search box matches against.
pub trait Searchable {
    fn search_key(&self) -> &str;
}

impl Searchable for GenreSummary {
    fn search_key(&self) -> &str {
        &self.display_name
    }
}

impl Searchable for Book {
    fn search_key(&self) -> &str {
        self.title()
    }
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_search(key: &str, term: &str) -> bool {
    term.is_empty() || key.to_lowercase().contains(&term.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    current_page: u32,
    page_size: PageSize,
    layout: LayoutMode,
    max_visible_pages: u32,
    /// Cursor within the visible page. Reset to the top on every page change.
    selected: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default(), LayoutMode::default(), pagination::DEFAULT_MAX_VISIBLE)
    }
}

impl ViewState {
    pub fn new(page_size: PageSize, layout: LayoutMode, max_visible_pages: u32) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size,
            layout,
            max_visible_pages: max_visible_pages.max(1),
            selected: 0,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn items_per_page(&self) -> u32 {
        self.page_size.count()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    // ─── Mutations ─────────────────────────────────────────

    /// Fresh data arrived: back to the first page.
    pub fn on_loaded(&mut self) {
        self.current_page = 1;
        self.selected = 0;
    }

    /// Replace the search term and clamp the page into the new filtered range.
    pub fn set_search<T: Searchable>(&mut self, term: impl Into<String>, items: &[T]) {
        self.search_term = term.into();
        self.clamp_to(items);
    }

    pub fn push_search_char<T: Searchable>(&mut self, c: char, items: &[T]) {
        self.search_term.push(c);
        self.clamp_to(items);
    }

    pub fn pop_search_char<T: Searchable>(&mut self, items: &[T]) {
        self.search_term.pop();
        self.clamp_to(items);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 1;
        self.selected = 0;
    }

    pub fn cycle_page_size(&mut self) {
        self.set_page_size(self.page_size.cycle());
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
    }

    /// Jump to `page`, clamped into range. Returns whether the page changed.
    /// Any page change puts the cursor back at the top.
    pub fn set_page<T: Searchable>(&mut self, page: u32, items: &[T]) -> bool {
        let last = self.last_page(items);
        let page = page.clamp(1, last);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.selected = 0;
        true
    }

    pub fn next_page<T: Searchable>(&mut self, items: &[T]) -> bool {
        if !self.controls(items).next_enabled {
            return false;
        }
        self.set_page(self.current_page + 1, items)
    }

    pub fn prev_page<T: Searchable>(&mut self, items: &[T]) -> bool {
        if !self.controls(items).prev_enabled {
            return false;
        }
        self.set_page(self.current_page - 1, items)
    }

    pub fn first_page<T: Searchable>(&mut self, items: &[T]) -> bool {
        self.set_page(1, items)
    }

    pub fn final_page<T: Searchable>(&mut self, items: &[T]) -> bool {
        self.set_page(self.last_page(items), items)
    }

    pub fn select_next<T: Searchable>(&mut self, items: &[T]) {
        let len = self.visible(items).len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ─── Derivations ───────────────────────────────────────

    pub fn filtered<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| matches_search(item.search_key(), &self.search_term))
            .collect()
    }

    /// `filtered[(page-1)*per_page .. page*per_page]`, truncated at the filtered length.
    pub fn visible<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let per_page = self.items_per_page() as usize;
        let start = (self.current_page as usize - 1).saturating_mul(per_page);
        self.filtered(items)
            .into_iter()
            .skip(start)
            .take(per_page)
            .collect()
    }

    pub fn controls<T: Searchable>(&self, items: &[T]) -> PageControls {
        PageControls::new(
            self.filtered(items).len(),
            self.items_per_page(),
            self.current_page,
            self.max_visible_pages,
        )
    }

    pub fn selected_item<'a, T: Searchable>(&self, items: &'a [T]) -> Option<&'a T> {
        self.visible(items).get(self.selected).copied()
    }

    fn last_page<T: Searchable>(&self, items: &[T]) -> u32 {
        pagination::total_pages(self.filtered(items).len(), self.items_per_page()).max(1)
    }

    fn clamp_to<T: Searchable>(&mut self, items: &[T]) {
        let last = self.last_page(items);
        if self.current_page > last {
            self.current_page = last;
            self.selected = 0;
        }
        let visible = self.visible(items).len();
        if self.selected >= visible {
            self.selected = visible.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookDetail;

    fn genre(name: &str) -> GenreSummary {
        GenreSummary {
            display_name: name.to_string(),
            newest_published_date: String::new(),
            oldest_published_date: String::new(),
            list_name_encoded: name.to_lowercase().replace(' ', "-"),
            updated: "WEEKLY".to_string(),
        }
    }

    fn genres(n: usize) -> Vec<GenreSummary> {
        (0..n).map(|i| genre(&format!("Genre {i}"))).collect()
    }

    fn book(rank: u32, title: &str) -> Book {
        Book {
            rank,
            amazon_product_url: String::new(),
            book_details: vec![BookDetail::new(title)],
        }
    }

    #[test]
    fn visible_slice_matches_formula_for_all_page_sizes() {
        let items = genres(37);
        for size in PageSize::ALL {
            let mut state = ViewState::new(size, LayoutMode::List, 6);
            let per_page = size.count() as usize;
            let pages = pagination::total_pages(items.len(), size.count());
            for page in 1..=pages {
                state.set_page(page, &items);
                let start = (page as usize - 1) * per_page;
                let end = (page as usize * per_page).min(items.len());
                let expected: Vec<&GenreSummary> = items[start..end].iter().collect();
                assert_eq!(state.visible(&items), expected);
            }
        }
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let items = genres(40);
        let mut state = ViewState::default();
        state.set_page(4, &items);
        assert_eq!(state.current_page(), 4);

        state.cycle_page_size();
        assert_eq!(state.page_size(), PageSize::Ten);
        assert_eq!(state.current_page(), 1);

        state.set_page(2, &items);
        state.set_page_size(PageSize::Ten);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn fresh_load_resets_to_first_page() {
        let items = genres(40);
        let mut state = ViewState::default();
        state.set_page(3, &items);
        state.on_loaded();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![genre("Hardcover Fiction"), genre("Paperback Nonfiction"), genre("Audio Fiction")];
        let mut state = ViewState::default();
        state.set_search("FICTION", &items);
        assert_eq!(state.filtered(&items).len(), 3);

        state.set_search("nonf", &items);
        let names: Vec<&str> = state.filtered(&items).iter().map(|g| g.display_name.as_str()).collect();
        assert_eq!(names, vec!["Paperback Nonfiction"]);
    }

    #[test]
    fn empty_search_yields_everything() {
        let items = genres(9);
        let state = ViewState::default();
        assert_eq!(state.filtered(&items).len(), 9);
    }

    #[test]
    fn books_are_searched_by_primary_title() {
        let items = vec![book(1, "Dune"), book(2, "Dune Messiah"), book(3, "Emma")];
        let mut state = ViewState::default();
        state.set_search("dune", &items);
        let ranks: Vec<u32> = state.filtered(&items).iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn search_clamps_page_into_filtered_range() {
        let mut items = genres(30);
        items.push(genre("Science"));
        let mut state = ViewState::default();
        state.set_page(6, &items);
        assert_eq!(state.current_page(), 6);

        state.set_search("science", &items);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible(&items).len(), 1);
    }

    #[test]
    fn search_that_moves_the_page_resets_the_cursor() {
        let items = genres(40);
        let mut state = ViewState::default();
        state.set_page(6, &items);
        for _ in 0..3 {
            state.select_next(&items);
        }
        assert_eq!(state.selected(), 3);

        // "Genre 1", "Genre 10".."Genre 19", "Genre 21", "Genre 31"
        state.set_search("1", &items);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.visible(&items).len(), 3);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn search_on_same_page_keeps_cursor_in_range() {
        let items = genres(10);
        let mut state = ViewState::default();
        for _ in 0..4 {
            state.select_next(&items);
        }
        state.set_search("genre", &items);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.selected(), 4);
    }

    #[test]
    fn search_without_matches_stays_on_page_one() {
        let items = genres(12);
        let mut state = ViewState::default();
        state.set_page(3, &items);
        state.set_search("zzz", &items);
        assert_eq!(state.current_page(), 1);
        assert!(state.visible(&items).is_empty());
        assert!(state.selected_item(&items).is_none());
    }

    #[test]
    fn typing_and_deleting_search_chars() {
        let items = vec![genre("Travel"), genre("Science")];
        let mut state = ViewState::default();
        for c in "TRA".chars() {
            state.push_search_char(c, &items);
        }
        assert_eq!(state.filtered(&items).len(), 1);
        state.pop_search_char(&items);
        state.pop_search_char(&items);
        assert_eq!(state.search_term(), "T");
        assert_eq!(state.filtered(&items).len(), 1);
        state.pop_search_char(&items);
        assert_eq!(state.filtered(&items).len(), 2);
    }

    #[test]
    fn page_navigation_respects_controls() {
        let items = genres(12);
        let mut state = ViewState::default();
        assert!(!state.prev_page(&items));
        assert!(state.next_page(&items));
        assert!(state.next_page(&items));
        assert_eq!(state.current_page(), 3);
        assert!(!state.next_page(&items));
        assert!(state.first_page(&items));
        assert!(state.final_page(&items));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn page_change_resets_selection() {
        let items = genres(12);
        let mut state = ViewState::default();
        state.select_next(&items);
        state.select_next(&items);
        assert_eq!(state.selected(), 2);
        state.next_page(&items);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn selection_stays_within_visible_page() {
        let items = genres(7);
        let mut state = ViewState::default();
        state.next_page(&items);
        for _ in 0..5 {
            state.select_next(&items);
        }
        assert_eq!(state.selected(), 1);
        assert_eq!(state.selected_item(&items).map(|g| g.display_name.as_str()), Some("Genre 6"));
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn layout_toggle_does_not_change_data() {
        let items = genres(8);
        let mut state = ViewState::default();
        let before = state.visible(&items);
        state.toggle_layout();
        assert_eq!(state.layout(), LayoutMode::Column);
        assert_eq!(state.visible(&items), before);
    }
}
