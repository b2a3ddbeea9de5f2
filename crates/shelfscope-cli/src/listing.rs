//! Non-interactive rendering of one filtered page, for scripts.

use serde::Serialize;
use shelfscope_core::{LayoutMode, PageSize, Searchable, ViewState};
use thiserror::Error;

/// The requested slice of a list plus its page controls.
#[derive(Debug, Serialize)]
pub struct PageSlice<'a, T> {
    pub items: Vec<&'a T>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub search: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliceError {
    #[error("--per-page must be 5, 10 or 15 (got {0})")]
    PerPage(u32),
    #[error("page {page} is out of range (1-{total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

/// Apply the same search and pagination the TUI views use.
pub fn slice<'a, T: Searchable>(
    items: &'a [T],
    search: Option<&str>,
    page: u32,
    per_page: u32,
    max_visible: u32,
) -> Result<PageSlice<'a, T>, SliceError> {
    let size = PageSize::from_count(per_page).ok_or(SliceError::PerPage(per_page))?;
    let mut state = ViewState::new(size, LayoutMode::List, max_visible);
    state.set_search(search.unwrap_or_default(), items);

    let controls = state.controls(items);
    if page == 0 || (page > 1 && page > controls.total_pages) {
        return Err(SliceError::PageOutOfRange {
            page,
            total_pages: controls.total_pages,
        });
    }
    state.set_page(page, items);
    let controls = state.controls(items);

    Ok(PageSlice {
        items: state.visible(items),
        total: state.filtered(items).len(),
        page: state.current_page(),
        per_page: state.items_per_page(),
        total_pages: controls.total_pages,
        pages: controls.pages,
        search: state.search_term().to_string(),
    })
}

/// `Page 2 of 12 · 57 results · 1 [2] 3 4 5 6`
pub fn footer<T>(slice: &PageSlice<'_, T>) -> String {
    let pages: Vec<String> = slice
        .pages
        .iter()
        .map(|p| {
            if *p == slice.page {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();
    let shown = if slice.total_pages == 0 { 0 } else { slice.page };
    format!(
        "Page {shown} of {} · {} results · {}",
        slice.total_pages,
        slice.total,
        pages.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use shelfscope_core::GenreSummary;

    use super::*;

    fn genres(n: usize) -> Vec<GenreSummary> {
        (0..n)
            .map(|i| GenreSummary {
                display_name: format!("Genre {i}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn last_page_of_57() {
        let items = genres(57);
        let s = slice(&items, None, 12, 5, 6).unwrap();
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.items[0].display_name, "Genre 55");
        assert_eq!(s.pages, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(footer(&s), "Page 12 of 12 · 57 results · 7 8 9 10 11 [12]");
    }

    #[test]
    fn search_narrows_before_paging() {
        let items = genres(57);
        let s = slice(&items, Some("GENRE 1"), 2, 10, 6).unwrap();
        // "Genre 1" and "Genre 10".."Genre 19"
        assert_eq!(s.total, 11);
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].display_name, "Genre 19");
    }

    #[test]
    fn empty_result_is_page_zero_of_zero() {
        let items = genres(3);
        let s = slice(&items, Some("nope"), 1, 5, 6).unwrap();
        assert!(s.items.is_empty());
        assert_eq!(footer(&s), "Page 0 of 0 · 0 results · ");
    }

    #[test]
    fn rejects_bad_arguments() {
        let items = genres(3);
        assert_eq!(slice(&items, None, 1, 7, 6).unwrap_err(), SliceError::PerPage(7));
        assert_eq!(
            slice(&items, None, 2, 5, 6).unwrap_err(),
            SliceError::PageOutOfRange { page: 2, total_pages: 1 }
        );
        assert!(slice(&items, None, 0, 5, 6).is_err());
    }

    #[test]
    fn slice_errors_read_like_cli_messages() {
        assert_eq!(
            SliceError::PerPage(7).to_string(),
            "--per-page must be 5, 10 or 15 (got 7)"
        );
        assert_eq!(
            SliceError::PageOutOfRange { page: 4, total_pages: 2 }.to_string(),
            "page 4 is out of range (1-2)"
        );
    }
}
