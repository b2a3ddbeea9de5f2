//! Page-number window and Previous/Next state for paginated lists.

/// Default width of the page-number window.
pub const DEFAULT_MAX_VISIBLE: u32 = 6;

/// `ceil(total_items / items_per_page)`; zero items means zero pages.
pub fn total_pages(total_items: usize, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(items_per_page as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page numbers to display, centred on `current_page` and clamped to
/// `[1, total_pages]`. Near either edge the window shifts so that
/// `max_visible` pages stay visible whenever there are that many pages.
pub fn visible_page_window(
    total_items: usize,
    items_per_page: u32,
    current_page: u32,
    max_visible: u32,
) -> Vec<u32> {
    let total = i64::from(total_pages(total_items, items_per_page));
    let max_visible = i64::from(max_visible.max(1));
    let current = i64::from(current_page);

    let mut start = (current - max_visible / 2).max(1);
    let end = total.min(start + max_visible - 1);
    if end - start + 1 < max_visible {
        start = (end - max_visible + 1).max(1);
    }

    (start..=end)
        .filter_map(|p| u32::try_from(p).ok())
        .collect()
}

/// Everything a pagination bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub pages: Vec<u32>,
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    pub fn new(total_items: usize, items_per_page: u32, current_page: u32, max_visible: u32) -> Self {
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            pages: visible_page_window(total_items, items_per_page, current_page, max_visible),
            current_page,
            total_pages,
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(57, 5), 12);
        assert_eq!(total_pages(55, 5), 11);
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 15), 1);
    }

    #[test]
    fn window_at_first_page() {
        let controls = PageControls::new(57, 5, 1, DEFAULT_MAX_VISIBLE);
        assert_eq!(controls.pages, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(controls.total_pages, 12);
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn window_at_last_page() {
        let controls = PageControls::new(57, 5, 12, DEFAULT_MAX_VISIBLE);
        assert_eq!(controls.pages, vec![7, 8, 9, 10, 11, 12]);
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn window_centres_on_middle_page() {
        assert_eq!(visible_page_window(57, 5, 6, 6), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(visible_page_window(57, 5, 4, 6), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(visible_page_window(57, 5, 10, 6), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_narrower_than_max_when_few_pages() {
        assert_eq!(visible_page_window(12, 5, 2, 6), vec![1, 2, 3]);
        assert_eq!(visible_page_window(5, 5, 1, 6), vec![1]);
    }

    #[test]
    fn window_width_never_exceeds_max() {
        for total_items in [0, 1, 14, 57, 300] {
            for per_page in [5, 10, 15] {
                let pages = total_pages(total_items, per_page);
                for current in 1..=pages.max(1) {
                    let window = visible_page_window(total_items, per_page, current, 6);
                    assert!(window.len() <= 6);
                    assert_eq!(window.len() as u32, pages.min(6));
                    if pages > 0 {
                        assert!(window.contains(&current));
                    }
                }
            }
        }
    }

    #[test]
    fn empty_list_has_no_pages_and_no_controls() {
        let controls = PageControls::new(0, 10, 1, 6);
        assert!(controls.pages.is_empty());
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn single_page_disables_both_controls() {
        let controls = PageControls::new(4, 5, 1, 6);
        assert_eq!(controls.pages, vec![1]);
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
    }
}
