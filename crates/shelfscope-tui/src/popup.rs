/// Popup dialog types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    /// Key binding reference.
    Help,
    /// Session favorites, in insertion order.
    Favorites(FavoritesPopup),
}

/// Cursor over the favorites snapshot shown in the popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesPopup {
    pub selected: usize,
}

impl FavoritesPopup {
    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor on an entry after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// `(keys, description)` rows for the help popup.
pub const HELP_ROWS: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "Move selection"),
    ("h / l, ← / →", "Previous / next page"),
    ("PgUp / PgDn", "Previous / next page"),
    ("g / G", "First / last page"),
    ("1-9", "Jump to page"),
    ("/", "Search by title"),
    ("n", "Cycle items per page (5, 10, 15)"),
    ("v", "Toggle list / grid layout"),
    ("Enter", "Open genre / open purchase link"),
    ("f, Space", "Toggle favorite"),
    ("F", "Show favorites"),
    ("r", "Reload current view"),
    ("Esc, Backspace", "Back"),
    ("?", "This help"),
    ("q, Ctrl-c", "Quit"),
];
