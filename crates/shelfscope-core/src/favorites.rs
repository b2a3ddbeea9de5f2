use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{BookDetail, FavoriteEntry};

/// Session-scoped favorites list shared by every view.
///
/// Created once at startup and handed to views as `Arc<FavoritesStore>`.
/// All reads and writes go through these methods; the backing list is never
/// exposed for direct mutation.
///
/// Entries are identified by title only. Two different books sharing a title
/// are indistinguishable here.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    entries: RwLock<Vec<FavoriteEntry>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `detail`. Does not dedupe; see [`Self::toggle`].
    pub fn add(&self, detail: &BookDetail) {
        self.write().push(detail.clone());
    }

    /// Remove every entry with this title. Returns how many were removed.
    pub fn remove(&self, title: &str) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|e| e.title != title);
        before - entries.len()
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.read().iter().any(|e| e.title == title)
    }

    /// Snapshot of the current entries, in insertion order.
    pub fn list(&self) -> Vec<FavoriteEntry> {
        self.read().clone()
    }

    /// Add `detail` if its title is not yet a favorite, otherwise remove all
    /// entries with that title. Returns whether it is a favorite afterwards.
    pub fn toggle(&self, detail: &BookDetail) -> bool {
        let mut entries = self.write();
        if entries.iter().any(|e| e.title == detail.title) {
            entries.retain(|e| e.title != detail.title);
            false
        } else {
            entries.push(detail.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<FavoriteEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<FavoriteEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
