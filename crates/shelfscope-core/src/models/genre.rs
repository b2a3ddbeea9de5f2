use serde::{Deserialize, Serialize};

/// One bestseller category, with its publication dates already localized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreSummary {
    pub display_name: String,
    pub newest_published_date: String,
    pub oldest_published_date: String,
    /// Stable key used to request the category's book list.
    pub list_name_encoded: String,
    /// Publication cadence as reported by the API (e.g. `WEEKLY`).
    pub updated: String,
}
