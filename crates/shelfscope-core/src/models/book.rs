use serde::{Deserialize, Serialize};

/// One edition of a ranked book. Prices are stored already formatted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contributor: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub primary_isbn13: String,
    /// Cover thumbnail URL; empty when no cover was found.
    #[serde(default)]
    pub image: String,
}

impl BookDetail {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn has_cover(&self) -> bool {
        !self.image.is_empty()
    }
}

/// A snapshot of a [`BookDetail`] taken when the user favorited it.
pub type FavoriteEntry = BookDetail;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub rank: u32,
    pub amazon_product_url: String,
    /// Never empty for records produced by the loaders.
    pub book_details: Vec<BookDetail>,
}

impl Book {
    /// The canonical edition used for display, search and favoriting.
    pub fn primary_detail(&self) -> Option<&BookDetail> {
        self.book_details.first()
    }

    pub fn title(&self) -> &str {
        self.primary_detail().map_or("", |d| d.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_detail_is_first_edition() {
        let book = Book {
            rank: 1,
            amazon_product_url: String::new(),
            book_details: vec![BookDetail::new("Dune"), BookDetail::new("Dune (Audio)")],
        };
        assert_eq!(book.title(), "Dune");
    }

    #[test]
    fn title_of_detailless_book_is_empty() {
        let book = Book {
            rank: 3,
            amazon_product_url: String::new(),
            book_details: Vec::new(),
        };
        assert!(book.primary_detail().is_none());
        assert_eq!(book.title(), "");
    }
}
