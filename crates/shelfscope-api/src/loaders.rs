use shelfscope_core::format::{format_currency, format_date};
use shelfscope_core::{Book, BookDetail, GenreSummary, LocaleConfig};
use tracing::{info, warn};

use crate::enrichment::attach_covers;
use crate::error::Result;
use crate::sources::CoverLookup;
use crate::sources::bestsellers::{BestsellerSource, BookApiEntry, GenreApiEntry};

/// Fetch every list category, with dates reformatted for display.
pub async fn load_genres(source: &BestsellerSource, locale: &LocaleConfig) -> Result<Vec<GenreSummary>> {
    let raw = source.list_names().await?;
    let genres: Vec<GenreSummary> = raw.into_iter().map(|g| to_genre_summary(g, locale)).collect();
    info!(count = genres.len(), "loaded genres");
    Ok(genres)
}

/// Fetch the ranked list for `genre_key`, attach covers and format prices.
///
/// Only the list fetch itself can fail; cover lookups degrade to `""`.
pub async fn load_books<C>(
    source: &BestsellerSource,
    covers: &C,
    genre_key: &str,
    locale: &LocaleConfig,
    cover_concurrency: usize,
) -> Result<Vec<Book>>
where
    C: CoverLookup + ?Sized,
{
    let raw = source.list(genre_key).await?;
    let books: Vec<Book> = raw
        .into_iter()
        .filter_map(|entry| to_book(entry, locale))
        .collect();

    let books = attach_covers(books, covers, cover_concurrency).await;
    info!(
        genre = genre_key,
        count = books.len(),
        with_cover = books.iter().filter(|b| b.primary_detail().is_some_and(BookDetail::has_cover)).count(),
        "loaded books"
    );
    Ok(books)
}

fn to_genre_summary(raw: GenreApiEntry, locale: &LocaleConfig) -> GenreSummary {
    GenreSummary {
        newest_published_date: format_date(&raw.newest_published_date, locale),
        oldest_published_date: format_date(&raw.oldest_published_date, locale),
        display_name: raw.display_name,
        list_name_encoded: raw.list_name_encoded,
        updated: raw.updated,
    }
}

fn to_book(raw: BookApiEntry, locale: &LocaleConfig) -> Option<Book> {
    if raw.book_details.is_empty() {
        warn!(rank = raw.rank, "dropping ranked entry without book_details");
        return None;
    }

    let book_details = raw
        .book_details
        .into_iter()
        .map(|d| BookDetail {
            price: format_currency(&d.price, locale),
            title: d.title,
            description: d.description,
            contributor: d.contributor,
            author: d.author,
            publisher: d.publisher,
            primary_isbn13: d.primary_isbn13,
            image: String::new(),
        })
        .collect();

    Some(Book {
        rank: raw.rank,
        amazon_product_url: raw.amazon_product_url,
        book_details,
    })
}
