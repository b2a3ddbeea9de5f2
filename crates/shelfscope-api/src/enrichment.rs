use futures::StreamExt;
use shelfscope_core::Book;
use tracing::warn;

use crate::sources::CoverLookup;

/// Decorate every book with a cover thumbnail.
///
/// At most `concurrency` lookups run at once. Output keeps input (rank) order
/// and is produced only after every lookup has settled. A failed or empty
/// lookup leaves that book's `image` as `""` and never affects its siblings.
pub async fn attach_covers<C>(books: Vec<Book>, covers: &C, concurrency: usize) -> Vec<Book>
where
    C: CoverLookup + ?Sized,
{
    futures::stream::iter(books)
        .map(|mut book| async move {
            let isbn = book
                .primary_detail()
                .map(|d| d.primary_isbn13.clone())
                .unwrap_or_default();

            let image = match covers.thumbnail(&isbn).await {
                Ok(Some(url)) => url,
                Ok(None) => String::new(),
                Err(e) => {
                    warn!(source = covers.name(), isbn = %isbn, error = %e, "cover lookup failed");
                    String::new()
                }
            };

            for detail in &mut book.book_details {
                detail.image.clone_from(&image);
            }
            book
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
