use std::sync::Arc;

use shelfscope_api::Catalog;
use shelfscope_core::{Book, GenreSummary};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::event::AppEvent;

/// Represents the result of an asynchronous background task.
#[derive(Debug)]
pub enum AsyncResult {
    GenresLoaded {
        load_id: u64,
        result: Result<Vec<GenreSummary>, String>,
    },
    BooksLoaded {
        load_id: u64,
        result: Result<Vec<Book>, String>,
    },
}

/// Where load tasks run and where their results go.
#[derive(Clone)]
pub struct Loader {
    pub catalog: Arc<Catalog>,
    pub handle: Handle,
    pub tx: UnboundedSender<AppEvent>,
}

impl Loader {
    pub fn spawn_genre_load(&self, load_id: u64, token: CancellationToken) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(load_id, "genre load cancelled");
                    return;
                }
                r = catalog.genres() => r,
            };
            deliver(&tx, &token, AsyncResult::GenresLoaded {
                load_id,
                result: result.map_err(|e| e.to_string()),
            });
        })
    }

    pub fn spawn_books_load(
        &self,
        load_id: u64,
        genre_key: String,
        token: CancellationToken,
    ) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(load_id, genre = %genre_key, "books load cancelled");
                    return;
                }
                r = catalog.books(&genre_key) => r,
            };
            deliver(&tx, &token, AsyncResult::BooksLoaded {
                load_id,
                result: result.map_err(|e| e.to_string()),
            });
        })
    }
}

/// The view may have been torn down while the request was in flight.
fn deliver(tx: &UnboundedSender<AppEvent>, token: &CancellationToken, result: AsyncResult) {
    if token.is_cancelled() {
        return;
    }
    let _ = tx.send(AppEvent::AsyncResult(result));
}
