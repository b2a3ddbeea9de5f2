use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::http::ApiClient;
use crate::sources::CoverLookup;

/// Cover thumbnails from the volumes search of the book-metadata API.
#[derive(Debug, Clone)]
pub struct CoverSource {
    client: ApiClient,
}

impl CoverSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET volumes?q=isbn:{isbn13}` → `items[0].volumeInfo.imageLinks.thumbnail`.
    pub async fn fetch_thumbnail(&self, isbn13: &str) -> Result<Option<String>> {
        let isbn13 = isbn13.trim();
        if isbn13.is_empty() {
            return Ok(None);
        }

        let query = format!("isbn:{isbn13}");
        let body: Value = self.client.get_json("volumes", &[("q", &query)]).await?;
        Ok(thumbnail_from_volumes(&body))
    }
}

fn thumbnail_from_volumes(body: &Value) -> Option<String> {
    body.pointer("/items/0/volumeInfo/imageLinks/thumbnail")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

#[async_trait]
impl CoverLookup for CoverSource {
    fn name(&self) -> &'static str {
        "google-books"
    }

    async fn thumbnail(&self, isbn13: &str) -> Result<Option<String>> {
        self.fetch_thumbnail(isbn13).await
    }
}
