use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, Result};
use crate::http::ApiClient;

/// `{ "results": [...] }` envelope shared by both list endpoints.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    results: Vec<T>,
}

/// Raw entry from `lists/names.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreApiEntry {
    pub display_name: String,
    pub list_name_encoded: String,
    pub oldest_published_date: String,
    pub newest_published_date: String,
    pub updated: String,
}

/// Raw ranked entry from `lists.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookApiEntry {
    pub rank: u32,
    pub amazon_product_url: String,
    pub book_details: Vec<BookDetailApiEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookDetailApiEntry {
    pub title: String,
    pub description: String,
    pub contributor: String,
    pub author: String,
    pub publisher: String,
    /// Raw price; the API has sent it both as `"0.00"` and as `0`.
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    pub primary_isbn13: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

/// Client for the bestseller list API.
#[derive(Debug, Clone)]
pub struct BestsellerSource {
    client: ApiClient,
    api_key_env: String,
}

impl BestsellerSource {
    /// `api_key_env` is only used to name the variable in error messages.
    pub fn new(client: ApiClient, api_key_env: impl Into<String>) -> Self {
        Self {
            client,
            api_key_env: api_key_env.into(),
        }
    }

    /// `GET lists/names.json`: every available list category, in API order.
    pub async fn list_names(&self) -> Result<Vec<GenreApiEntry>> {
        self.require_key()?;
        let resp: ListResponse<GenreApiEntry> = self.client.get_json("lists/names.json", &[]).await?;
        Ok(resp.results)
    }

    /// `GET lists.json?list={genre_key}`: the current ranked list for one category.
    pub async fn list(&self, genre_key: &str) -> Result<Vec<BookApiEntry>> {
        self.require_key()?;
        let resp: ListResponse<BookApiEntry> = self
            .client
            .get_json("lists.json", &[("list", genre_key)])
            .await?;
        Ok(resp.results)
    }

    fn require_key(&self) -> Result<()> {
        if self.client.has_api_key() {
            Ok(())
        } else {
            Err(ApiError::MissingApiKey(self.api_key_env.clone()))
        }
    }
}
