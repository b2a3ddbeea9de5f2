//! Shelfscope API: bestseller lists, cover enrichment and the loaders that feed the views.

pub mod enrichment;
pub mod error;
pub mod http;
pub mod loaders;
pub mod sources;

use secrecy::SecretString;
use shelfscope_core::{AppConfig, Book, GenreSummary, LocaleConfig};

pub use error::{ApiError, Result};
pub use http::ApiClient;
pub use sources::CoverLookup;
pub use sources::bestsellers::BestsellerSource;
pub use sources::covers::CoverSource;

/// Both remote sources plus the display settings the loaders need.
/// Cheap to share behind an `Arc` across load tasks.
#[derive(Debug, Clone)]
pub struct Catalog {
    bestsellers: BestsellerSource,
    covers: CoverSource,
    locale: LocaleConfig,
    cover_concurrency: usize,
}

impl Catalog {
    /// Build from config. The API key is read from the environment variable
    /// named by `api.api_key_env`; if unset, list requests fail with
    /// [`ApiError::MissingApiKey`] instead of construction failing.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api = &config.api;
        let key = api.api_key().map(SecretString::from);
        let bestsellers = BestsellerSource::new(
            ApiClient::new(&api.base_url, &api.user_agent, key)?,
            api.api_key_env.clone(),
        );
        let covers = CoverSource::new(ApiClient::new(&api.image_base_url, &api.user_agent, None)?);
        Ok(Self::new(bestsellers, covers, config.locale.clone(), api.cover_concurrency))
    }

    pub fn new(
        bestsellers: BestsellerSource,
        covers: CoverSource,
        locale: LocaleConfig,
        cover_concurrency: usize,
    ) -> Self {
        Self {
            bestsellers,
            covers,
            locale,
            cover_concurrency: cover_concurrency.max(1),
        }
    }

    pub async fn genres(&self) -> Result<Vec<GenreSummary>> {
        loaders::load_genres(&self.bestsellers, &self.locale).await
    }

    pub async fn books(&self, genre_key: &str) -> Result<Vec<Book>> {
        loaders::load_books(
            &self.bestsellers,
            &self.covers,
            genre_key,
            &self.locale,
            self.cover_concurrency,
        )
        .await
    }
}
