use async_trait::async_trait;

use crate::error::Result;

pub mod bestsellers;
pub mod covers;

/// Anything that can resolve an ISBN-13 to a cover thumbnail URL.
///
/// `Ok(None)` means the book simply has no cover on record.
#[async_trait]
pub trait CoverLookup: Send + Sync {
    fn name(&self) -> &'static str;

    async fn thumbnail(&self, isbn13: &str) -> Result<Option<String>>;
}
