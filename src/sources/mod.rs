//! News sources that turn a search query into a batch of [`Article`]s.
//!
//! # Supported Sources
//!
//! | Source | Module | Endpoint | Notes |
//! |--------|--------|----------|-------|
//! | NewsAPI | [`newsapi`] | `/v2/everything` | Requires API key |
//!
//! Every source offers a blocking call and an async call with the same
//! result. Transport and remote failures are translated into
//! [`ApiError`]; fields the source leaves out become empty strings.

use crate::error::ApiError;
use crate::models::Article;

pub mod newsapi;

/// A searchable news provider.
pub trait NewsSource {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch articles matching `query`, blocking the calling thread.
    ///
    /// Must not be called from inside an async runtime.
    fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, ApiError>;

    /// Fetch articles matching `query` without blocking.
    async fn fetch_articles_async(&self, query: &str) -> Result<Vec<Article>, ApiError>;
}
