//! Runtime settings for news sources.
//!
//! Settings are assembled from CLI flags, which fall back to environment
//! variables (see [`crate::cli`]). The binary loads a `.env` file into the
//! environment before parsing, so the same keys may live there.

use std::time::Duration;

/// Default NewsAPI endpoint.
pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2/everything";

/// Default number of articles requested per query.
pub const DEFAULT_MAX_ARTICLES: u32 = 10;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default article language filter.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Settings shared by the news sources.
#[derive(Clone)]
pub struct Settings {
    /// NewsAPI key; requests fail with [`crate::error::ApiError::MissingApiKey`] when absent.
    pub newsapi_api_key: Option<String>,
    /// Value sent as `pageSize`.
    pub max_articles: u32,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Value sent as `language`.
    pub language: String,
    /// Endpoint to query.
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            newsapi_api_key: None,
            max_articles: DEFAULT_MAX_ARTICLES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: NEWSAPI_BASE_URL.to_string(),
        }
    }
}

// Hand-written so the API key never reaches logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("newsapi_api_key", &self.newsapi_api_key.as_ref().map(|_| "***"))
            .field("max_articles", &self.max_articles)
            .field("request_timeout", &self.request_timeout)
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .finish()
    }
}
