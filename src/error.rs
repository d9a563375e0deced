//! Error types for fetching and benchmarking.

use reqwest::StatusCode;

/// Failure while fetching articles from a news source.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No API key was configured for the source.
    #[error("no API key configured for {source_name}; set NEWSAPI_API_KEY or pass --api-key")]
    MissingApiKey { source_name: &'static str },

    /// The endpoint URL could not be built.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure: connection, timeout, TLS, body read.
    ///
    /// The request URL is stripped on conversion since it carries the API key.
    #[error(
        "failed to fetch articles from NewsAPI: {0}. Check your internet connection and NewsAPI API key"
    )]
    Request(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("NewsAPI returned {status}{}: {message}", code_suffix(.code))]
    Remote {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("unexpected NewsAPI response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.without_url())
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
}

/// Failure during a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// The two detector variants disagreed on a batch.
    #[error(
        "detectors disagree for size {size}: original found {original}, improved found {improved}"
    )]
    Mismatch {
        size: usize,
        original: usize,
        improved: usize,
    },
}
