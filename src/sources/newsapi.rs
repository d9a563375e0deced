//! [NewsAPI](https://newsapi.org) source.
//!
//! Queries the `/v2/everything` endpoint with the configured page size and
//! language. One page per query; no retries.

use crate::config::Settings;
use crate::error::ApiError;
use crate::models::{Article, ErrorResponse, EverythingResponse};
use crate::sources::NewsSource;
use crate::utils::truncate_for_log;
use reqwest::StatusCode;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use url::Url;

const NAME: &str = "newsapi";

/// Client for the NewsAPI `everything` endpoint.
#[derive(Debug)]
pub struct NewsApi {
    settings: Settings,
    client: reqwest::Client,
}

impl NewsApi {
    /// Create a client for `settings`. No request is made until a fetch.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the request URL for `query`.
    ///
    /// Fails with [`ApiError::MissingApiKey`] before anything is sent when the
    /// key is absent or empty.
    pub fn request_url(&self, query: &str) -> Result<Url, ApiError> {
        let api_key = self
            .settings
            .newsapi_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ApiError::MissingApiKey { source_name: NAME })?;
        let page_size = self.settings.max_articles.to_string();
        let url = Url::parse_with_params(
            &self.settings.base_url,
            &[
                ("q", query),
                ("apiKey", api_key),
                ("pageSize", page_size.as_str()),
                ("language", self.settings.language.as_str()),
            ],
        )?;
        Ok(url)
    }
}

/// Turn a NewsAPI response into articles.
///
/// A non-success `status` becomes [`ApiError::Remote`], using the `code` and
/// `message` NewsAPI puts in its error body when they parse.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Vec<Article>, ApiError> {
    if !status.is_success() {
        let err: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
        return Err(ApiError::Remote {
            status,
            code: err.code,
            message: err
                .message
                .unwrap_or_else(|| truncate_for_log(body, 200)),
        });
    }

    let response: EverythingResponse = serde_json::from_str(body)?;
    debug!(
        status = ?response.status,
        total_results = ?response.totalResults,
        returned = response.articles.len(),
        "Decoded NewsAPI response"
    );
    Ok(response.articles.into_iter().map(Article::from).collect())
}

fn log_outcome(result: &Result<Vec<Article>, ApiError>, started: Instant) {
    let elapsed_ms = started.elapsed().as_millis();
    match result {
        Ok(articles) => info!(
            count = articles.len(),
            elapsed_ms,
            "Retrieved articles from NewsAPI"
        ),
        Err(e) => error!(error = %e, elapsed_ms, "Failed to fetch articles from NewsAPI"),
    }
}

impl NewsSource for NewsApi {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(level = "info", skip(self), fields(source = NAME))]
    fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        debug!("Fetching articles from NewsAPI");
        let url = self.request_url(query)?;
        let t0 = Instant::now();

        let result = (|| {
            let client = reqwest::blocking::Client::builder()
                .timeout(self.settings.request_timeout)
                .build()?;
            let response = client.get(url).send()?;
            let status = response.status();
            let body = response.text()?;
            decode_response(status, &body)
        })();

        log_outcome(&result, t0);
        result
    }

    #[instrument(level = "info", skip(self), fields(source = NAME))]
    async fn fetch_articles_async(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        debug!("Fetching articles from NewsAPI (async)");
        let url = self.request_url(query)?;
        let t0 = Instant::now();

        let result = async {
            let response = self
                .client
                .get(url)
                .timeout(self.settings.request_timeout)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            decode_response(status, &body)
        }
        .await;

        log_outcome(&result, t0);
        result
    }
}
