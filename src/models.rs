//! Data models for fetched news articles.
//!
//! - [`Article`]: the uniform record every source produces
//! - [`RawArticle`] / [`EverythingResponse`]: the NewsAPI wire shapes the
//!   fetcher decodes before normalizing into [`Article`]

use serde::{Deserialize, Serialize};

/// A news article as returned by a source.
///
/// Two articles are duplicates when their `title` strings are exactly equal.
/// The empty title is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// A short description or lede, empty when the source omits it.
    pub description: String,
    /// Link to the full article.
    pub url: String,
}

impl Article {
    /// Build an article from anything string-like.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// One entry of the `articles` array in a NewsAPI response.
///
/// NewsAPI sends `null` for fields it does not have, so every field is
/// optional here and defaulted when converted into an [`Article`].
#[derive(Debug, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        }
    }
}

/// Body of a successful `/v2/everything` response.
#[allow(non_snake_case)]
#[derive(Debug, Default, Deserialize)]
pub struct EverythingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub totalResults: Option<u64>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Body NewsAPI sends alongside a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
