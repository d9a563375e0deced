//! Command-line interface definitions for Platzi News.
//!
//! Fetch settings can be provided via command-line flags or environment
//! variables (a `.env` file in the working directory is loaded first).

use crate::benchmark::DEFAULT_SIZES;
use crate::config::{
    DEFAULT_LANGUAGE, DEFAULT_MAX_ARTICLES, DEFAULT_REQUEST_TIMEOUT, NEWSAPI_BASE_URL, Settings,
};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use std::fmt;
use std::time::Duration;

/// Command-line arguments for the Platzi News application.
///
/// # Examples
///
/// ```sh
/// # Search NewsAPI and flag repeated headlines
/// platzi_news search "inteligencia artificial" --duplicates
///
/// # Same search through the async client
/// platzi_news search rust --async
///
/// # Compare both duplicate detectors
/// platzi_news bench --sizes 100,1000,10000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search NewsAPI for articles matching a query
    Search(SearchArgs),
    /// Time both duplicate detectors on synthetic batches
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Use the async client instead of the blocking one
    #[arg(long = "async")]
    pub use_async: bool,

    /// Also list titles that appear more than once
    #[arg(short, long)]
    pub duplicates: bool,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Settings for news sources; each flag falls back to an environment variable.
#[derive(Args)]
pub struct FetchArgs {
    /// NewsAPI API key
    #[arg(long, env = "NEWSAPI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of articles to request
    #[arg(long, env = "MAX_ARTICLES", default_value_t = DEFAULT_MAX_ARTICLES)]
    pub max_articles: u32,

    /// Request timeout in seconds (at least 1)
    #[arg(
        long = "timeout",
        env = "REQUEST_TIMEOUT",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Article language (ISO 639-1)
    #[arg(long, env = "NEWS_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// NewsAPI endpoint
    #[arg(long, env = "NEWSAPI_BASE_URL", default_value = NEWSAPI_BASE_URL)]
    pub base_url: String,
}

// Hand-written so `-v` logging of the parsed arguments never shows the key.
impl fmt::Debug for FetchArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchArgs")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("max_articles", &self.max_articles)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl From<FetchArgs> for Settings {
    fn from(args: FetchArgs) -> Self {
        Self {
            newsapi_api_key: args.api_key.filter(|k| !k.is_empty()),
            max_articles: args.max_articles,
            request_timeout: Duration::from_secs(args.timeout_secs),
            language: args.language,
            base_url: args.base_url,
        }
    }
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Comma-separated batch sizes
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<usize>,
}

/// Render duplicate titles one per line, sorted for stable output.
pub fn format_duplicates<'a>(titles: impl IntoIterator<Item = &'a String>) -> String {
    titles
        .into_iter()
        .sorted()
        .map(|t| {
            if t.is_empty() {
                "  - (untitled)".to_string()
            } else {
                format!("  - {t}")
            }
        })
        .join("\n")
}
