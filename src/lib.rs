//! # Platzi News
//!
//! Fetch news articles from [NewsAPI](https://newsapi.org), normalize them into
//! a uniform [`Article`](models::Article) record, and find headlines that
//! appear more than once in a batch.
//!
//! ## Modules
//!
//! - [`sources`]: news providers ([`NewsSource`](sources::NewsSource)) with
//!   blocking and async fetches
//! - [`analysis`]: duplicate title detection, quadratic and linear variants
//! - [`benchmark`]: timing harness comparing the two detectors
//! - [`config`]: runtime settings
//! - [`cli`]: command-line definitions for the `platzi_news` binary
//!
//! ## Example
//!
//! ```
//! use platzi_news::analysis::find_duplicate_titles_improved;
//! use platzi_news::models::Article;
//!
//! let batch = vec![
//!     Article::new("Sube el dólar", "", "https://a.example"),
//!     Article::new("Sube el dólar", "", "https://b.example"),
//! ];
//! assert!(find_duplicate_titles_improved(&batch).contains("Sube el dólar"));
//! ```

pub mod analysis;
pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod utils;
