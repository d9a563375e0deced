//! # Platzi News
//!
//! Search NewsAPI from the terminal and spot repeated headlines, or compare
//! the two duplicate detectors on synthetic batches.
//!
//! ## Usage
//!
//! ```sh
//! platzi_news search "economía" --duplicates
//! platzi_news bench --sizes 100,200,2000,20000
//! ```

use clap::Parser;
use platzi_news::analysis::find_duplicate_titles_improved;
use platzi_news::benchmark;
use platzi_news::cli::{BenchArgs, Cli, Command, SearchArgs, format_duplicates};
use platzi_news::config::Settings;
use platzi_news::models::Article;
use platzi_news::sources::NewsSource;
use platzi_news::sources::newsapi::NewsApi;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; the environment and flags still apply.
    let dotenv = dotenvy::dotenv();

    let args = Cli::parse();

    // --- Tracing init ---
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "Ignoring unreadable .env"),
    }

    let start_time = std::time::Instant::now();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Search(search) => run_search(search)?,
        Command::Bench(bench) => run_bench(&bench)?,
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

#[instrument(level = "info", skip_all, fields(query = %args.query, use_async = args.use_async))]
fn run_search(args: SearchArgs) -> Result<(), Box<dyn Error>> {
    let settings = Settings::from(args.fetch);
    debug!(?settings, "Resolved settings");
    let source = NewsApi::new(settings);

    let articles = if args.use_async {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(source.fetch_articles_async(&args.query))?
    } else {
        source.fetch_articles(&args.query)?
    };

    print_articles(&articles);

    if args.duplicates {
        let duplicates = find_duplicate_titles_improved(&articles);
        info!(count = duplicates.len(), "Checked for duplicate titles");
        if duplicates.is_empty() {
            println!("\nNo duplicate titles.");
        } else {
            println!("\nDuplicate titles ({}):", duplicates.len());
            println!("{}", format_duplicates(&duplicates));
        }
    }
    Ok(())
}

fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }
    for (i, article) in articles.iter().enumerate() {
        println!("{}. {}", i + 1, article.title);
        if !article.description.is_empty() {
            println!("   {}", article.description);
        }
        if !article.url.is_empty() {
            println!("   {}", article.url);
        }
    }
}

#[instrument(level = "info", skip_all)]
fn run_bench(args: &BenchArgs) -> Result<(), Box<dyn Error>> {
    let rows = benchmark::run(&args.sizes)?;
    print!("{}", benchmark::render_table(&rows));
    Ok(())
}
