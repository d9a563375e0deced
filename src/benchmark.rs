//! Timing comparison of the two duplicate detectors.
//!
//! For each requested batch size a synthetic batch is generated with
//! [`create_test_articles`], each detector is run once, and the wall-clock
//! times are reported side by side. The duplicate counts of both detectors
//! must agree; a disagreement aborts the run.

use crate::analysis::{find_duplicate_titles, find_duplicate_titles_improved};
use crate::error::BenchmarkError;
use crate::models::Article;
use crate::utils::format_secs;
use std::collections::HashSet;
use std::fmt::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Batch sizes used when none are given.
pub const DEFAULT_SIZES: [usize; 4] = [100, 200, 2000, 20000];

/// One line of the benchmark report.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub size: usize,
    pub original: Duration,
    pub improved: Duration,
    /// `original / improved`, infinite when `improved` rounds to zero.
    pub speedup: f64,
    pub duplicates: usize,
}

/// Generate `n` articles with a controlled share of repeated titles.
///
/// For `n > 10` titles cycle through `n / 10` buckets, so roughly nine in
/// ten articles repeat an earlier title. For `n <= 10` every title is unique.
pub fn create_test_articles(n: usize) -> Vec<Article> {
    let buckets = (n / 10).max(1);
    (0..n)
        .map(|i| {
            let k = if n > 10 { i % buckets } else { i };
            Article::new(
                format!("Title {k}"),
                format!("Description for article {i}"),
                format!("https://example.com/article/{i}"),
            )
        })
        .collect()
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let t0 = Instant::now();
    let out = f();
    (out, t0.elapsed())
}

/// Require both detectors to return the same set; yields its size.
fn check_agreement(
    size: usize,
    original: &HashSet<String>,
    improved: &HashSet<String>,
) -> Result<usize, BenchmarkError> {
    if original != improved {
        return Err(BenchmarkError::Mismatch {
            size,
            original: original.len(),
            improved: improved.len(),
        });
    }
    Ok(original.len())
}

/// Benchmark a single batch size.
#[instrument(level = "debug")]
pub fn run_size(size: usize) -> Result<BenchmarkRow, BenchmarkError> {
    let articles = create_test_articles(size);

    let (original_set, original) = time(|| find_duplicate_titles(&articles));
    let (improved_set, improved) = time(|| find_duplicate_titles_improved(&articles));

    let duplicates = check_agreement(size, &original_set, &improved_set)?;

    let speedup = if improved.is_zero() {
        f64::INFINITY
    } else {
        original.as_secs_f64() / improved.as_secs_f64()
    };
    debug!(?original, ?improved, speedup, "Timed detectors");

    Ok(BenchmarkRow {
        size,
        original,
        improved,
        speedup,
        duplicates,
    })
}

/// Benchmark every size in order, stopping at the first mismatch.
#[instrument(level = "info", skip_all, fields(sizes = ?sizes))]
pub fn run(sizes: &[usize]) -> Result<Vec<BenchmarkRow>, BenchmarkError> {
    let rows = sizes
        .iter()
        .map(|&size| run_size(size))
        .collect::<Result<Vec<_>, _>>()?;
    info!(rows = rows.len(), "Benchmark complete");
    Ok(rows)
}

/// Render rows as a tab-separated report.
pub fn render_table(rows: &[BenchmarkRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparison: find_duplicate_titles vs find_duplicate_titles_improved"
    );
    let _ = writeln!(
        out,
        "Size\tOriginal (O(n^2))\tImproved (O(n))\tSpeedup\tDuplicates"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for row in rows {
        let _ = writeln!(
            out,
            "{}\t{}\t\t{}\t{:.1}x\t{}",
            row.size,
            format_secs(row.original),
            format_secs(row.improved),
            row.speedup,
            row.duplicates
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_titles(articles: &[Article]) -> usize {
        articles.iter().map(|a| a.title.as_str()).collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_small_batches_are_unique() {
        for n in [0, 1, 5, 10] {
            let articles = create_test_articles(n);
            assert_eq!(articles.len(), n);
            assert_eq!(distinct_titles(&articles), n);
        }
    }

    #[test]
    fn test_large_batches_use_buckets() {
        let articles = create_test_articles(100);
        assert_eq!(articles.len(), 100);
        assert_eq!(distinct_titles(&articles), 10);
        assert_eq!(articles[0].title, "Title 0");
        assert_eq!(articles[10].title, "Title 0");
        assert_eq!(articles[13].title, "Title 3");
        assert_eq!(articles[13].description, "Description for article 13");
        assert_eq!(articles[13].url, "https://example.com/article/13");
    }

    #[test]
    fn test_just_above_threshold() {
        // 11 / 10 == 1 bucket, every article shares one title
        let articles = create_test_articles(11);
        assert_eq!(distinct_titles(&articles), 1);
    }

    #[test]
    fn test_run_reports_each_size() {
        let rows = run(&[5, 50, 200]).unwrap();
        let sizes: Vec<usize> = rows.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![5, 50, 200]);
        assert_eq!(rows[0].duplicates, 0);
        assert_eq!(rows[1].duplicates, 5);
        assert_eq!(rows[2].duplicates, 20);
        assert!(rows.iter().all(|r| r.speedup > 0.0));
    }

    #[test]
    fn test_agreement_requires_equal_sets() {
        let a: HashSet<String> = ["x".to_string()].into();
        let b: HashSet<String> = ["y".to_string()].into();
        assert_eq!(check_agreement(10, &a, &a.clone()).unwrap(), 1);
        match check_agreement(10, &a, &b) {
            Err(BenchmarkError::Mismatch {
                size,
                original,
                improved,
            }) => {
                assert_eq!((size, original, improved), (10, 1, 1));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_render_table() {
        let rows = vec![BenchmarkRow {
            size: 100,
            original: Duration::from_micros(1500),
            improved: Duration::from_micros(150),
            speedup: 10.0,
            duplicates: 10,
        }];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Size\tOriginal"));
        assert_eq!(lines[3], "100\t0.001500\t\t0.000150\t10.0x\t10");
    }

    #[test]
    fn test_render_infinite_speedup() {
        let rows = vec![BenchmarkRow {
            size: 1,
            original: Duration::from_nanos(10),
            improved: Duration::ZERO,
            speedup: f64::INFINITY,
            duplicates: 0,
        }];
        assert!(render_table(&rows).contains("infx"));
    }
}
