//! Duplicate headline detection over a batch of articles.
//!
//! Two interchangeable implementations are provided:
//!
//! | Function | Time | Extra space |
//! |----------|------|-------------|
//! | [`find_duplicate_titles`] | O(n²) | O(d) |
//! | [`find_duplicate_titles_improved`] | O(n) | O(u) |
//!
//! where `d` is the number of duplicated titles and `u` the number of
//! distinct titles. Both return the same set for the same input; the
//! quadratic one is kept as the baseline for [`crate::benchmark`].
//!
//! Titles are compared by exact string equality. The empty title is a
//! regular key, so two untitled articles are reported as `""`.

use crate::models::Article;
use std::collections::HashSet;

/// Find every title that appears more than once, comparing each article
/// against all others.
///
/// # Examples
///
/// ```
/// use platzi_news::analysis::find_duplicate_titles;
/// use platzi_news::models::Article;
///
/// let articles = vec![
///     Article::new("A", "", ""),
///     Article::new("B", "", ""),
///     Article::new("A", "", ""),
/// ];
/// let dups = find_duplicate_titles(&articles);
/// assert_eq!(dups.len(), 1);
/// assert!(dups.contains("A"));
/// ```
pub fn find_duplicate_titles(articles: &[Article]) -> HashSet<String> {
    let mut duplicates = HashSet::new();
    for (i, article) in articles.iter().enumerate() {
        for (j, other) in articles.iter().enumerate() {
            if i != j && article.title == other.title {
                duplicates.insert(article.title.clone());
            }
        }
    }
    duplicates
}

/// Find every title that appears more than once in a single pass.
///
/// Same result as [`find_duplicate_titles`].
pub fn find_duplicate_titles_improved(articles: &[Article]) -> HashSet<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(articles.len());
    let mut duplicates = HashSet::new();
    for article in articles {
        if !seen.insert(article.title.as_str()) {
            duplicates.insert(article.title.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(titles: &[&str]) -> Vec<Article> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Article::new(*t, format!("desc {i}"), format!("https://example.com/{i}"))
            })
            .collect()
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicate_titles(&[]).is_empty());
        assert!(find_duplicate_titles_improved(&[]).is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let articles = titled(&["A", "B", "C"]);
        assert!(find_duplicate_titles(&articles).is_empty());
        assert!(find_duplicate_titles_improved(&articles).is_empty());
    }

    #[test]
    fn test_simple_duplicate() {
        let articles = titled(&["A", "B", "A"]);
        assert_eq!(find_duplicate_titles(&articles), set(&["A"]));
        assert_eq!(find_duplicate_titles_improved(&articles), set(&["A"]));
    }

    #[test]
    fn test_all_duplicates_collapse_to_one() {
        let articles = titled(&["X"; 5]);
        assert_eq!(find_duplicate_titles(&articles), set(&["X"]));
        assert_eq!(find_duplicate_titles_improved(&articles), set(&["X"]));
    }

    #[test]
    fn test_empty_title_is_a_duplicate_key() {
        let articles = titled(&["", ""]);
        assert_eq!(find_duplicate_titles(&articles), set(&[""]));
        assert_eq!(find_duplicate_titles_improved(&articles), set(&[""]));
    }

    #[test]
    fn test_single_article() {
        let articles = titled(&["Solo"]);
        assert!(find_duplicate_titles(&articles).is_empty());
        assert!(find_duplicate_titles_improved(&articles).is_empty());
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let articles = titled(&["News", "news", "NEWS "]);
        assert!(find_duplicate_titles(&articles).is_empty());
        assert!(find_duplicate_titles_improved(&articles).is_empty());
    }

    #[test]
    fn test_several_duplicate_groups() {
        let articles = titled(&["A", "B", "C", "B", "A", "D", "A"]);
        assert_eq!(find_duplicate_titles(&articles), set(&["A", "B"]));
        assert_eq!(find_duplicate_titles_improved(&articles), set(&["A", "B"]));
    }

    #[test]
    fn test_only_title_matters() {
        let articles = vec![
            Article::new("Same", "one", "https://a.example"),
            Article::new("Same", "two", "https://b.example"),
        ];
        assert_eq!(find_duplicate_titles_improved(&articles), set(&["Same"]));
    }

    #[test]
    fn test_input_not_mutated() {
        let articles = titled(&["A", "B", "A", ""]);
        let before = articles.clone();
        let _ = find_duplicate_titles(&articles);
        let _ = find_duplicate_titles_improved(&articles);
        assert_eq!(articles, before);
    }
}
