//! Path-based relevance scoring and ranking.
//!
//! Scores are unbounded non-negative floats used only for ordering within a
//! single query; the rules are additive so more matches never lower a score.
//! An empty query matches every substring check and therefore awards every
//! bonus — callers get a fully boosted listing rather than an error.

use crate::consts::{
    CORE_TOPIC_KEYWORDS, DEFAULT_SEARCH_LIMIT, DOCUMENTATION_REPO, FRAMEWORK_KEYWORDS,
    MAX_SEARCH_LIMIT,
};
use crate::model::{SearchResult, TreeEntry};

/// Score a repository path against a free-text query.
pub fn score_path(path: &str, query: &str) -> f64 {
    let path = path.to_lowercase();
    let query = query.to_lowercase();
    let mut score = 0.0;

    // Exact match in the filename outranks everything else.
    let filename = path.rsplit('/').next().unwrap_or(&path);
    if filename.contains(&query) {
        score += 10.0;
    }

    for component in path.split('/') {
        if component.contains(&query) {
            score += 5.0;
        }
    }

    if path.contains("gen2") || path.contains("gen-2") {
        score += 3.0;
    }

    for framework in FRAMEWORK_KEYWORDS {
        if path.contains(framework) {
            score += 2.0;
        }
    }

    for topic in CORE_TOPIC_KEYWORDS {
        if path.contains(topic) {
            score += 2.0;
        }
    }

    if path.contains("build-a-backend") {
        score += 4.0;
    }

    if path.contains("/pages/") {
        score += 1.0;
    }

    score
}

/// Turn a repository path into a readable title: the filename in Title Case
/// with up to two parent directories as context.
pub fn title_from_path(path: &str) -> String {
    let filename = path.rsplit('/').next().unwrap_or(path);
    let stem = filename
        .trim_end_matches(".mdx")
        .trim_end_matches(".md")
        .replace(['-', '_'], " ");
    let title = title_case(&stem);

    let parents: Vec<&str> = path.split('/').collect();
    if parents.len() > 1 {
        let context: Vec<String> = parents[..parents.len() - 1]
            .iter()
            .rev()
            .take(2)
            .rev()
            .map(|part| title_case(&part.replace('-', " ")))
            .collect();
        format!("{} ({})", title, context.join(" - "))
    } else {
        title
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clamp a caller-supplied limit: non-positive means "use the default",
/// anything above the hard cap is cut to it.
pub fn clamp_limit(limit: i32) -> usize {
    if limit <= 0 {
        DEFAULT_SEARCH_LIMIT
    } else {
        (limit as usize).min(MAX_SEARCH_LIMIT)
    }
}

/// Score every markdown blob in a tree listing, drop zero-score candidates,
/// sort descending, assign 1-based ranks and truncate to `limit`.
///
/// The sort is stable, so candidates with equal scores keep the order in
/// which the listing produced them.
pub fn search_tree(entries: &[TreeEntry], query: &str, limit: usize) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = entries
        .iter()
        .filter(|entry| entry.is_blob())
        .filter(|entry| entry.path.ends_with(".md") || entry.path.ends_with(".mdx"))
        .filter_map(|entry| {
            let relevance_score = score_path(&entry.path, query);
            if relevance_score > 0.0 {
                Some(SearchResult {
                    rank_order: 0,
                    title: title_from_path(&entry.path),
                    path: entry.path.clone(),
                    url: format!(
                        "https://github.com/{}/blob/main/{}",
                        DOCUMENTATION_REPO, entry.path
                    ),
                    raw_url: format!(
                        "https://raw.githubusercontent.com/{}/main/{}",
                        DOCUMENTATION_REPO, entry.path
                    ),
                    repository: DOCUMENTATION_REPO.to_string(),
                    relevance_score,
                })
            } else {
                None
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.truncate(limit);
    for (i, result) in results.iter_mut().enumerate() {
        result.rank_order = i + 1;
    }

    results
}

/// Fraction of query words present in `content`. Used by the Cloudscape
/// documentation crawl, where whole-page content is available.
pub fn content_relevance(content: &str, query: &str) -> f64 {
    if content.is_empty() || query.is_empty() {
        return 0.0;
    }

    let content = content.to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let matches = words
        .iter()
        .filter(|word| content.contains(&word.to_lowercase()))
        .count();
    matches as f64 / words.len() as f64
}

/// Relevance threshold below which a page or demo file is discarded.
pub const RELEVANCE_THRESHOLD: f64 = 0.1;

pub fn is_relevant(content: &str, query: &str) -> bool {
    content_relevance(content, query) >= RELEVANCE_THRESHOLD
}

/// Weighted relevance for demo source files: a query word matched inside an
/// import line counts 3, as a JSX tag 2, anywhere else 1. Averaged over the
/// query words so the threshold stays comparable with `content_relevance`.
pub fn demo_relevance(content: &str, query: &str) -> f64 {
    if content.is_empty() || query.is_empty() {
        return 0.0;
    }

    let content_lower = content.to_lowercase();
    let words: Vec<String> = query.to_lowercase().split_whitespace().map(String::from).collect();
    if words.is_empty() {
        return 0.0;
    }

    let mut matches = 0usize;
    for word in &words {
        let in_import = content_lower
            .lines()
            .any(|line| line.trim_start().starts_with("import") && line.contains(word.as_str()));
        if in_import {
            matches += 3;
        } else if content_lower.contains(&format!("<{word}")) {
            matches += 2;
        } else if content_lower.contains(word.as_str()) {
            matches += 1;
        }
    }

    matches as f64 / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind: "blob".to_string(),
        }
    }

    #[test]
    fn filename_match_scores_at_least_ten() {
        assert!(score_path("docs/setup/auth.md", "auth") >= 10.0);
    }

    #[test]
    fn scoring_is_additive() {
        let base = score_path("docs/auth/setup.md", "auth");
        let boosted = score_path("docs/build-a-backend/auth/setup.md", "auth");
        assert!(boosted >= base + 4.0);
    }

    #[test]
    fn empty_query_awards_every_bonus() {
        // The empty string is a substring of everything, so the filename and
        // every path component match. Preserved deliberately.
        let score = score_path("src/pages/build-a-backend/auth/react/index.md", "");
        assert!(score > 0.0);
    }

    #[test]
    fn zero_score_paths_are_excluded() {
        let entries = vec![blob("docs/zzz/qqq.md")];
        assert!(search_tree(&entries, "nonexistenttopic", 10).is_empty());
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let entries = vec![blob("docs/auth/aaa.md"), blob("docs/auth/bbb.md")];
        let results = search_tree(&entries, "auth", 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].relevance_score, results[1].relevance_score);
        assert_eq!(results[0].path, "docs/auth/aaa.md");
        assert_eq!(results[1].path, "docs/auth/bbb.md");
    }

    #[test]
    fn ranks_are_assigned_after_sorting() {
        let entries = vec![blob("docs/misc/data.md"), blob("docs/auth/auth.md")];
        let results = search_tree(&entries, "auth", 10);
        assert_eq!(results[0].rank_order, 1);
        assert_eq!(results[0].path, "docs/auth/auth.md");
        assert_eq!(results[1].rank_order, 2);
    }

    #[test]
    fn limit_clamping() {
        assert_eq!(clamp_limit(0), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(-3), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(5), 5);
        assert_eq!(clamp_limit(500), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn title_from_nested_path() {
        let title = title_from_path("src/pages/build-a-backend/auth/set-up-auth.md");
        assert!(title.starts_with("Set Up Auth"));
        assert!(title.contains("Build A Backend"));
        assert!(title.contains("Auth"));
    }

    #[test]
    fn content_relevance_fraction() {
        assert_eq!(content_relevance("the table component", "table"), 1.0);
        assert_eq!(content_relevance("the table component", "table chart"), 0.5);
        assert_eq!(content_relevance("", "table"), 0.0);
    }

    #[test]
    fn demo_relevance_weights_imports() {
        let imported = "import { Table } from '@cloudscape-design/components';\n";
        let tagged = "render(<table />);\n";
        let mentioned = "// a table of contents\n";
        assert!(demo_relevance(imported, "table") > demo_relevance(tagged, "table"));
        assert!(demo_relevance(tagged, "table") > demo_relevance(mentioned, "table"));
    }
}
