//! Request-scoped value objects shared by both pipelines.
//!
//! Every value here is built fresh from a network response during a single
//! tool invocation and dropped once the formatted report has been returned.
//! There is no cache and no persistence between calls.

use serde::{Deserialize, Serialize};

/// One entry from a recursive repository tree listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

/// A scored documentation search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// 1-based position, assigned after sorting.
    pub rank_order: usize,
    pub title: String,
    pub path: String,
    pub url: String,
    pub raw_url: String,
    pub repository: String,
    pub relevance_score: f64,
}

/// A scored hit from the sample repositories.
#[derive(Debug, Clone, Serialize)]
pub struct SampleResult {
    pub framework: String,
    pub repository: String,
    pub path: String,
    pub url: String,
    pub raw_url: String,
    pub title: String,
    pub relevance_score: f64,
    pub description: String,
    pub size: usize,
}

/// Documentation content fetched from a URL, possibly truncated.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentationContent {
    pub url: String,
    pub title: Option<String>,
    pub content: String,
    pub content_length: usize,
    pub truncated: bool,
}

impl DocumentationContent {
    /// Build from raw content, truncating to `max_length` characters.
    /// `content_length` and `truncated` always describe the stored text
    /// relative to the original.
    pub fn truncate(url: &str, title: Option<String>, original: &str, max_length: usize) -> Self {
        let (content, truncated) = truncate_chars(original, max_length);
        Self {
            url: url.to_string(),
            title,
            content_length: content.chars().count(),
            content,
            truncated,
        }
    }
}

/// Cut `text` to at most `max` characters. Returns the (possibly shortened)
/// text and whether anything was dropped. Counts characters, not bytes, so
/// multi-byte content never splits a code point.
pub fn truncate_chars(text: &str, max: usize) -> (String, bool) {
    let total = text.chars().count();
    if total > max {
        (text.chars().take(max).collect(), true)
    } else {
        (text.to_string(), false)
    }
}

/// One probed file inside a sample project template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateFileInfo {
    pub description: String,
    pub size: usize,
    pub url: String,
    pub preview: String,
}

/// Everything discovered about one framework's starter template.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTemplate {
    pub framework: String,
    pub repository: String,
    pub github_url: String,
    /// Probe order is preserved; paths may repeat if probed twice.
    pub available_files: Vec<(String, TemplateFileInfo)>,
    pub key_features: Vec<String>,
}

/// A page hit from the Cloudscape documentation crawl.
#[derive(Debug, Clone, Serialize)]
pub struct CloudscapeDocResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub component_type: Option<String>,
}

/// A file hit from the Cloudscape demos snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CloudscapeDemoResult {
    pub file_path: String,
    pub demo_name: String,
    pub content: String,
    pub description: Option<String>,
    pub components_used: Vec<String>,
}

/// Extracted documentation for a single Cloudscape component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentInfo {
    pub name: String,
    pub description: String,
    pub props: Vec<String>,
    pub examples: Vec<String>,
    pub related_components: Vec<String>,
}

/// A Cloudscape design token.
#[derive(Debug, Clone, Serialize)]
pub struct DesignToken {
    pub name: String,
    pub value: String,
    pub category: String,
    pub description: Option<String>,
}
