//! Local snapshot of the Cloudscape demos repository.
//!
//! The repository is fetched once at startup as a zipball and unpacked into a
//! temporary directory that lives as long as the server. Searches then walk
//! the extracted tree; no network traffic happens per call. When the fetch
//! fails the snapshot is simply absent and every search returns empty.

use regex::Regex;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::consts::{
    CLOUDSCAPE_DEMOS_ZIP_URL, DEMO_FILE_EXTENSIONS, DEMO_SKIP_PATTERNS,
};
use crate::model::CloudscapeDemoResult;
use crate::search::{RELEVANCE_THRESHOLD, demo_relevance};

/// Characters of source kept per demo result.
const DEMO_CONTENT_LENGTH: usize = 3000;
/// Maximum files returned by a pattern search.
const MAX_PATTERN_RESULTS: usize = 10;

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"title:\s*["']([^"']+)["']"#,
        r#"name:\s*["']([^"']+)["']"#,
        r"<title>([^<]+)</title>",
        r"//\s*(.+) [Dd]emo",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static DESCRIPTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"description:\s*["']([^"']+)["']"#,
        r"//\s*Description:\s*(.+)",
        r"/\*\*\s*([^*]+)\s*\*/",
        r"<p[^>]*>([^<]+)</p>",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static IMPORT_LIST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"]@cloudscape-design/components['"]"#).ok()
});

static JSX_COMPONENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z]+)").ok());

static INTERESTING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"interface\s+\w+Props",
        r"type\s+\w+\s*=",
        r"const\s+\w+:\s*React\.FC",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

pub struct DemoRepo {
    root: Option<PathBuf>,
    // Keeps the extracted snapshot alive for the lifetime of the server.
    _workdir: Option<TempDir>,
}

impl DemoRepo {
    /// Download and unpack the demos zipball. Any failure along the way
    /// leaves the snapshot empty rather than failing startup.
    pub async fn fetch(client: &reqwest::Client) -> Self {
        let bytes = match client.get(CLOUDSCAPE_DEMOS_ZIP_URL).send().await {
            Ok(response) if response.status().is_success() => match response.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Failed to read demos zipball: {e}");
                    return Self::empty();
                }
            },
            Ok(response) => {
                tracing::warn!("Demos zipball returned {}", response.status());
                return Self::empty();
            }
            Err(e) => {
                tracing::warn!("Failed to download demos zipball: {e}");
                return Self::empty();
            }
        };

        let workdir = match TempDir::new() {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!("Failed to create demos workdir: {e}");
                return Self::empty();
            }
        };

        let mut archive = match zip::ZipArchive::new(Cursor::new(bytes)) {
            Ok(archive) => archive,
            Err(e) => {
                tracing::warn!("Demos zipball is not a valid archive: {e}");
                return Self::empty();
            }
        };

        if let Err(e) = archive.extract(workdir.path()) {
            tracing::warn!("Failed to extract demos zipball: {e}");
            return Self::empty();
        }

        tracing::info!("Demos snapshot extracted to {}", workdir.path().display());
        Self {
            root: Some(workdir.path().to_path_buf()),
            _workdir: Some(workdir),
        }
    }

    /// Wrap an already-populated directory. Used by tests.
    pub fn from_dir(path: &Path) -> Self {
        Self {
            root: Some(path.to_path_buf()),
            _workdir: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            root: None,
            _workdir: None,
        }
    }

    pub fn available(&self) -> bool {
        self.root.is_some()
    }

    fn files(&self) -> Vec<PathBuf> {
        let Some(root) = &self.root else {
            return Vec::new();
        };
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| !should_skip(path))
            .collect()
    }

    fn relative(&self, path: &Path) -> String {
        self.root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Score every demo source file against `query` and return the best
    /// matches, highest score first.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<CloudscapeDemoResult> {
        let mut scored = Vec::new();

        for path in self.files() {
            if !has_demo_extension(&path) {
                continue;
            }
            let Some(content) = read_text(&path) else {
                continue;
            };
            let score = demo_relevance(&content, query);
            if score >= RELEVANCE_THRESHOLD {
                scored.push((score, self.analyze(&path, &content)));
            }
        }

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(max_results)
            .map(|(_, result)| result)
            .collect()
    }

    /// The first file whose name or path contains `name`, case-insensitive.
    pub fn implementation(&self, name: &str) -> Option<CloudscapeDemoResult> {
        let needle = name.to_lowercase();

        for path in self.files() {
            let matches = path
                .file_name()
                .map(|f| f.to_string_lossy().to_lowercase().contains(&needle))
                .unwrap_or(false)
                || self.relative(&path).to_lowercase().contains(&needle);
            if !matches {
                continue;
            }
            if let Some(content) = read_text(&path) {
                return Some(self.analyze(&path, &content));
            }
        }
        None
    }

    /// Component files that exercise noteworthy React or Cloudscape
    /// patterns, optionally restricted to files mentioning `component`.
    pub fn patterns(&self, component: Option<&str>) -> Vec<CloudscapeDemoResult> {
        let needle = component.map(|c| c.to_lowercase());
        let mut results = Vec::new();

        for path in self.files() {
            if path.extension().and_then(|e| e.to_str()) != Some("tsx") {
                continue;
            }
            let Some(content) = read_text(&path) else {
                continue;
            };
            if let Some(needle) = &needle {
                if !content.to_lowercase().contains(needle) {
                    continue;
                }
            }
            if !has_interesting_patterns(&content) {
                continue;
            }
            results.push(self.analyze(&path, &content));
            if results.len() == MAX_PATTERN_RESULTS {
                break;
            }
        }
        results
    }

    /// Build a result from one source file: name and description from the
    /// first matching extraction pattern, component list from imports and
    /// JSX usage, content capped.
    fn analyze(&self, path: &Path, content: &str) -> CloudscapeDemoResult {
        let file_path = self.relative(path);

        let demo_name = first_capture(&NAME_PATTERNS, content).unwrap_or_else(|| {
            path.file_stem()
                .map(|s| stem_to_name(&s.to_string_lossy()))
                .unwrap_or_else(|| file_path.clone())
        });

        let description =
            first_capture(&DESCRIPTION_PATTERNS, content).map(|d| d.trim().to_string());

        CloudscapeDemoResult {
            file_path,
            demo_name,
            content: content.chars().take(DEMO_CONTENT_LENGTH).collect(),
            description,
            components_used: extract_components(content),
        }
    }
}

/// "orders-table" becomes "Orders Table".
fn stem_to_name(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
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

fn read_text(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!("Could not read {}: {e}", path.display());
            None
        }
    }
}

fn should_skip(path: &Path) -> bool {
    let text = path.to_string_lossy();
    DEMO_SKIP_PATTERNS.iter().any(|p| text.contains(p))
}

fn has_demo_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| DEMO_FILE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn first_capture(patterns: &[Regex], content: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Cloudscape components referenced by a source file, from the package
/// import list plus capitalized JSX tags, sorted and deduplicated.
pub fn extract_components(content: &str) -> Vec<String> {
    let mut found = std::collections::BTreeSet::new();

    if let Some(imports) = IMPORT_LIST.as_ref() {
        for captures in imports.captures_iter(content) {
            if let Some(list) = captures.get(1) {
                for name in list.as_str().split(',') {
                    let name = name.trim();
                    if !name.is_empty() {
                        found.insert(name.to_string());
                    }
                }
            }
        }
    }

    if let Some(jsx) = JSX_COMPONENT.as_ref() {
        for captures in jsx.captures_iter(content) {
            if let Some(tag) = captures.get(1) {
                found.insert(tag.as_str().to_string());
            }
        }
    }

    found.into_iter().collect()
}

fn has_interesting_patterns(content: &str) -> bool {
    const MARKERS: &[&str] = &["@cloudscape-design/components", "useState", "useEffect"];
    MARKERS.iter().any(|m| content.contains(m))
        || INTERESTING_PATTERNS.iter().any(|p| p.is_match(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
// Table Demo
import { Table, Header } from '@cloudscape-design/components';

const page = {
  title: "Orders table",
  description: "Shows paginated orders"
};

export default function Demo() {
  return <Table header={<Header>Orders</Header>} />;
}
"#;

    #[test]
    fn components_from_imports_and_jsx() {
        // The file's own exported component is neither imported nor used as
        // a JSX tag here, so only the Cloudscape components are listed.
        let components = extract_components(SAMPLE);
        assert_eq!(components, vec!["Header", "Table"]);
    }

    #[test]
    fn name_and_description_extraction() {
        assert_eq!(
            first_capture(&NAME_PATTERNS, SAMPLE).as_deref(),
            Some("Orders table")
        );
        assert_eq!(
            first_capture(&DESCRIPTION_PATTERNS, SAMPLE).as_deref(),
            Some("Shows paginated orders")
        );
    }

    #[test]
    fn skip_patterns_exclude_build_output() {
        assert!(should_skip(Path::new("demos/node_modules/react/index.js")));
        assert!(should_skip(Path::new("demos/package-lock.json")));
        assert!(!should_skip(Path::new("demos/src/pages/table.tsx")));
    }

    #[test]
    fn interesting_patterns_detected() {
        assert!(has_interesting_patterns("const [x, setX] = useState(0);"));
        assert!(has_interesting_patterns("interface TableProps { rows: number }"));
        assert!(!has_interesting_patterns("const plain = 1;"));
    }

    #[test]
    fn stem_fallback_is_title_cased() {
        assert_eq!(stem_to_name("orders-table"), "Orders Table");
        assert_eq!(stem_to_name("contact_form"), "Contact Form");
    }

    #[test]
    fn empty_repo_searches_empty() {
        let repo = DemoRepo::empty();
        assert!(!repo.available());
        assert!(repo.search("table", 5).is_empty());
        assert!(repo.implementation("table").is_none());
        assert!(repo.patterns(None).is_empty());
    }
}
