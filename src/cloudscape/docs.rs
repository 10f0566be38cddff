//! Cloudscape documentation site crawler.
//!
//! There is no search API for the site, so searching means fetching the key
//! section index pages, following their same-site links, converting each page
//! to markdown and keeping the ones that clear the relevance threshold. All
//! HTML parsing happens in synchronous helpers so no parsed document is held
//! across an await point.

use anyhow::Result;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::consts::{
    CLOUDSCAPE_BASE_URL, CLOUDSCAPE_DOC_SECTIONS, CLOUDSCAPE_FETCH_TIMEOUT_SECS, USER_AGENT,
};
use crate::model::{CloudscapeDocResult, ComponentInfo, DesignToken};
use crate::search::{content_relevance, is_relevant};

/// Characters of page content kept per search result.
const PAGE_CONTENT_LENGTH: usize = 2000;
/// Minimum length for an extracted code example.
const MIN_EXAMPLE_LENGTH: usize = 20;
/// Maximum code examples per component.
const MAX_EXAMPLES: usize = 5;

pub struct DocSearcher {
    base_url: String,
    client: reqwest::Client,
}

impl DocSearcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(CLOUDSCAPE_FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base_url: CLOUDSCAPE_BASE_URL.to_string(),
            client,
        })
    }

    /// Fetch a page, yielding its HTML only on a 200 response.
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch {url}: {e}");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("{url} returned {}", response.status());
            return None;
        }
        response.text().await.ok()
    }

    /// Crawl the documentation sections for pages relevant to `query`.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<CloudscapeDocResult> {
        let per_section = (max_results / CLOUDSCAPE_DOC_SECTIONS.len()).max(1);
        let mut results = Vec::new();

        for section in CLOUDSCAPE_DOC_SECTIONS {
            let section_url = format!("{}{section}", self.base_url);
            let Some(html) = self.fetch_page(&section_url).await else {
                continue;
            };

            for href in extract_site_links(&html).into_iter().take(per_section) {
                let page_url = format!("{}{href}", self.base_url);
                let Some(page_html) = self.fetch_page(&page_url).await else {
                    continue;
                };
                let result = extract_doc_page(&page_url, &page_html);
                if is_relevant(&result.content, query) {
                    results.push(result);
                }
            }
        }

        results.sort_by(|a, b| {
            content_relevance(&b.content, query)
                .partial_cmp(&content_relevance(&a.content, query))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(max_results);
        results
    }

    /// Detailed documentation for one component, or `None` when the page
    /// does not exist or cannot be fetched.
    pub async fn component_docs(&self, component_name: &str) -> Option<ComponentInfo> {
        let url = format!("{}/components/{}/", self.base_url, component_name.to_lowercase());
        let html = self.fetch_page(&url).await?;
        Some(extract_component_info(component_name, &html))
    }

    /// Design tokens from the visual-foundation page, optionally filtered by
    /// category substring.
    pub async fn design_tokens(&self, category: Option<&str>) -> Vec<DesignToken> {
        let url = format!(
            "{}/foundation/visual-foundation/design-tokens/",
            self.base_url
        );
        let Some(html) = self.fetch_page(&url).await else {
            return Vec::new();
        };
        extract_design_tokens(&html, category)
    }
}

fn select(s: &'static str) -> Option<Selector> {
    Selector::parse(s).ok()
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Same-site link hrefs from a section index page, in document order,
/// deduplicated.
pub fn extract_site_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(anchors) = select("a[href]") else {
        return Vec::new();
    };

    let mut seen = std::collections::HashSet::new();
    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.starts_with('/') && seen.insert(href.to_string()) {
            links.push(href.to_string());
        }
    }
    links
}

/// Convert a documentation page to a search result: title from the first
/// heading, body converted to markdown and capped.
pub fn extract_doc_page(url: &str, html: &str) -> CloudscapeDocResult {
    let document = Html::parse_document(html);

    let title = ["h1", "title"]
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|sel| document.select(&sel).next().map(element_text))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let fragment = ["main", "article", "body"]
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|sel| document.select(&sel).next().map(|el| el.html()));

    let content = match fragment {
        Some(fragment_html) => {
            let markdown = html2md::parse_html(&fragment_html);
            let collapsed = collapse_blank_lines(markdown.trim());
            collapsed.chars().take(PAGE_CONTENT_LENGTH).collect()
        }
        None => String::new(),
    };

    CloudscapeDocResult {
        title,
        url: url.to_string(),
        content,
        component_type: component_type_from_url(url),
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run = true;
            continue;
        }
        if blank_run && !out.is_empty() {
            out.push('\n');
        }
        blank_run = false;
        out.push_str(line);
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// The path segment following "components", if any.
pub fn component_type_from_url(url: &str) -> Option<String> {
    let path = url.splitn(4, '/').nth(3)?;
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let idx = parts.iter().position(|p| *p == "components")?;
    parts.get(idx + 1).map(|s| s.to_string())
}

/// Pull description, props, examples and related components out of a
/// component page.
pub fn extract_component_info(name: &str, html: &str) -> ComponentInfo {
    let document = Html::parse_document(html);

    let description = [".component-description", ".description", ".lead", "p"]
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|sel| document.select(&sel).next().map(element_text))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "No description available".to_string());

    let mut props = Vec::new();
    if let Some(rows) = select("section#props table tr, div.props table tr") {
        for row in document.select(&rows).skip(1) {
            if let Some(cell) = select("td, th").and_then(|sel| row.select(&sel).next()) {
                let prop = element_text(cell);
                if !prop.is_empty() {
                    props.push(prop);
                }
            }
        }
    }

    let mut examples = Vec::new();
    if let Some(blocks) = select("pre, code") {
        for block in document.select(&blocks) {
            let code = element_text(block);
            if code.len() > MIN_EXAMPLE_LENGTH {
                examples.push(code);
                if examples.len() == MAX_EXAMPLES {
                    break;
                }
            }
        }
    }

    let mut related = Vec::new();
    if let Some(sections) = select("section") {
        for section in document.select(&sections) {
            let text = element_text(section).to_lowercase();
            if !text.contains("related") {
                continue;
            }
            if let Some(anchors) = select("a") {
                for anchor in section.select(&anchors) {
                    let component = element_text(anchor);
                    if !component.is_empty() {
                        related.push(component);
                    }
                }
            }
            break;
        }
    }

    ComponentInfo {
        name: name.to_string(),
        description,
        props,
        examples,
        related_components: related,
    }
}

/// Token extraction from the design-tokens page structure.
pub fn extract_design_tokens(html: &str, category: Option<&str>) -> Vec<DesignToken> {
    let document = Html::parse_document(html);
    let mut tokens = Vec::new();

    let Some(sections) = select("section.token-section") else {
        return tokens;
    };

    for section in document.select(&sections) {
        let token_category = select("h2, h3")
            .and_then(|sel| section.select(&sel).next())
            .map(element_text)
            .unwrap_or_else(|| "unknown".to_string());

        if let Some(filter) = category {
            if !token_category.to_lowercase().contains(&filter.to_lowercase()) {
                continue;
            }
        }

        if let Some(items) = select("div.token-item") {
            for item in section.select(&items) {
                let name = select(".token-name").and_then(|sel| item.select(&sel).next());
                let value = select(".token-value").and_then(|sel| item.select(&sel).next());
                let description = select(".token-description")
                    .and_then(|sel| item.select(&sel).next())
                    .map(element_text);

                if let (Some(name), Some(value)) = (name, value) {
                    tokens.push(DesignToken {
                        name: element_text(name),
                        value: element_text(value),
                        category: token_category.clone(),
                        description,
                    });
                }
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_links_are_relative_and_deduped() {
        let html = r#"<html><body>
            <a href="/components/table/">Table</a>
            <a href="https://example.com/away">External</a>
            <a href="/components/table/">Table again</a>
            <a href="/patterns/">Patterns</a>
        </body></html>"#;
        let links = extract_site_links(html);
        assert_eq!(links, vec!["/components/table/", "/patterns/"]);
    }

    #[test]
    fn doc_page_extraction() {
        let html = r#"<html><head><title>fallback</title></head><body>
            <main><h1>Table</h1><p>A table presents data in rows.</p></main>
        </body></html>"#;
        let result = extract_doc_page("https://cloudscape.design/components/table/", html);
        assert_eq!(result.title, "Table");
        assert!(result.content.contains("rows"));
        assert_eq!(result.component_type.as_deref(), Some("table"));
    }

    #[test]
    fn component_type_only_for_component_urls() {
        assert_eq!(
            component_type_from_url("https://cloudscape.design/components/button/"),
            Some("button".to_string())
        );
        assert_eq!(
            component_type_from_url("https://cloudscape.design/patterns/"),
            None
        );
    }

    #[test]
    fn component_info_defaults() {
        let info = extract_component_info("button", "<html><body></body></html>");
        assert_eq!(info.name, "button");
        assert_eq!(info.description, "No description available");
        assert!(info.props.is_empty());
        assert!(info.examples.is_empty());
    }

    #[test]
    fn component_examples_filter_short_snippets() {
        let html = r#"<html><body>
            <p>The button triggers actions.</p>
            <pre>x</pre>
            <pre>import { Button } from '@cloudscape-design/components';</pre>
        </body></html>"#;
        let info = extract_component_info("button", html);
        assert_eq!(info.examples.len(), 1);
        assert!(info.examples[0].contains("Button"));
    }

    #[test]
    fn design_token_extraction_with_filter() {
        let html = r#"<html><body>
            <section class="token-section"><h2>Color</h2>
              <div class="token-item">
                <span class="token-name">color-text-body</span>
                <span class="token-value">#16191f</span>
              </div>
            </section>
            <section class="token-section"><h2>Spacing</h2>
              <div class="token-item">
                <span class="token-name">space-s</span>
                <span class="token-value">8px</span>
              </div>
            </section>
        </body></html>"#;
        let all = extract_design_tokens(html, None);
        assert_eq!(all.len(), 2);
        let colors = extract_design_tokens(html, Some("color"));
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "color-text-body");
        assert_eq!(colors[0].category, "Color");
    }
}
