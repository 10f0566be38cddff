//! Amplify Gen2 tool pipeline: documentation search, content reads, guidance
//! and troubleshooting. Every operation returns a markdown report string —
//! failures surface as readable text, never as errors.

pub mod discovery;
pub mod guides;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::consts::{
    AMPLIFY_DOCS_BASE, DEFAULT_CONTENT_LENGTH, DOCUMENTATION_REPO, ISSUE_TOPIC_MAP,
    MAX_CONTENT_LENGTH, SAMPLE_REPOSITORIES,
};
use crate::fetch::GitHubFetcher;
use crate::model::{DocumentationContent, SampleResult, SearchResult, truncate_chars};
use crate::search::search_tree;
use discovery::{capitalize, discover_project_templates, search_sample_repositories};

/// Characters of documentation shown inside a guidance report.
const GUIDANCE_DOC_LENGTH: usize = 3000;
/// Characters of code shown per sample inside a guidance report.
const GUIDANCE_CODE_LENGTH: usize = 1000;
/// Samples rendered in a search report.
const SEARCH_SAMPLE_DISPLAY: usize = 5;

/// Search the documentation repository tree and the sample repositories,
/// and render the combined report.
pub async fn search_documentation(fetcher: &GitHubFetcher, query: &str, limit: usize) -> String {
    tracing::info!("Searching Amplify Gen2 documentation for: {query}");

    let entries = fetcher.repository_tree(DOCUMENTATION_REPO).await;
    let doc_results = search_tree(&entries, query, limit);
    let sample_results = search_sample_repositories(fetcher, query, None).await;

    format_search_report(query, &doc_results, &sample_results)
}

/// Render the combined documentation + code-example report. Pure; empty
/// sections print a literal "No ... found." line instead of disappearing.
pub fn format_search_report(
    query: &str,
    doc_results: &[SearchResult],
    sample_results: &[SampleResult],
) -> String {
    let mut out = format!(
        "# Amplify Gen2 Documentation Search Results\n\n\
         **Query:** {query}\n\
         **Found:** {} documentation results, {} code examples\n\n\
         ## Official Documentation\n\n",
        doc_results.len(),
        sample_results.len(),
    );

    if doc_results.is_empty() {
        out.push_str("No documentation results found.\n\n");
    } else {
        for result in doc_results {
            out.push_str(&format!(
                "### {}. {}\n**URL:** {}\n**Path:** {}\n**Relevance Score:** {:.1}\n\n",
                result.rank_order, result.title, result.url, result.path, result.relevance_score,
            ));
        }
    }

    out.push_str("## Code Examples\n\n");

    if sample_results.is_empty() {
        out.push_str("No code examples found.\n\n");
    } else {
        for (i, sample) in sample_results.iter().take(SEARCH_SAMPLE_DISPLAY).enumerate() {
            out.push_str(&format!(
                "### {}. {}\n**Framework:** {}\n**Repository:** https://github.com/{}\n\
                 **File:** {}\n**URL:** {}\n\n",
                i + 1,
                sample.title,
                capitalize(&sample.framework),
                sample.repository,
                sample.path,
                sample.url,
            ));
        }
        if sample_results.len() > SEARCH_SAMPLE_DISPLAY {
            out.push_str(&format!(
                "*Showing the top {SEARCH_SAMPLE_DISPLAY} of {} code examples.*\n\n",
                sample_results.len()
            ));
        }
    }

    out.push_str(guides::SEARCH_FOOTER);
    out
}

/// Read one documentation file, resolving raw, blob and plain GitHub URL
/// shapes, and truncate to `max_length` characters.
pub async fn read_documentation(fetcher: &GitHubFetcher, url: &str, max_length: usize) -> String {
    tracing::info!("Reading Amplify documentation from: {url}");

    let max_length = if max_length == 0 {
        DEFAULT_CONTENT_LENGTH
    } else {
        max_length.min(MAX_CONTENT_LENGTH)
    };

    let content = if url.contains("raw.githubusercontent.com") {
        fetcher.raw_content(url).await
    } else if url.contains("github.com") && url.contains("/blob/") {
        let raw_url = url
            .replace("github.com", "raw.githubusercontent.com")
            .replace("/blob/", "/");
        fetcher.raw_content(&raw_url).await
    } else if url.contains("github.com") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() >= 8 {
            let repo = format!("{}/{}", parts[3], parts[4]);
            let path = parts[7..].join("/");
            fetcher.file_content(&repo, &path, "main").await
        } else {
            return format!("Error: Unable to parse URL format: {url}");
        }
    } else {
        return format!("Error: Unable to parse URL format: {url}");
    };

    let Some(original) = content else {
        return format!("Error: Could not fetch content from {url}");
    };

    let doc = DocumentationContent::truncate(url, markdown_title(&original), &original, max_length);
    format_documentation_content(&doc, original.chars().count())
}

fn format_documentation_content(doc: &DocumentationContent, original_length: usize) -> String {
    let mut out = String::from("# Amplify Documentation Content\n\n");
    out.push_str(&format!("**Source:** {}\n", doc.url));
    if let Some(title) = &doc.title {
        out.push_str(&format!("**Title:** {title}\n"));
    }
    out.push('\n');
    out.push_str(&doc.content);
    if doc.truncated {
        out.push_str(&format!(
            "\n\n... (truncated, {} more characters available)",
            original_length - doc.content_length
        ));
    }
    out.push_str("\n\n---\n*Content from official AWS Amplify documentation repository*\n");
    out
}

/// First H1 heading of a markdown document, if any.
fn markdown_title(content: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level: HeadingLevel::H1, .. }) => in_heading = true,
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
                title.clear();
            }
            _ => {}
        }
    }
    None
}

/// Documentation block for a topic: the top search hit's content plus links
/// to the runners-up.
async fn topic_documentation(fetcher: &GitHubFetcher, topic: &str) -> String {
    let entries = fetcher.repository_tree(DOCUMENTATION_REPO).await;
    let doc_results = search_tree(&entries, topic, 5);

    let Some(top) = doc_results.first() else {
        return format!("No documentation found for topic: {topic}");
    };

    let Some(content) = fetcher.raw_content(&top.raw_url).await else {
        return format!("Could not fetch content for topic: {topic}");
    };

    let (mut content, truncated) = truncate_chars(&content, GUIDANCE_DOC_LENGTH);
    if truncated {
        content.push_str("\n\n... (content truncated)");
    }

    let mut out = format!(
        "# {} Documentation\n\n**Source:** {}\n\n{content}\n",
        capitalize(topic),
        top.url
    );

    if doc_results.len() > 1 {
        out.push_str("\n## Related Documentation\n\n");
        for result in doc_results.iter().skip(1).take(2) {
            out.push_str(&format!("- [{}]({})\n", result.title, result.url));
        }
    }

    out
}

/// Sample-code block for a feature: the top three matching template files
/// with their fetched contents fenced by inferred language.
async fn sample_code(fetcher: &GitHubFetcher, feature: &str, framework: &str) -> String {
    let samples = search_sample_repositories(fetcher, feature, Some(framework)).await;

    if samples.is_empty() {
        return format!("No sample code found for {feature} in {framework}");
    }

    let mut out = format!(
        "## Sample Code Examples\n\n**Feature:** {feature}\n**Framework:** {}\n\n",
        capitalize(framework)
    );

    for (i, sample) in samples.iter().take(3).enumerate() {
        let Some(content) = fetcher
            .file_content(&sample.repository, &sample.path, "main")
            .await
        else {
            continue;
        };

        let (mut content, truncated) = truncate_chars(&content, GUIDANCE_CODE_LENGTH);
        if truncated {
            content.push_str("\n\n... (code truncated)");
        }

        out.push_str(&format!(
            "### {}. {}\n\n**Repository:** https://github.com/{}\n**File:** {}\n\n\
             ```{}\n{content}\n```\n\n",
            i + 1,
            sample.title,
            sample.repository,
            sample.path,
            file_language(&sample.path),
        ));
    }

    out
}

/// Fence language for a file path, for syntax highlighting.
fn file_language(path: &str) -> &str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "ts" => "typescript",
        "tsx" => "tsx",
        "js" => "javascript",
        "jsx" => "jsx",
        "vue" => "vue",
        "md" => "markdown",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        other => other,
    }
}

fn sample_repo(framework: &str) -> &'static str {
    SAMPLE_REPOSITORIES
        .iter()
        .find(|(name, _)| *name == framework)
        .map(|(_, repo)| *repo)
        .unwrap_or("aws-samples/amplify-vite-react-template")
}

/// Guidance on a development topic: official documentation plus sample code
/// plus the static resources footer.
pub async fn guidance(fetcher: &GitHubFetcher, topic: &str) -> String {
    tracing::info!("Getting guidance on Amplify Gen2 topic: {topic}");

    let documentation = topic_documentation(fetcher, topic).await;
    let samples = sample_code(fetcher, topic, "react").await;

    format!(
        "{documentation}\n\n{samples}\n\n\
         ## Additional Resources\n\n\
         **Official Documentation:** {AMPLIFY_DOCS_BASE}/react/build-a-backend/{topic}/\n\
         **Sample Repositories:**\n\
         - React Template: https://github.com/{}\n\
         - Next.js Template: https://github.com/{}\n\
         - Vue Template: https://github.com/{}\n\
         - Angular Template: https://github.com/{}\n\n\
         **Quick Start:**\n\
         ```bash\n\
         npm create amplify@latest my-amplify-app\n\
         cd my-amplify-app\n\
         npx ampx sandbox\n\
         ```\n",
        sample_repo("react"),
        sample_repo("next"),
        sample_repo("vue"),
        sample_repo("angular"),
    )
}

/// Code generation guidance for a feature/framework pair.
pub async fn generate_code(fetcher: &GitHubFetcher, feature: &str, framework: &str) -> String {
    tracing::info!("Generating Amplify Gen2 code for feature: {feature} with framework: {framework}");

    let framework_lower = framework.to_lowercase();
    let documentation = topic_documentation(fetcher, feature).await;
    let samples = sample_code(fetcher, feature, &framework_lower).await;

    format!(
        "# Amplify Gen2 {} Implementation for {}\n\n\
         {documentation}\n\n{samples}\n\n\
         ## Implementation Steps\n\n\
         1. **Create New Amplify Project:**\n\
         \x20  ```bash\n\
         \x20  npm create amplify@latest my-{feature}-app\n\
         \x20  cd my-{feature}-app\n\
         \x20  ```\n\n\
         2. **Install Dependencies:**\n\
         \x20  ```bash\n\
         \x20  npm install\n\
         \x20  ```\n\n\
         3. **Start Development Environment:**\n\
         \x20  ```bash\n\
         \x20  npx ampx sandbox\n\
         \x20  ```\n\n\
         4. **Deploy to Production:**\n\
         \x20  ```bash\n\
         \x20  npx ampx deploy\n\
         \x20  ```\n\n\
         ## Additional Resources\n\n\
         **Framework-Specific Templates:**\n\
         - React: https://github.com/{}\n\
         - Next.js: https://github.com/{}\n\
         - Vue: https://github.com/{}\n\
         - Angular: https://github.com/{}\n\n\
         **Official Documentation:** {AMPLIFY_DOCS_BASE}/{framework_lower}/build-a-backend/{feature}/\n",
        capitalize(feature),
        capitalize(framework),
        sample_repo("react"),
        sample_repo("next"),
        sample_repo("vue"),
        sample_repo("angular"),
    )
}

/// Best-practice guide lookup. Unknown areas get a readable "not available
/// yet" message naming two valid areas.
pub fn best_practices(area: &str) -> String {
    tracing::info!("Getting best practices for Amplify Gen2 area: {area}");

    match guides::best_practices_guide(area) {
        Some(guide) => guide.to_string(),
        None => format!(
            "Best practices for '{area}' are not available yet. \
             Please try areas like 'authentication' or 'data_modeling'."
        ),
    }
}

/// Troubleshooting guidance. The first keyword of the ordered mapping found
/// in the issue string selects both the static guide and the live
/// documentation topic appended beneath it.
pub async fn troubleshoot(fetcher: &GitHubFetcher, issue: &str) -> String {
    tracing::info!("Troubleshooting Amplify Gen2 issue: {issue}");

    let issue_lower = issue.to_lowercase();
    let topic = ISSUE_TOPIC_MAP
        .iter()
        .find(|(keyword, _)| issue_lower.contains(keyword))
        .map(|(_, topic)| *topic);

    if let Some(topic) = topic {
        let mut out = guides::troubleshooting_guide(topic).unwrap_or_default().to_string();
        let docs = topic_documentation(fetcher, topic).await;
        out.push_str(&format!("\n## Official Documentation\n{docs}\n"));
        return out;
    }

    format!(
        "# General Amplify Gen2 Troubleshooting\n\n\
         ## Issue: {issue}\n\n\
         ### General Debugging Steps:\n\n\
         1. **Check System Status:**\n\
         \x20  ```bash\n\
         \x20  npx ampx status\n\
         \x20  npx ampx logs\n\
         \x20  ```\n\n\
         2. **Regenerate Client Code:**\n\
         \x20  ```bash\n\
         \x20  npx ampx generate graphql-client-code\n\
         \x20  ```\n\n\
         3. **Check AWS Console:**\n\
         \x20  - CloudFormation stacks\n\
         \x20  - Cognito User Pools\n\
         \x20  - AppSync APIs\n\
         \x20  - S3 buckets\n\n\
         ### Common Issue Categories:\n\
         - **deployment** - Build and deployment problems\n\
         - **authentication** - Sign-in, sign-up, and auth issues\n\
         - **data** - GraphQL, schema, and database issues\n\
         - **storage** - File upload, download, and access issues\n\n\
         ### Getting Help:\n\
         - Visit: {AMPLIFY_DOCS_BASE}/react/\n\
         - GitHub Issues: https://github.com/aws-amplify/amplify-js/issues\n\
         - Discord Community: https://discord.gg/amplify\n"
    )
}

/// Discover the project templates and render the full report with grouped
/// file listings and the feature comparison table.
pub async fn discover_templates(fetcher: &GitHubFetcher, framework: Option<&str>) -> String {
    tracing::info!(
        "Discovering Amplify project templates for framework: {}",
        framework.unwrap_or("all")
    );

    let templates = discover_project_templates(fetcher, framework).await;
    if templates.is_empty() {
        return "No project templates found.".to_string();
    }
    format_templates_report(&templates)
}

/// Render the template discovery report. Pure.
pub fn format_templates_report(templates: &[crate::model::ProjectTemplate]) -> String {
    let plural = if templates.len() != 1 { "s" } else { "" };
    let mut out = format!(
        "# Amplify Gen2 Project Templates\n\n**Available Templates:** {} framework{plural}\n\n",
        templates.len()
    );

    for template in templates {
        let features = if template.key_features.is_empty() {
            "Standard Amplify Gen2 setup".to_string()
        } else {
            template.key_features.join(", ")
        };

        out.push_str(&format!(
            "## {} Template\n\n\
             **Repository:** [{}]({})\n\
             **Key Features:** {features}\n\n\
             ### Available Files ({})\n\n",
            template.framework.to_uppercase(),
            template.repository,
            template.github_url,
            template.available_files.len(),
        ));

        let mut config_files = Vec::new();
        let mut amplify_files = Vec::new();
        let mut source_files = Vec::new();
        for entry in &template.available_files {
            if entry.0.starts_with("amplify/") {
                amplify_files.push(entry);
            } else if entry.0 == "package.json" || entry.0 == "README.md" {
                config_files.push(entry);
            } else {
                source_files.push(entry);
            }
        }

        for (label, group) in [
            ("Configuration Files", &config_files),
            ("Amplify Backend Files", &amplify_files),
            ("Source Files", &source_files),
        ] {
            if group.is_empty() {
                continue;
            }
            out.push_str(&format!("**{label}:**\n"));
            for (path, info) in group {
                out.push_str(&format!(
                    "- `{path}` - {} ({} bytes)\n",
                    info.description, info.size
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "### Quick Start\n\n\
             ```bash\n\
             # Clone the template\n\
             git clone https://github.com/{}.git my-amplify-app\n\
             cd my-amplify-app\n\n\
             # Install dependencies\n\
             npm install\n\n\
             # Deploy the backend\n\
             npx ampx sandbox\n\n\
             # Start development server\n\
             npm run dev\n\
             ```\n\n\
             **Template URL:** {}\n\n---\n\n",
            template.repository, template.github_url,
        ));
    }

    out.push_str(guides::TEMPLATE_GETTING_STARTED);

    for template in templates {
        let has = |needle: &str| {
            template
                .key_features
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
        };
        let mark = |yes: bool| if yes { "✅" } else { "📋" };
        out.push_str(&format!(
            "\n| {} | {} | {} | {} | {} | {} |",
            capitalize(&template.framework),
            mark(has("auth")),
            mark(has("backend")),
            mark(has("storage")),
            mark(template.framework == "ai"),
            mark(has("ui")),
        ));
    }

    out.push_str(guides::TEMPLATE_FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_title_finds_first_h1() {
        assert_eq!(
            markdown_title("# Set Up Auth\n\nbody text\n## Later"),
            Some("Set Up Auth".to_string())
        );
        assert_eq!(markdown_title("no headings here"), None);
    }

    #[test]
    fn file_language_mapping() {
        assert_eq!(file_language("amplify/backend.ts"), "typescript");
        assert_eq!(file_language("src/App.tsx"), "tsx");
        assert_eq!(file_language("config.yml"), "yaml");
        assert_eq!(file_language("notes.rst"), "rst");
    }

    #[test]
    fn unknown_best_practices_area_names_alternatives() {
        let text = best_practices("quantum_networking");
        assert!(text.contains("quantum_networking"));
        assert!(text.contains("not available yet"));
        assert!(text.contains("authentication"));
        assert!(text.contains("data_modeling"));
    }
}
