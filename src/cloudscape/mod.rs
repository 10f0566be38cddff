//! Cloudscape Design System pipeline: site crawling plus the demos
//! snapshot, and the markdown reports built from both.

pub mod demos;
pub mod docs;

use crate::consts::CLOUDSCAPE_DEMOS_REPO_URL;
use crate::model::{CloudscapeDemoResult, CloudscapeDocResult, ComponentInfo, DesignToken};

/// Characters of page content shown per documentation search hit.
const DOC_DISPLAY_LENGTH: usize = 500;
/// Characters of code shown per demo search hit.
const DEMO_DISPLAY_LENGTH: usize = 1000;
/// Characters shown per component code example.
const EXAMPLE_DISPLAY_LENGTH: usize = 800;

fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

pub fn format_doc_results(query: &str, results: &[CloudscapeDocResult]) -> String {
    if results.is_empty() {
        return format!("No documentation found for query: {query}");
    }

    let mut report = format!("# Cloudscape Documentation Search Results for '{query}'\n\n");
    for (i, result) in results.iter().enumerate() {
        report.push_str(&format!("## {}. {}\n\n", i + 1, result.title));
        report.push_str(&format!("**URL:** {}\n\n", result.url));
        if let Some(component_type) = &result.component_type {
            report.push_str(&format!("**Component:** {component_type}\n\n"));
        }
        report.push_str(&preview(&result.content, DOC_DISPLAY_LENGTH));
        report.push_str("\n\n---\n\n");
    }
    report
}

pub fn format_component_info(info: &ComponentInfo) -> String {
    let mut report = format!("# {} Component\n\n", info.name);
    report.push_str(&format!("## Description\n\n{}\n\n", info.description));

    if !info.props.is_empty() {
        report.push_str("## Properties\n\n");
        for prop in &info.props {
            report.push_str(&format!("- {prop}\n"));
        }
        report.push('\n');
    }

    if !info.examples.is_empty() {
        report.push_str("## Code Examples\n\n");
        for (i, example) in info.examples.iter().enumerate() {
            report.push_str(&format!("### Example {}\n\n", i + 1));
            report.push_str(&format!(
                "```jsx\n{}\n```\n\n",
                preview(example, EXAMPLE_DISPLAY_LENGTH)
            ));
        }
    }

    if !info.related_components.is_empty() {
        report.push_str("## Related Components\n\n");
        for related in &info.related_components {
            report.push_str(&format!("- {related}\n"));
        }
        report.push('\n');
    }

    report
}

pub fn format_design_tokens(category: Option<&str>, tokens: &[DesignToken]) -> String {
    if tokens.is_empty() {
        return match category {
            Some(category) => format!("No design tokens found for category: {category}"),
            None => "No design tokens found".to_string(),
        };
    }

    let mut report = String::from("# Cloudscape Design Tokens\n\n");

    // Tokens arrive grouped by page section; emit a heading whenever the
    // category changes.
    let mut current = None::<&str>;
    for token in tokens {
        if current != Some(token.category.as_str()) {
            report.push_str(&format!("## {}\n\n", token.category));
            current = Some(token.category.as_str());
        }
        report.push_str(&format!("- **{}**: `{}`", token.name, token.value));
        if let Some(description) = &token.description {
            report.push_str(&format!(" - {description}"));
        }
        report.push('\n');
    }

    report
}

pub fn format_demo_results(query: &str, results: &[CloudscapeDemoResult]) -> String {
    if results.is_empty() {
        return format!("No demos found for query: {query}");
    }

    let mut report = format!("# Cloudscape Demo Search Results for '{query}'\n\n");
    for (i, demo) in results.iter().enumerate() {
        report.push_str(&format!("## {}. {}\n\n", i + 1, demo.demo_name));
        report.push_str(&format!("**File:** `{}`\n\n", demo.file_path));
        report.push_str(&format!(
            "**Source:** {CLOUDSCAPE_DEMOS_REPO_URL}/blob/main/{}\n\n",
            demo.file_path
        ));
        if let Some(description) = &demo.description {
            report.push_str(&format!("**Description:** {description}\n\n"));
        }
        if !demo.components_used.is_empty() {
            report.push_str(&format!(
                "**Components Used:** {}\n\n",
                demo.components_used.join(", ")
            ));
        }
        report.push_str(&format!(
            "```tsx\n{}\n```\n\n---\n\n",
            preview(&demo.content, DEMO_DISPLAY_LENGTH)
        ));
    }
    report
}

pub fn format_demo_implementation(demo: &CloudscapeDemoResult) -> String {
    let mut report = format!("# {}\n\n", demo.demo_name);
    report.push_str(&format!("**File:** `{}`\n\n", demo.file_path));
    report.push_str(&format!(
        "**Source:** {CLOUDSCAPE_DEMOS_REPO_URL}/blob/main/{}\n\n",
        demo.file_path
    ));
    if let Some(description) = &demo.description {
        report.push_str(&format!("**Description:** {description}\n\n"));
    }
    if !demo.components_used.is_empty() {
        report.push_str(&format!(
            "**Components Used:** {}\n\n",
            demo.components_used.join(", ")
        ));
    }
    report.push_str(&format!("## Implementation\n\n```tsx\n{}\n```\n", demo.content));
    report
}

pub fn format_demo_patterns(component: Option<&str>, patterns: &[CloudscapeDemoResult]) -> String {
    if patterns.is_empty() {
        return match component {
            Some(component) => format!("No code patterns found for component: {component}"),
            None => "No code patterns found".to_string(),
        };
    }

    let mut report = match component {
        Some(component) => format!("# Code Patterns for '{component}'\n\n"),
        None => String::from("# Cloudscape Code Patterns\n\n"),
    };

    for (i, demo) in patterns.iter().enumerate() {
        report.push_str(&format!("## {}. `{}`\n\n", i + 1, demo.file_path));
        if !demo.components_used.is_empty() {
            report.push_str(&format!(
                "**Components Used:** {}\n\n",
                demo.components_used.join(", ")
            ));
        }
        report.push_str(&format!(
            "```tsx\n{}\n```\n\n---\n\n",
            preview(&demo.content, DEMO_DISPLAY_LENGTH)
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_doc_results_render_notice() {
        let report = format_doc_results("table", &[]);
        assert_eq!(report, "No documentation found for query: table");
    }

    #[test]
    fn doc_results_are_numbered() {
        let results = vec![
            CloudscapeDocResult {
                title: "Table".to_string(),
                url: "https://cloudscape.design/components/table/".to_string(),
                content: "A table presents data.".to_string(),
                component_type: Some("table".to_string()),
            },
            CloudscapeDocResult {
                title: "Patterns".to_string(),
                url: "https://cloudscape.design/patterns/".to_string(),
                content: "Pattern guidance.".to_string(),
                component_type: None,
            },
        ];
        let report = format_doc_results("table", &results);
        assert!(report.contains("## 1. Table"));
        assert!(report.contains("## 2. Patterns"));
        assert!(report.contains("**Component:** table"));
    }

    #[test]
    fn token_report_groups_by_category() {
        let tokens = vec![
            DesignToken {
                name: "color-text-body".to_string(),
                value: "#16191f".to_string(),
                category: "Color".to_string(),
                description: None,
            },
            DesignToken {
                name: "space-s".to_string(),
                value: "8px".to_string(),
                category: "Spacing".to_string(),
                description: Some("Small gap".to_string()),
            },
        ];
        let report = format_design_tokens(None, &tokens);
        assert!(report.contains("## Color"));
        assert!(report.contains("## Spacing"));
        assert!(report.contains("`8px` - Small gap"));
    }

    #[test]
    fn empty_patterns_mention_component() {
        assert_eq!(
            format_demo_patterns(Some("table"), &[]),
            "No code patterns found for component: table"
        );
        assert_eq!(format_demo_patterns(None, &[]), "No code patterns found");
    }
}
