use awsdocs_mcp::amplify::guides;
use awsdocs_mcp::amplify::{format_search_report, format_templates_report};
use awsdocs_mcp::consts::ISSUE_TOPIC_MAP;
use awsdocs_mcp::model::{
    DocumentationContent, ProjectTemplate, SampleResult, SearchResult, TemplateFileInfo,
};

fn doc_result(rank: usize, path: &str, score: f64) -> SearchResult {
    SearchResult {
        rank_order: rank,
        title: format!("Title {rank}"),
        path: path.to_string(),
        url: format!("https://github.com/aws-amplify/docs/blob/main/{path}"),
        raw_url: format!("https://raw.githubusercontent.com/aws-amplify/docs/main/{path}"),
        repository: "aws-amplify/docs".to_string(),
        relevance_score: score,
    }
}

fn sample_result(path: &str) -> SampleResult {
    SampleResult {
        framework: "react".to_string(),
        repository: "aws-samples/amplify-vite-react-template".to_string(),
        path: path.to_string(),
        url: format!(
            "https://github.com/aws-samples/amplify-vite-react-template/blob/main/{path}"
        ),
        raw_url: format!(
            "https://raw.githubusercontent.com/aws-samples/amplify-vite-react-template/main/{path}"
        ),
        title: format!("React - {path}"),
        relevance_score: 10.0,
        description: "Authentication configuration".to_string(),
        size: 512,
    }
}

#[test]
fn test_search_report_with_results() {
    let docs = vec![doc_result(1, "docs/auth/setup.md", 17.0)];
    let samples = vec![sample_result("amplify/auth/resource.ts")];

    let report = format_search_report("auth", &docs, &samples);

    assert!(report.contains("**Query:** auth"));
    assert!(report.contains("**Found:** 1 documentation results, 1 code examples"));
    assert!(report.contains("### 1. Title 1"));
    assert!(report.contains("**Relevance Score:** 17.0"));
    assert!(report.contains("**Framework:** React"));
    // The static footer always closes the report.
    assert!(report.contains("Next Steps"));
}

#[test]
fn test_search_report_caps_displayed_samples() {
    let samples: Vec<_> = (0..7)
        .map(|i| sample_result(&format!("amplify/feature-{i}/resource.ts")))
        .collect();

    let report = format_search_report("auth", &[], &samples);

    // The header counts everything, the body renders at most five entries
    // and says so.
    assert!(report.contains("**Found:** 0 documentation results, 7 code examples"));
    assert_eq!(report.matches("**Framework:** React").count(), 5);
    assert!(report.contains("*Showing the top 5 of 7 code examples.*"));

    // No note when nothing was cut.
    let report = format_search_report("auth", &[], &samples[..3]);
    assert!(!report.contains("Showing the top"));
}

#[test]
fn test_search_report_empty_sections_render_notices() {
    let report = format_search_report("qzxv", &[], &[]);

    assert!(report.contains("**Found:** 0 documentation results, 0 code examples"));
    assert!(report.contains("No documentation results found."));
    assert!(report.contains("No code examples found."));
    // Both section headings survive even with nothing underneath.
    assert!(report.contains("## Official Documentation"));
    assert!(report.contains("## Code Examples"));
}

#[test]
fn test_issue_keywords_map_to_guides() {
    // Every topic the issue map points at has a troubleshooting guide.
    for (_, topic) in ISSUE_TOPIC_MAP {
        assert!(
            guides::troubleshooting_guide(topic).is_some(),
            "missing guide for topic {topic}"
        );
    }

    // Earlier keywords win: "deploy" appears before "auth" in the map, so an
    // issue mentioning both resolves to deployment.
    let issue = "auth fails after deploy";
    let topic = ISSUE_TOPIC_MAP
        .iter()
        .find(|(keyword, _)| issue.contains(keyword))
        .map(|(_, topic)| *topic);
    assert_eq!(topic, Some("deployment"));
}

#[test]
fn test_login_issue_resolves_to_authentication() {
    let issue = "users cannot login anymore";
    let topic = ISSUE_TOPIC_MAP
        .iter()
        .find(|(keyword, _)| issue.contains(keyword))
        .map(|(_, topic)| *topic)
        .unwrap();
    assert_eq!(topic, "authentication");

    let guide = guides::troubleshooting_guide(topic).unwrap();
    assert!(guide.contains("Sign-In/Sign-Up Failures"));
}

#[test]
fn test_best_practice_guides_known_areas() {
    assert!(guides::best_practices_guide("authentication").is_some());
    assert!(guides::best_practices_guide("DATA_MODELING").is_some());
    assert!(guides::best_practices_guide("blockchain").is_none());
}

#[test]
fn test_templates_report_groups_files() {
    let template = ProjectTemplate {
        framework: "react".to_string(),
        repository: "aws-samples/amplify-vite-react-template".to_string(),
        github_url: "https://github.com/aws-samples/amplify-vite-react-template".to_string(),
        available_files: vec![
            (
                "package.json".to_string(),
                TemplateFileInfo {
                    description: "Project configuration and dependencies".to_string(),
                    size: 420,
                    url: "https://raw.githubusercontent.com/aws-samples/amplify-vite-react-template/main/package.json".to_string(),
                    preview: "{}".to_string(),
                },
            ),
            (
                "amplify/auth/resource.ts".to_string(),
                TemplateFileInfo {
                    description: "Authentication configuration".to_string(),
                    size: 180,
                    url: "https://raw.githubusercontent.com/aws-samples/amplify-vite-react-template/main/amplify/auth/resource.ts".to_string(),
                    preview: "export const auth = defineAuth({});".to_string(),
                },
            ),
            (
                "src/main.tsx".to_string(),
                TemplateFileInfo {
                    description: "React main entry point".to_string(),
                    size: 90,
                    url: "https://raw.githubusercontent.com/aws-samples/amplify-vite-react-template/main/src/main.tsx".to_string(),
                    preview: "render();".to_string(),
                },
            ),
        ],
        key_features: vec![
            "Amplify Gen2 Backend".to_string(),
            "React Framework".to_string(),
        ],
    };

    let report = format_templates_report(&[template]);

    assert!(report.contains("**Available Templates:** 1 framework\n"));
    assert!(report.contains("## REACT Template"));
    assert!(report.contains("**Configuration Files:**"));
    assert!(report.contains("**Amplify Backend Files:**"));
    assert!(report.contains("**Source Files:**"));
    assert!(report.contains("- `package.json` - Project configuration and dependencies (420 bytes)"));
    assert!(report.contains("**Key Features:** Amplify Gen2 Backend, React Framework"));
    // The comparison table row marks the backend feature as present.
    assert!(report.contains("| React |"));
}

#[test]
fn test_documentation_content_truncation() {
    let original = "x".repeat(6000);
    let doc = DocumentationContent::truncate("https://example.test", None, &original, 5000);

    assert!(doc.truncated);
    assert_eq!(doc.content_length, 5000);
    assert_eq!(doc.content.chars().count(), 5000);

    let doc = DocumentationContent::truncate("https://example.test", None, "short", 5000);
    assert!(!doc.truncated);
    assert_eq!(doc.content, "short");
}
