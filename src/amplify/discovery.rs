//! Project template discovery across the official sample repositories.
//!
//! Each framework's starter repository is probed for a fixed list of
//! well-known files; whatever exists is recorded with a short preview, and
//! `package.json` (when it parses) drives the key-feature inference. Probes
//! are sequential and fail-soft: an unreachable file is simply not listed.

use serde_json::Value;

use crate::consts::{KEY_TEMPLATE_FILES, PROJECT_TEMPLATE_FILES, SAMPLE_REPOSITORIES};
use crate::fetch::GitHubFetcher;
use crate::model::{ProjectTemplate, SampleResult, TemplateFileInfo};
use crate::search::{score_path, title_from_path};

/// Dependency names that mark a template feature, checked against the
/// `dependencies` table of a parsed `package.json`.
const FEATURE_DEPENDENCIES: &[(&str, &str)] = &[
    ("@aws-amplify/backend", "Amplify Gen2 Backend"),
    ("@aws-amplify/ui-react", "Amplify UI Components"),
    ("next", "Next.js Framework"),
    ("react", "React Framework"),
    ("vue", "Vue Framework"),
    ("@angular/core", "Angular Framework"),
];

/// Number of preview characters stored per probed file.
const PREVIEW_LENGTH: usize = 200;

/// Probe the sample repositories for their well-known files. A framework
/// filter narrows the set to one repository; "nextjs" is accepted as an
/// alias for "next". Unknown filters fall back to probing everything.
pub async fn discover_project_templates(
    fetcher: &GitHubFetcher,
    framework: Option<&str>,
) -> Vec<ProjectTemplate> {
    let filter = framework.map(|name| {
        let key = name.to_lowercase();
        if key == "nextjs" { "next".to_string() } else { key }
    });

    let repos: Vec<(&str, &str)> = match filter.as_deref() {
        Some(key) if SAMPLE_REPOSITORIES.iter().any(|(name, _)| *name == key) => {
            SAMPLE_REPOSITORIES
                .iter()
                .filter(|(name, _)| *name == key)
                .copied()
                .collect()
        }
        _ => SAMPLE_REPOSITORIES.to_vec(),
    };

    let mut templates = Vec::with_capacity(repos.len());

    for (framework_name, repo) in repos {
        let mut template = ProjectTemplate {
            framework: framework_name.to_string(),
            repository: repo.to_string(),
            github_url: format!("https://github.com/{repo}"),
            available_files: Vec::new(),
            key_features: Vec::new(),
        };

        for (file_path, description) in PROJECT_TEMPLATE_FILES {
            let url = format!("https://raw.githubusercontent.com/{repo}/main/{file_path}");
            let Some(content) = fetcher.raw_content(&url).await else {
                continue;
            };

            let preview = if content.chars().count() > PREVIEW_LENGTH {
                let cut: String = content.chars().take(PREVIEW_LENGTH).collect();
                format!("{cut}...")
            } else {
                content.clone()
            };

            template.available_files.push((
                file_path.to_string(),
                TemplateFileInfo {
                    description: description.to_string(),
                    size: content.len(),
                    url,
                    preview,
                },
            ));

            if *file_path == "package.json" {
                template.key_features = infer_key_features(&content);
            }
        }

        templates.push(template);
    }

    templates
}

/// Pull feature labels out of a `package.json`. Malformed JSON or a missing
/// dependencies table degrades to an empty list, never an error.
pub fn infer_key_features(package_json: &str) -> Vec<String> {
    let Ok(parsed) = serde_json::from_str::<Value>(package_json) else {
        tracing::debug!("Ignoring malformed package.json during feature inference");
        return Vec::new();
    };

    let Some(deps) = parsed.get("dependencies").and_then(Value::as_object) else {
        return Vec::new();
    };

    FEATURE_DEPENDENCIES
        .iter()
        .filter(|(dep, _)| deps.contains_key(*dep))
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Search the probed template files for query matches in their paths or
/// previews. Scores come from the path scorer with a fixed boost for the
/// central template files, and the sort is stable descending.
pub async fn search_sample_repositories(
    fetcher: &GitHubFetcher,
    query: &str,
    framework: Option<&str>,
) -> Vec<SampleResult> {
    let templates = discover_project_templates(fetcher, framework).await;
    let query_lower = query.to_lowercase();

    let mut results = Vec::new();
    for template in &templates {
        for (file_path, info) in &template.available_files {
            let matches = file_path.to_lowercase().contains(&query_lower)
                || info.preview.to_lowercase().contains(&query_lower);
            if !matches {
                continue;
            }

            let mut relevance_score = score_path(file_path, query);
            if KEY_TEMPLATE_FILES.contains(&file_path.as_str()) {
                relevance_score += 5.0;
            }

            results.push(SampleResult {
                framework: template.framework.clone(),
                repository: template.repository.clone(),
                path: file_path.clone(),
                url: format!(
                    "https://github.com/{}/blob/main/{}",
                    template.repository, file_path
                ),
                raw_url: format!(
                    "https://raw.githubusercontent.com/{}/main/{}",
                    template.repository, file_path
                ),
                title: format!(
                    "{} - {}",
                    capitalize(&template.framework),
                    title_from_path(file_path)
                ),
                relevance_score,
                description: info.description.clone(),
                size: info.size,
            });
        }
    }

    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_from_well_formed_package_json() {
        let pkg = r#"{
            "dependencies": {
                "@aws-amplify/backend": "^1.0.0",
                "react": "^18.0.0"
            }
        }"#;
        let features = infer_key_features(pkg);
        assert_eq!(features, vec!["Amplify Gen2 Backend", "React Framework"]);
    }

    #[test]
    fn malformed_package_json_yields_no_features() {
        assert!(infer_key_features("{not json").is_empty());
        assert!(infer_key_features("{}").is_empty());
        assert!(infer_key_features(r#"{"dependencies": 3}"#).is_empty());
    }

    #[test]
    fn capitalize_single_word() {
        assert_eq!(capitalize("react"), "React");
        assert_eq!(capitalize(""), "");
    }
}
