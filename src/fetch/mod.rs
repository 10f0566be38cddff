//! GitHub content fetching.
//!
//! All lookup methods swallow transport and payload errors: a failed fetch
//! yields `None` (or an empty listing) and a log line, never an `Err`. One
//! unreachable file costs one candidate, not the whole search.

use anyhow::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::consts::{FETCH_TIMEOUT_SECS, GITHUB_API_BASE, USER_AGENT};
use crate::model::TreeEntry;

#[derive(Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
}

/// Fetches repository listings and file contents from GitHub.
#[derive(Clone)]
pub struct GitHubFetcher {
    client: Arc<Octocrab>,
    http: reqwest::Client,
}

impl GitHubFetcher {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            if token.trim().is_empty() {
                anyhow::bail!("Personal access token cannot be empty");
            }
            tracing::info!("Using personal access token for GitHub API");
            builder = builder.personal_token(token);
        }
        let client = builder.build()?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            http,
        })
    }

    /// Recursive tree listing for the default branch of `repo`
    /// ("owner/name"). Empty on any failure.
    pub async fn repository_tree(&self, repo: &str) -> Vec<TreeEntry> {
        let url = format!("{GITHUB_API_BASE}/repos/{repo}/git/trees/main?recursive=1");

        let response = match self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to list tree for {repo}: {e}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Tree listing for {repo} returned {}", response.status());
            return Vec::new();
        }

        match response.json::<TreeResponse>().await {
            Ok(data) => data.tree,
            Err(e) => {
                tracing::warn!("Malformed tree payload for {repo}: {e}");
                Vec::new()
            }
        }
    }

    /// File content via the contents endpoint, decoding the base64 payload.
    /// `None` on 404, transport failure or malformed encoding.
    pub async fn file_content(&self, repo: &str, path: &str, branch: &str) -> Option<String> {
        let (owner, name) = repo.split_once('/')?;

        let content = match self
            .client
            .repos(owner, name)
            .get_content()
            .path(path)
            .r#ref(branch)
            .send()
            .await
        {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Could not fetch {repo}/{path}: {e}");
                return None;
            }
        };

        let file = content.items.first()?;
        let encoded = file.content.as_ref()?;
        match STANDARD.decode(encoded.replace('\n', "")) {
            Ok(decoded) => match String::from_utf8(decoded) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!("Non-UTF8 content at {repo}/{path}: {e}");
                    None
                }
            },
            Err(e) => {
                tracing::debug!("Bad base64 content at {repo}/{path}: {e}");
                None
            }
        }
    }

    /// Plain GET of a raw URL. `None` on any non-200 or network failure.
    pub async fn raw_content(&self, raw_url: &str) -> Option<String> {
        let response = match self.http.get(raw_url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch {raw_url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("{raw_url} returned {}", response.status());
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to read body from {raw_url}: {e}");
                None
            }
        }
    }
}
