use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use serde::Deserialize;

use rmcp::{Error as McpError, ServerHandler, schemars, tool};

use crate::amplify;
use crate::fetch::GitHubFetcher;
use crate::search::clamp_limit;

/// MCP tool surface for the Amplify Gen2 guidance server. Every tool
/// returns a markdown report; fetch failures are rendered as readable
/// text in the report rather than protocol errors.
#[derive(Clone)]
pub struct AmplifyTools {
    fetcher: GitHubFetcher,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocumentationRequest {
    #[schemars(description = "the search query for Amplify Gen2 documentation")]
    pub query: String,

    #[schemars(description = "the maximum number of results to return", default)]
    pub limit: i32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadDocumentationRequest {
    #[schemars(description = "the GitHub URL of the documentation file to read")]
    pub url: String,

    #[schemars(description = "the maximum number of characters to return", default)]
    pub max_length: i32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GuidanceRequest {
    #[schemars(description = "the development topic, e.g. 'auth', 'data' or 'storage'")]
    pub topic: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateCodeRequest {
    #[schemars(description = "the feature to implement, e.g. 'auth' or 'storage'")]
    pub feature: String,

    #[schemars(description = "the frontend framework, e.g. 'react', 'vue' or 'angular'")]
    pub framework: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BestPracticesRequest {
    #[schemars(description = "the practice area, e.g. 'authentication' or 'data_modeling'")]
    pub area: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TroubleshootRequest {
    #[schemars(description = "a description of the issue being debugged")]
    pub issue: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DiscoverTemplatesRequest {
    #[schemars(description = "optional framework filter, e.g. 'react', 'next' or 'vue'")]
    pub framework: Option<String>,
}

#[tool(tool_box)]
impl AmplifyTools {
    pub fn new(fetcher: GitHubFetcher) -> Self {
        Self { fetcher }
    }

    #[tool(description = "Search AWS Amplify Gen2 documentation and sample repositories")]
    async fn search_amplify_gen2_documentation(
        &self,
        #[tool(aggr)] SearchDocumentationRequest { query, limit }: SearchDocumentationRequest,
    ) -> Result<CallToolResult, McpError> {
        let report =
            amplify::search_documentation(&self.fetcher, &query, clamp_limit(limit)).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Read the content of an Amplify documentation file from its GitHub URL")]
    async fn read_amplify_documentation(
        &self,
        #[tool(aggr)] ReadDocumentationRequest { url, max_length }: ReadDocumentationRequest,
    ) -> Result<CallToolResult, McpError> {
        let max_length = max_length.max(0) as usize;
        let report = amplify::read_documentation(&self.fetcher, &url, max_length).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Get guidance on an Amplify Gen2 development topic with docs and samples")]
    async fn get_amplify_gen2_guidance(
        &self,
        #[tool(aggr)] GuidanceRequest { topic }: GuidanceRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = amplify::guidance(&self.fetcher, &topic).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Generate Amplify Gen2 implementation guidance for a feature and framework")]
    async fn generate_amplify_gen2_code(
        &self,
        #[tool(aggr)] GenerateCodeRequest { feature, framework }: GenerateCodeRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = amplify::generate_code(&self.fetcher, &feature, &framework).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Get Amplify Gen2 best practices for a development area")]
    async fn get_amplify_gen2_best_practices(
        &self,
        #[tool(aggr)] BestPracticesRequest { area }: BestPracticesRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = amplify::best_practices(&area);
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Troubleshoot a described Amplify Gen2 issue")]
    async fn troubleshoot_amplify_gen2(
        &self,
        #[tool(aggr)] TroubleshootRequest { issue }: TroubleshootRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = amplify::troubleshoot(&self.fetcher, &issue).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Discover official Amplify Gen2 project templates, optionally per framework")]
    async fn discover_project_templates(
        &self,
        #[tool(aggr)] DiscoverTemplatesRequest { framework }: DiscoverTemplatesRequest,
    ) -> Result<CallToolResult, McpError> {
        let report =
            amplify::discover_templates(&self.fetcher, framework.as_deref()).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

#[tool(tool_box)]
impl ServerHandler for AmplifyTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server provides AWS Amplify Gen2 development guidance. Use \
                 'search_amplify_gen2_documentation' to search the official docs and sample \
                 repositories, 'read_amplify_documentation' to read a specific file, \
                 'get_amplify_gen2_guidance' or 'generate_amplify_gen2_code' for topic and \
                 feature guidance, 'get_amplify_gen2_best_practices' for curated guides, \
                 'troubleshoot_amplify_gen2' for debugging help, and \
                 'discover_project_templates' to explore the starter templates."
                    .to_string(),
            ),
        }
    }
}
