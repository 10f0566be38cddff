use std::sync::Arc;

use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use serde::Deserialize;

use rmcp::{Error as McpError, ServerHandler, schemars, tool};

use crate::cloudscape;
use crate::cloudscape::demos::DemoRepo;
use crate::cloudscape::docs::DocSearcher;
use crate::search::clamp_limit;

/// MCP tool surface for the Cloudscape Design System server. Documentation
/// tools crawl the public site per call; demo tools search the snapshot
/// extracted at startup.
#[derive(Clone)]
pub struct CloudscapeTools {
    searcher: Arc<DocSearcher>,
    demos: Arc<DemoRepo>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsRequest {
    #[schemars(description = "the search query for Cloudscape documentation")]
    pub query: String,

    #[schemars(description = "the maximum number of results to return", default)]
    pub max_results: i32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComponentDocsRequest {
    #[schemars(description = "the component name, e.g. 'table' or 'button'")]
    pub component_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DesignTokensRequest {
    #[schemars(description = "optional token category filter, e.g. 'color' or 'spacing'")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDemosRequest {
    #[schemars(description = "the search query for demo applications")]
    pub query: String,

    #[schemars(description = "the maximum number of results to return", default)]
    pub max_results: i32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DemoImplementationRequest {
    #[schemars(description = "the demo name or file path fragment to look up")]
    pub demo_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CodePatternsRequest {
    #[schemars(description = "optional component name to restrict the pattern search")]
    pub component: Option<String>,
}

#[tool(tool_box)]
impl CloudscapeTools {
    pub fn new(searcher: DocSearcher, demos: DemoRepo) -> Self {
        Self {
            searcher: Arc::new(searcher),
            demos: Arc::new(demos),
        }
    }

    #[tool(description = "Search the Cloudscape Design System documentation site")]
    async fn search_cloudscape_documentation(
        &self,
        #[tool(aggr)] SearchDocsRequest { query, max_results }: SearchDocsRequest,
    ) -> Result<CallToolResult, McpError> {
        let results = self.searcher.search(&query, clamp_limit(max_results)).await;
        let report = cloudscape::format_doc_results(&query, &results);
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Get detailed documentation for a specific Cloudscape component")]
    async fn get_component_documentation(
        &self,
        #[tool(aggr)] ComponentDocsRequest { component_name }: ComponentDocsRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = match self.searcher.component_docs(&component_name).await {
            Some(info) => cloudscape::format_component_info(&info),
            None => format!("No documentation found for component: {component_name}"),
        };
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "List Cloudscape design tokens, optionally filtered by category")]
    async fn get_design_tokens(
        &self,
        #[tool(aggr)] DesignTokensRequest { category }: DesignTokensRequest,
    ) -> Result<CallToolResult, McpError> {
        let tokens = self.searcher.design_tokens(category.as_deref()).await;
        let report = cloudscape::format_design_tokens(category.as_deref(), &tokens);
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Search the Cloudscape demo applications for implementation examples")]
    async fn search_cloudscape_demos(
        &self,
        #[tool(aggr)] SearchDemosRequest { query, max_results }: SearchDemosRequest,
    ) -> Result<CallToolResult, McpError> {
        let results = self.demos.search(&query, clamp_limit(max_results));
        let report = cloudscape::format_demo_results(&query, &results);
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Get the full implementation of a specific Cloudscape demo")]
    async fn get_demo_implementation(
        &self,
        #[tool(aggr)] DemoImplementationRequest { demo_name }: DemoImplementationRequest,
    ) -> Result<CallToolResult, McpError> {
        let report = match self.demos.implementation(&demo_name) {
            Some(demo) => cloudscape::format_demo_implementation(&demo),
            None => format!("No demo found matching: {demo_name}"),
        };
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Find common Cloudscape code patterns, optionally for one component")]
    async fn get_code_patterns(
        &self,
        #[tool(aggr)] CodePatternsRequest { component }: CodePatternsRequest,
    ) -> Result<CallToolResult, McpError> {
        let patterns = self.demos.patterns(component.as_deref());
        let report = cloudscape::format_demo_patterns(component.as_deref(), &patterns);
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

#[tool(tool_box)]
impl ServerHandler for CloudscapeTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server provides Cloudscape Design System reference material. Use \
                 'search_cloudscape_documentation' to search the documentation site, \
                 'get_component_documentation' for one component, 'get_design_tokens' for \
                 design tokens, 'search_cloudscape_demos' to find demo applications, \
                 'get_demo_implementation' to read a full demo, and 'get_code_patterns' \
                 for common implementation patterns."
                    .to_string(),
            ),
        }
    }
}
