//! # AWS Docs MCP Servers
//!
//! Two Model-Context-Protocol (MCP) servers that give an LLM live access to
//! AWS frontend documentation: one for AWS Amplify Gen2 development guidance
//! and one for the Cloudscape Design System.
//!
//! ## Features
//!
//! - Search the official Amplify documentation repository and sample templates
//! - Read documentation files and generate topic or feature guidance
//! - Crawl the Cloudscape documentation site for components and design tokens
//! - Search a local snapshot of the Cloudscape demo applications
//!
//! ## Modules
//!
//! - `server`: MCP server implementations and tools
//! - `amplify`: Amplify Gen2 search, guidance and troubleshooting pipeline
//! - `cloudscape`: Cloudscape site crawling and demos snapshot pipeline
//! - `fetch`: GitHub API integration
//! - `search`: relevance scoring shared by both pipelines

/// Server implementations and MCP tools
pub mod server;
/// Amplify Gen2 pipeline
pub mod amplify;
/// Cloudscape Design System pipeline
pub mod cloudscape;
/// GitHub content fetching
pub mod fetch;
/// Relevance scoring and ranking
pub mod search;
/// Shared value objects
pub mod model;
/// Fixed configuration
pub mod consts;
