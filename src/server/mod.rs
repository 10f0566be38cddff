/// Amplify Gen2 MCP tools
pub mod amplify;
/// Cloudscape Design System MCP tools
pub mod cloudscape;

pub use amplify::AmplifyTools;
pub use cloudscape::CloudscapeTools;
