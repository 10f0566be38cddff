use anyhow::Result;
use awsdocs_mcp::fetch::GitHubFetcher;
use awsdocs_mcp::server::AmplifyTools;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    /// A github personal access token to use for authentication (optional)
    #[clap(long)]
    github_pat: Option<String>,
}

/// You can inspect the server using the Model Context Protocol Inspector.
/// npx @modelcontextprotocol/inspector cargo run --bin amplify-gen2-mcp

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Log to a file so stdout stays clean for the stdio transport.
    #[cfg(feature = "trace")]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::fs::File::create("amplify-gen2-mcp.log")?)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Amplify Gen2 MCP server");

    let fetcher = GitHubFetcher::new(args.github_pat.as_deref())?;

    let service = AmplifyTools::new(fetcher)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
