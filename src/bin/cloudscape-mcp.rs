use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use awsdocs_mcp::cloudscape::demos::DemoRepo;
use awsdocs_mcp::cloudscape::docs::DocSearcher;
use awsdocs_mcp::consts::{CLOUDSCAPE_FETCH_TIMEOUT_SECS, USER_AGENT};
use awsdocs_mcp::server::CloudscapeTools;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    /// A local checkout of the demos repository to use instead of downloading
    /// the snapshot (optional)
    #[clap(long)]
    demos_dir: Option<PathBuf>,
}

/// You can inspect the server using the Model Context Protocol Inspector.
/// npx @modelcontextprotocol/inspector cargo run --bin cloudscape-mcp

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Log to a file so stdout stays clean for the stdio transport.
    #[cfg(feature = "trace")]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::fs::File::create("cloudscape-mcp.log")?)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Cloudscape MCP server");

    let searcher = DocSearcher::new()?;

    let demos = match &args.demos_dir {
        Some(dir) => {
            tracing::info!("Using local demos snapshot at {}", dir.display());
            DemoRepo::from_dir(dir)
        }
        None => {
            let client = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(CLOUDSCAPE_FETCH_TIMEOUT_SECS))
                .build()?;
            DemoRepo::fetch(&client).await
        }
    };

    if !demos.available() {
        tracing::warn!("Demos snapshot unavailable, demo tools will return empty results");
    }

    let service = CloudscapeTools::new(searcher, demos)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
