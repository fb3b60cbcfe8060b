//! Alfresco MCP Server
//!
//! A Model Context Protocol server exposing Alfresco Content Services search
//! and content retrieval to agent hosts like Claude Desktop.
//!
//! # Environment Variables
//!
//! - `ALFRESCO_HOST`: Alfresco base URL (required, validated as a URL)
//! - `ALFRESCO_USERNAME`: Basic-auth username (required)
//! - `ALFRESCO_PASSWORD`: Basic-auth password (required)
//! - `RUST_LOG`: Log verbosity (default: `alfresco_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;

use alfresco_client::{AlfrescoClient, Config};
use alfresco_mcp::AlfrescoMcpServer;

/// MCP server for Alfresco Content Services
#[derive(Parser)]
#[command(name = "alfresco-mcp")]
#[command(about = "MCP server for Alfresco Content Services")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alfresco_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %config.host, "Starting alfresco-mcp server");

    let client = AlfrescoClient::new(&config)?;
    let server = AlfrescoMcpServer::new(client);

    if let Err(e) = server.run().await {
        tracing::error!(error = %e, "Server terminated with an error");
        return Err(e.into());
    }

    Ok(())
}
