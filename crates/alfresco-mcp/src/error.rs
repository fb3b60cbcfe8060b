//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the Alfresco REST client
    #[error(transparent)]
    Client(#[from] alfresco_client::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown tool requested
    #[error("Unsupported tool: {0}")]
    UnknownTool(String),

    /// Tool arguments did not match the declared input schema
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },
}
