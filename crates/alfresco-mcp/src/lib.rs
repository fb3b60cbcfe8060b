//! MCP Server for Alfresco Content Services
//!
//! This crate exposes a small slice of an Alfresco repository via the Model
//! Context Protocol so agent hosts (Claude Desktop and similar) can search
//! for documents and read their content.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ alfresco-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ alfresco-client (REST client) ]
//!        |
//!        +--> GET  /nodes/{id}            (metadata)
//!        +--> GET  /nodes/{id}/content    (download)
//!        +--> POST /search                (AFTS query)
//! ```
//!
//! # Tools
//!
//! - `search` - full-text search, restricted to content nodes
//! - `readContent` - read a file's content as text by `alfresco://` URI
//!
//! # Resources
//!
//! Nodes are addressed directly as `alfresco://{nodeId}` resources; reading
//! one returns its content base64-encoded with the repository's declared
//! MIME type. Folders short-circuit to a plain-text placeholder.

pub mod error;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::AlfrescoMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, tool_definitions};

/// URI scheme prefixing every node reference exchanged with the MCP host.
pub const URI_SCHEME: &str = "alfresco://";

/// Strip the `alfresco://` scheme from a URI, yielding the opaque node id.
///
/// A URI without the scheme is passed through unchanged.
pub fn node_id(uri: &str) -> &str {
    uri.strip_prefix(URI_SCHEME).unwrap_or(uri)
}
