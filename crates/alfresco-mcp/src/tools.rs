//! MCP Tool definitions and handlers
//!
//! Two tools are exposed:
//!
//! - `search` - AFTS full-text search over content nodes
//! - `readContent` - read a file's content as text by `alfresco://` URI
//!
//! `readContent` decodes the body as UTF-8 text and will mangle binary
//! payloads; the resource-read path in [`crate::resources`] is the
//! binary-safe alternative (base64 blob with the declared MIME type).

use alfresco_client::{AlfrescoClient, SearchOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result, URI_SCHEME, node_id};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// Content blocks carried by a tool result
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Wrap text in a single successful content block.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: false,
        }
    }
}

/// The static tool catalogue.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "search".to_string(),
            description: "Advanced Alfresco file search".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Full-text search query"
                    },
                    "maxItems": {
                        "type": "number",
                        "description": "Maximum search results"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "readContent".to_string(),
            description: "Read file content by Alfresco URI".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "fileUri": {
                        "type": "string",
                        "description": "Alfresco file URI"
                    }
                },
                "required": ["fileUri"]
            }),
        },
    ]
}

/// Dispatch a tool call by name.
///
/// Unknown names fail with [`Error::UnknownTool`] before any HTTP call.
pub async fn handle_tool_call(
    client: &AlfrescoClient,
    tool_name: &str,
    arguments: Value,
) -> Result<ToolResult> {
    match tool_name {
        "search" => handle_search(client, arguments).await,
        "readContent" => handle_read_content(client, arguments).await,
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Arguments for the `search` tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchArgs {
    query: String,
    #[serde(default)]
    max_items: Option<u32>,
}

/// One search hit as presented to the MCP host
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    uri: String,
    mime_type: String,
    name: String,
}

async fn handle_search(client: &AlfrescoClient, arguments: Value) -> Result<ToolResult> {
    let args: SearchArgs = parse_args(arguments)?;
    debug!(query = %args.query, "handling search tool call");

    let response = client
        .search_nodes(
            &args.query,
            SearchOptions {
                max_items: args.max_items,
                skip_count: None,
            },
        )
        .await?;

    let (entries, total_items) = match response.list {
        Some(list) => (list.entries, list.pagination.total_items),
        None => (Vec::new(), 0),
    };

    let hits: Vec<SearchHit> = entries
        .into_iter()
        .map(|item| SearchHit {
            uri: format!("{URI_SCHEME}{}", item.entry.id),
            mime_type: item.entry.mime_type().to_string(),
            name: item.entry.name,
        })
        .collect();

    Ok(ToolResult::text(format!(
        "Found {total_items} items:\n{}",
        serde_json::to_string_pretty(&hits)?
    )))
}

/// Arguments for the `readContent` tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadContentArgs {
    file_uri: String,
}

async fn handle_read_content(client: &AlfrescoClient, arguments: Value) -> Result<ToolResult> {
    let args: ReadContentArgs = parse_args(arguments)?;
    let id = node_id(&args.file_uri);
    debug!(node_id = %id, "handling readContent tool call");

    let response = client.download_node_content(id).await?;
    let text = response.text().await.map_err(alfresco_client::Error::from)?;

    Ok(ToolResult::text(text))
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })
}
