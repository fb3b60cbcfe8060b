//! MCP Server implementation
//!
//! Reads newline-delimited JSON-RPC 2.0 messages from stdin, dispatches each
//! one to a spawned task, and funnels responses to stdout through a channel
//! so in-flight operations never block each other. Logs go to stderr so they
//! never interleave with the protocol stream.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use alfresco_client::AlfrescoClient;

use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ReadResourceParams, ResourcesCapability,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::resources::read_resource;
use crate::tools::{ToolDefinition, handle_tool_call, tool_definitions};
use crate::{Error, Result};

/// MCP Server for Alfresco Content Services
///
/// Holds the shared read-only state (the authenticated REST client and the
/// static tool catalogue). Each inbound message is handled independently;
/// there is no mutable state to coordinate between in-flight operations.
pub struct AlfrescoMcpServer {
    client: AlfrescoClient,
    tools: Vec<ToolDefinition>,
}

impl AlfrescoMcpServer {
    /// Create a server around an authenticated client.
    pub fn new(client: AlfrescoClient) -> Self {
        Self {
            client,
            tools: tool_definitions(),
        }
    }

    /// Run the server loop over stdio until stdin closes.
    ///
    /// Each inbound message is handled on its own task, so a slow upstream
    /// call stalls only that request. All shared state (the client and the
    /// tool catalogue) is read-only, so no coordination is needed beyond the
    /// response channel serializing writes to stdout.
    pub async fn run(self) -> Result<()> {
        let server = Arc::new(self);
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let writer: tokio::task::JoinHandle<Result<()>> = tokio::spawn(async move {
            let mut stdout = std::io::stdout();
            while let Some(response) = rx.recv().await {
                writeln!(stdout, "{}", response)?;
                stdout.flush()?;
            }
            Ok(())
        });

        info!("MCP server ready, listening on stdio");

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            debug!(request = %line, "Received message");

            let server = Arc::clone(&server);
            let tx = tx.clone();
            tokio::spawn(async move {
                match server.handle_message(&line).await {
                    Ok(response) if !response.is_empty() => {
                        let _ = tx.send(response);
                    }
                    Ok(_) => {} // Notification, no response
                    Err(e) => {
                        let error_response =
                            JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                        if let Ok(json) = serde_json::to_string(&error_response) {
                            let _ = tx.send(json);
                        }
                    }
                }
            });
        }

        // Handler tasks keep their channel clones until they finish, so the
        // writer drains every in-flight response before shutting down.
        drop(tx);
        match writer.await {
            Ok(result) => result,
            Err(e) => Err(Error::Io(std::io::Error::other(e))),
        }
    }

    /// Handle a single JSON-RPC message, returning the serialized response
    /// or an empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            "resources/list" => JsonRpcResponse::success(request.id, json!({ "resources": [] })),
            "resources/read" => {
                self.handle_resources_read(request.id, request.params)
                    .await?
            }
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "alfresco-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.tools }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(&self.client, &tool_params.name, tool_params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?)),
            Err(Error::UnknownTool(name)) => {
                warn!(tool = %name, "rejected call to unsupported tool");
                Ok(JsonRpcResponse::error(
                    id,
                    -32602,
                    format!("Unsupported tool: {}", name),
                ))
            }
            Err(e) => {
                error!(tool = %tool_params.name, error = %e, "tool call failed");
                Ok(JsonRpcResponse::error(id, -32603, e.to_string()))
            }
        }
    }

    async fn handle_resources_read(
        &self,
        id: Option<Value>,
        params: Value,
    ) -> Result<JsonRpcResponse> {
        let read_params: ReadResourceParams = serde_json::from_value(params)?;

        match read_resource(&self.client, &read_params.uri).await {
            Ok(content) => {
                let result = json!({
                    "contents": [{
                        "uri": content.uri,
                        "mimeType": content.mime_type,
                        "blob": content.blob
                    }]
                });
                Ok(JsonRpcResponse::success(id, result))
            }
            Err(e) => {
                error!(uri = %read_params.uri, error = %e, "resource read failed");
                Ok(JsonRpcResponse::error(
                    id,
                    -32603,
                    format!("Resource error: {}", e),
                ))
            }
        }
    }

    /// The static tool catalogue.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
