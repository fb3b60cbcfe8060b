//! MCP Resource read handler
//!
//! Nodes are addressed directly as `alfresco://{nodeId}` URIs. Reading one
//! fetches its metadata, then either short-circuits with a plain-text
//! placeholder for folders (no listing is performed) or downloads the content,
//! buffers it fully, and returns it base64-encoded with the MIME type the
//! repository declared.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use alfresco_client::AlfrescoClient;

use crate::{Result, node_id};

/// A resource read result: base64 blob plus its MIME type.
#[derive(Debug, Clone)]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub blob: String,
}

/// Read a node's content by `alfresco://` URI.
///
/// Failures during the metadata or content fetch propagate unmodified; no
/// partial response is produced.
pub async fn read_resource(client: &AlfrescoClient, uri: &str) -> Result<ResourceContent> {
    let id = node_id(uri);
    let metadata = client.get_node_metadata(id).await?;
    let entry = metadata.entry;

    if entry.is_folder {
        debug!(node_id = %id, "resource is a folder, returning placeholder");
        return Ok(ResourceContent {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            blob: STANDARD.encode(format!("Folder: {id}")),
        });
    }

    let mime_type = entry.mime_type().to_string();
    let response = client.download_node_content(id).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(alfresco_client::Error::from)?;
    debug!(node_id = %id, size = bytes.len(), %mime_type, "resource content downloaded");

    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type,
        blob: STANDARD.encode(&bytes),
    })
}
