//! Wire types for the Alfresco public REST API
//!
//! Only the fields this adapter reads are modeled; everything else in the
//! repository's envelopes is ignored during deserialization.

use serde::Deserialize;

/// Response envelope for `GET /nodes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeMetadata {
    pub entry: NodeEntry,
}

/// The repository's description of a single node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub content: Option<ContentInfo>,
}

impl NodeEntry {
    /// Declared MIME type of the node's content, or the generic binary
    /// default when the repository reports none.
    pub fn mime_type(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.mime_type.as_deref())
            .unwrap_or("application/octet-stream")
    }
}

/// Content descriptor attached to file nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Response envelope for `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub list: Option<ResultList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultList {
    #[serde(default)]
    pub entries: Vec<ResultEntry>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// One matched node in a search result list.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    pub entry: NodeEntry,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total_items: u64,
}
