//! Authenticated REST client for the Alfresco public API

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Config;
use crate::types::{NodeMetadata, SearchResponse};
use crate::{Error, Result};

/// The two public API families the adapter talks to.
#[derive(Debug, Clone, Copy)]
enum ApiKind {
    /// General repository API, parameterized by an operation path suffix.
    Alfresco,
    /// Search API; a single fixed endpoint, never parameterized.
    Search,
}

/// Paging overrides for a search call.
///
/// Unset fields fall back to the server-side defaults of this adapter:
/// 10 items, no skip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub max_items: Option<u32>,
    pub skip_count: Option<u32>,
}

#[derive(Debug, Serialize)]
struct SearchRequest {
    query: QueryClause,
    paging: Paging,
    include: [&'static str; 1],
}

#[derive(Debug, Serialize)]
struct QueryClause {
    query: String,
    language: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    max_items: u32,
    skip_count: u32,
}

/// Stateless-per-call client for the Alfresco repository.
///
/// The Basic credential is computed once at construction and installed as a
/// default header alongside `Accept: application/json`; per-request headers
/// take precedence on collision. The host string is used exactly as
/// configured, with no trailing-slash normalization.
#[derive(Debug, Clone)]
pub struct AlfrescoClient {
    host: String,
    http: reqwest::Client,
}

impl AlfrescoClient {
    /// Build a client from loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let credential = format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", config.username, config.password))
        );
        let mut authorization = HeaderValue::from_str(&credential)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            host: config.host.clone(),
            http,
        })
    }

    fn build_url(&self, kind: ApiKind, path: &str) -> String {
        match kind {
            ApiKind::Alfresco => format!(
                "{}/alfresco/api/-default-/public/alfresco/versions/1{}",
                self.host, path
            ),
            ApiKind::Search => format!(
                "{}/alfresco/api/-default-/public/search/versions/1/search",
                self.host
            ),
        }
    }

    /// Issue a prepared request and normalize failures: network errors are
    /// logged and re-raised, non-2xx statuses become [`Error::Upstream`]
    /// carrying the status code and body text.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "API request failed");
            Error::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "upstream returned an error status");
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Fetch the repository's metadata for a node.
    ///
    /// `node_id` must already have any URI scheme stripped.
    pub async fn get_node_metadata(&self, node_id: &str) -> Result<NodeMetadata> {
        let url = self.build_url(ApiKind::Alfresco, &format!("/nodes/{node_id}"));
        debug!(%node_id, "fetching node metadata");
        let response = self.send(self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Fetch a node's content, returning the raw response so the caller can
    /// choose between text and byte extraction.
    pub async fn download_node_content(&self, node_id: &str) -> Result<reqwest::Response> {
        let url = self.build_url(ApiKind::Alfresco, &format!("/nodes/{node_id}/content"));
        debug!(%node_id, "downloading node content");
        self.send(self.http.get(&url)).await
    }

    /// Run a full-text query against the search API.
    ///
    /// The query is always restricted to content nodes: a literal
    /// `AND TYPE:'cm:content'` clause is appended server-side and is not
    /// configurable.
    pub async fn search_nodes(&self, query: &str, options: SearchOptions) -> Result<SearchResponse> {
        let url = self.build_url(ApiKind::Search, "");
        let body = SearchRequest {
            query: QueryClause {
                query: format!("{query} AND TYPE:'cm:content'"),
                language: "afts",
            },
            paging: Paging {
                max_items: options.max_items.unwrap_or(10),
                skip_count: options.skip_count.unwrap_or(0),
            },
            include: ["properties"],
        };

        debug!(%query, max_items = body.paging.max_items, "searching content nodes");
        let response = self.send(self.http.post(&url).json(&body)).await?;
        Ok(response.json().await?)
    }
}
