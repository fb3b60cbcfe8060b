//! REST client for the Alfresco Content Services public API
//!
//! This crate wraps the three Alfresco REST operations the MCP server needs:
//!
//! - node metadata lookup (`/nodes/{id}`)
//! - node content download (`/nodes/{id}/content`)
//! - full-text search (`/search`, AFTS dialect)
//!
//! All calls carry HTTP Basic authentication derived once from the process
//! configuration. Node ids are opaque strings; callers are expected to have
//! stripped any URI scheme before handing them to the client.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{AlfrescoClient, SearchOptions};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use types::{NodeEntry, NodeMetadata, SearchResponse};
