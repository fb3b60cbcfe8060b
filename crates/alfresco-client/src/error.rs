//! Error types for Alfresco REST operations

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Alfresco repository
#[derive(Debug, Error)]
pub enum Error {
    /// The repository answered with a non-2xx status. Carries the status
    /// code and the response body text so callers can report both.
    #[error("HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (connect failure, protocol
    /// error, body decode failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The username or password contains bytes that cannot appear in an
    /// HTTP header value.
    #[error("credentials are not representable as an Authorization header")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),
}
