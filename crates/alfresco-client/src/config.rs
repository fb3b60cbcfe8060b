//! Process configuration for the Alfresco connection
//!
//! Three required environment variables, loaded once at startup into an
//! immutable record that is passed explicitly into the client constructor.
//! Any missing or invalid value is fatal; there are no defaults.

use thiserror::Error;
use url::Url;

/// Environment variable naming the Alfresco host URL.
pub const ENV_HOST: &str = "ALFRESCO_HOST";
/// Environment variable naming the Alfresco username.
pub const ENV_USERNAME: &str = "ALFRESCO_USERNAME";
/// Environment variable naming the Alfresco password.
pub const ENV_PASSWORD: &str = "ALFRESCO_PASSWORD";

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("Missing required environment variable: {variable}")]
    Missing { variable: &'static str },

    /// The host variable is present but not a well-formed absolute URL
    #[error("Invalid Alfresco host URL {value:?}: {source}")]
    InvalidHostUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Connection settings for the Alfresco repository
///
/// The host is validated as a URL at load time but kept as the raw string:
/// request URLs are built by concatenation, and re-serializing through `Url`
/// would append a trailing slash to authority-only hosts.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |variable: &'static str| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { variable })
        };

        let host = require(ENV_HOST)?;
        let username = require(ENV_USERNAME)?;
        let password = require(ENV_PASSWORD)?;

        Url::parse(&host).map_err(|source| ConfigError::InvalidHostUrl {
            value: host.clone(),
            source,
        })?;

        Ok(Self {
            host,
            username,
            password,
        })
    }
}
