//! REST runtime configuration.
//!
//! Configuration is resolved once at process startup and passed to the server. Nothing in the
//! request path reads environment variables.

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// REST configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RestConfig {
    bind_addr: SocketAddr,
}

impl RestConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Parse the bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_BIND_ADDR`].
pub fn bind_addr_from_env_value(value: Option<String>) -> ConfigResult<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    value
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddr { value, source })
}
