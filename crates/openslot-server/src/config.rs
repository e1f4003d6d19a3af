//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Host configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket the HTTP listener binds to
    pub bind_addr: SocketAddr,

    /// Directory holding the built WASM bundle (index.html, .wasm, assets)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("STATIC_DIR").ok().as_deref(),
        )
    }

    pub fn from_values(bind_addr: Option<&str>, static_dir: Option<&str>) -> Result<Self, ConfigError> {
        let value = bind_addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = value.parse().map_err(|source| ConfigError::BindAddr {
            value: value.to_string(),
            source,
        })?;

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir.unwrap_or(DEFAULT_STATIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
