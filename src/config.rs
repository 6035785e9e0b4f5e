//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `SITE_ADDR`: full bind address, e.g. `127.0.0.1:8080`
//! - `PORT`: bind `0.0.0.0:<PORT>` (ignored when `SITE_ADDR` is set)
//! - `SITE_ROOT`: directory holding the compiled `pkg/` assets
//!
//! Anything left unset falls back to the Leptos options.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid SITE_ADDR: {0:?}")]
    InvalidSiteAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerConfig {
    pub addr: Option<SocketAddr>,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `SITE_ADDR` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(
            std::env::var("SITE_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    /// Build a config from raw optional values. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable address or port.
    pub fn parse(site_addr: Option<&str>, port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let addr = match (non_blank(site_addr), non_blank(port)) {
            (Some(raw), _) => Some(
                raw.parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidSiteAddr(raw.to_owned()))?,
            ),
            (None, Some(raw)) => {
                let port = raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?;
                Some(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
            }
            (None, None) => None,
        };
        let site_root = non_blank(site_root).map(PathBuf::from);
        Ok(Self { addr, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self, fallback: SocketAddr) -> SocketAddr {
        self.addr.unwrap_or(fallback)
    }

    #[must_use]
    pub fn site_root_or(&self, fallback: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| PathBuf::from(fallback))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
