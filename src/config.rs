//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `OAUTH_REDIRECT_BASE_URL`: optional prefix for the final client redirect,
//!   forwarded to the browser through the HTML shell

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use portal_client::config::ClientConfig;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub client: ClientConfig,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("OAUTH_REDIRECT_BASE_URL").ok())
    }

    fn from_vars(port: Option<&str>, redirect_base_url: Option<String>) -> Result<Self, HostError> {
        let port = parse_port(port)?;
        Ok(Self { port, client: ClientConfig::new(redirect_base_url) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
