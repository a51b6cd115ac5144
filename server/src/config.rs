//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
    #[error("STOREFRONT_SITE_ROOT must not be empty")]
    EmptySiteRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built `pkg/` bundle and other static files.
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `STOREFRONT_SITE_ROOT`: static site root, default `target/site`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = parse_site_root(std::env::var("STOREFRONT_SITE_ROOT").ok().as_deref())?;
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_site_root(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    match raw {
        None => Ok(PathBuf::from(DEFAULT_SITE_ROOT)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptySiteRoot),
        Some(value) => Ok(PathBuf::from(value.trim())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
