//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the compiled `/pkg` assets.
    pub site_root: String,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build config from the environment and the cargo-leptos metadata.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: overrides the cargo-leptos `site-root`
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable `PORT` or missing Leptos metadata.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let leptos = get_configuration(None)
            .map_err(|e| ConfigError::Leptos(e.to_string()))?
            .leptos_options;
        let site_root = resolve_site_root(std::env::var("SITE_ROOT").ok().as_deref(), &leptos.site_root);
        Ok(Self { port, site_root, leptos })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_owned(),
            source,
        }),
    }
}

fn resolve_site_root(override_root: Option<&str>, configured: &str) -> String {
    override_root
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(configured)
        .to_owned()
}
