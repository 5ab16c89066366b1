//! Host configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory of static assets (resume PDF, images) served as fallback.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `STATIC_DIR`: asset directory, default `<crate>/public`
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());
        Ok(Self { port, static_dir })
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerError::Config(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
