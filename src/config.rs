//! Host configuration parsed from environment variables.
//!
//! Every value has a default so `cargo leptos watch` works with no `.env`.
//! Values that are present but unparseable are startup errors rather than
//! silent fallbacks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/api/chat";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable was set but blank.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Full URL of the opaque chat backend `/api/chat` is forwarded to.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
    /// Directory of static assets (logo) served as the fallback service.
    pub assets_dir: PathBuf,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_BACKEND_URL`: default `http://127.0.0.1:5000/api/chat`
    /// - `CHAT_BACKEND_TIMEOUT_SECS`: default 30
    /// - `CHAT_BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `ASSETS_DIR`: default `public/` next to this crate's manifest
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or blank value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let backend_url = match lookup("CHAT_BACKEND_URL") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { var: "CHAT_BACKEND_URL" }),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_BACKEND_URL.to_owned(),
        };

        let timeouts = BackendTimeouts {
            request: Duration::from_secs(parse_or(
                "CHAT_BACKEND_TIMEOUT_SECS",
                lookup("CHAT_BACKEND_TIMEOUT_SECS"),
                DEFAULT_BACKEND_TIMEOUT_SECS,
            )?),
            connect: Duration::from_secs(parse_or(
                "CHAT_BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("CHAT_BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?),
        };

        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"));

        Ok(Self { port, backend_url, timeouts, assets_dir })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
