//! Server settings read from the environment.
//!
//! Every variable is optional. A `.env` file in the working directory is
//! honoured when present.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const HOST_VAR: &str = "RAVVEDIMENTO_HOST";
const PORT_VAR: &str = "RAVVEDIMENTO_PORT";
const CONFIG_DIR_VAR: &str = "RAVVEDIMENTO_CONFIG_DIR";
const LOG_LEVEL_VAR: &str = "RAVVEDIMENTO_LOG_LEVEL";

/// Errors raised while reading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The port is not a valid `u16`.
    #[error("RAVVEDIMENTO_PORT must be a valid u16, got '{value}'")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },

    /// The host is neither `localhost` nor an IP address.
    #[error("RAVVEDIMENTO_HOST must parse to an IPv4 or IPv6 address, got '{value}'")]
    InvalidHost {
        /// The rejected value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding the YAML reference data; `None` uses the built-in tables.
    pub config_dir: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort { value })?,
            None => 3000,
        };
        let config_dir = lookup(CONFIG_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            host,
            port,
            config_dir,
            log_level,
        })
    }

    /// Resolves the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| SettingsError::InvalidHost {
                value: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
