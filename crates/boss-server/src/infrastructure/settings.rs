//! TOML settings file for the server.
//!
//! The settings file is optional.  When present it may set any subset of:
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0"
//! port = 8080
//! log_level = "debug"
//!
//! [storage]
//! data_dir = "/var/lib/boss-challenge"
//! config_file = "boss_config.json"
//! history_file = "boss_log.json"
//! history_limit = 20
//! ```
//!
//! Every field has a serde default, so a missing section or key falls back to
//! the same values as [`ServerConfig::default`].  Command-line flags are
//! applied on top of the loaded settings in `main.rs`.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::config::{ServerConfig, DEFAULT_CONFIG_FILE, DEFAULT_HISTORY_FILE};
use boss_core::DEFAULT_HISTORY_LIMIT;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `bind_address` is not an IP address.
    #[error("invalid bind address: '{0}'")]
    InvalidBindAddress(String),

    /// `history_limit` is zero.
    #[error("history_limit must be at least 1")]
    InvalidHistoryLimit,
}

// ── Settings schema ───────────────────────────────────────────────────────────

/// Top-level settings file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// HTTP listener and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    /// IP address to bind to.  `"0.0.0.0"` listens on all interfaces.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// TCP port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// `tracing` filter used when `RUST_LOG` is unset, e.g. `"info"` or `"boss_server=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where the state files live and how much history is served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_config_file")]
    pub config_file: String,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_config_file() -> String {
    DEFAULT_CONFIG_FILE.to_string()
}
fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            config_file: default_config_file(),
            history_file: default_history_file(),
            history_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Validates the settings and converts them into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// [`SettingsError::InvalidBindAddress`] when `bind_address` is not an IP
    /// address and [`SettingsError::InvalidHistoryLimit`] when the limit is 0.
    pub fn to_server_config(&self) -> Result<ServerConfig, SettingsError> {
        let ip: IpAddr = self
            .server
            .bind_address
            .parse()
            .map_err(|_| SettingsError::InvalidBindAddress(self.server.bind_address.clone()))?;

        if self.storage.history_limit == 0 {
            return Err(SettingsError::InvalidHistoryLimit);
        }

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.server.port),
            data_dir: self.storage.data_dir.clone(),
            config_file: self.storage.config_file.clone(),
            history_file: self.storage.history_file.clone(),
            history_limit: self.storage.history_limit,
        })
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads settings from `path`, returning `Settings::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not found",
/// and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
