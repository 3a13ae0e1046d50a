//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for runtime settings.  It is
//! assembled in `main.rs` from the optional TOML settings file and the CLI;
//! nothing in this module reads the environment or the file system.

use std::net::SocketAddr;
use std::path::PathBuf;

use boss_core::DEFAULT_HISTORY_LIMIT;

/// Default name of the enabled/disabled state file.
pub const DEFAULT_CONFIG_FILE: &str = "boss_config.json";

/// Default name of the completion log file.
pub const DEFAULT_HISTORY_FILE: &str = "boss_log.json";

/// All runtime configuration for the server.
///
/// # Example
///
/// ```rust
/// use boss_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 5000);
/// assert!(cfg.config_path().ends_with("boss_config.json"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Directory holding both state files.
    pub data_dir: PathBuf,

    /// File name of the enabled/disabled map, relative to `data_dir`.
    pub config_file: String,

    /// File name of the completion log, relative to `data_dir`.
    pub history_file: String,

    /// Maximum number of records `GET /api/history` returns.
    pub history_limit: usize,
}

impl ServerConfig {
    /// Full path of the enabled/disabled state file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(&self.config_file)
    }

    /// Full path of the completion log file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }
}

impl Default for ServerConfig {
    /// | Field          | Default             |
    /// |----------------|---------------------|
    /// | bind_addr      | `127.0.0.1:5000`    |
    /// | data_dir       | `.`                 |
    /// | config_file    | `boss_config.json`  |
    /// | history_file   | `boss_log.json`     |
    /// | history_limit  | 20                  |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_dir: PathBuf::from("."),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
