//! Boss challenge server: entry point.
//!
//! # Usage
//!
//! ```text
//! boss-server [OPTIONS]
//!
//! Options:
//!   --settings      <FILE>  TOML settings file [default: boss-server.toml]
//!   --bind          <IP>    Address to listen on
//!   --port          <PORT>  HTTP port
//!   --data-dir      <DIR>   Directory holding boss_config.json and boss_log.json
//!   --history-limit <N>     Records returned by GET /api/history
//! ```
//!
//! # Precedence
//!
//! Command-line flag, then environment variable, then the settings file, then
//! the built-in default.
//!
//! | Variable              | Flag              | Default             |
//! |-----------------------|-------------------|---------------------|
//! | `BOSS_SETTINGS`       | `--settings`      | `boss-server.toml`  |
//! | `BOSS_BIND`           | `--bind`          | `127.0.0.1`         |
//! | `BOSS_PORT`           | `--port`          | `5000`              |
//! | `BOSS_DATA_DIR`       | `--data-dir`      | `.`                 |
//! | `BOSS_HISTORY_LIMIT`  | `--history-limit` | `20`                |
//!
//! The log filter comes from `RUST_LOG`, falling back to `server.log_level`
//! in the settings file.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use boss_core::BossCatalog;
use boss_server::application::ChallengeService;
use boss_server::domain::ServerConfig;
use boss_server::infrastructure::run_server;
use boss_server::infrastructure::settings::{load_settings, Settings};
use boss_server::infrastructure::storage::{JsonConfigRepository, JsonHistoryRepository};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Random boss-kill challenge generator with a browser UI.
#[derive(Debug, Parser)]
#[command(
    name = "boss-server",
    about = "HTTP server for the boss challenge generator",
    version
)]
struct Cli {
    /// Optional TOML settings file.  A missing file means "all defaults".
    #[arg(long, default_value = "boss-server.toml", env = "BOSS_SETTINGS")]
    settings: PathBuf,

    /// IP address to bind the HTTP server to.
    ///
    /// Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, env = "BOSS_BIND")]
    bind: Option<IpAddr>,

    /// TCP port for the HTTP server.
    #[arg(long, env = "BOSS_PORT")]
    port: Option<u16>,

    /// Directory holding the state files.
    #[arg(long, env = "BOSS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Maximum number of records returned by `GET /api/history`.
    #[arg(long, env = "BOSS_HISTORY_LIMIT")]
    history_limit: Option<usize>,
}

impl Cli {
    /// Applies the command-line overrides on top of `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged settings are invalid (unparseable bind
    /// address in the file, or a history limit of 0).
    fn into_server_config(self, mut settings: Settings) -> anyhow::Result<ServerConfig> {
        if let Some(ip) = self.bind {
            settings.server.bind_address = ip.to_string();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(dir) = self.data_dir {
            settings.storage.data_dir = dir;
        }
        if let Some(limit) = self.history_limit {
            settings.storage.history_limit = limit;
        }
        settings
            .to_server_config()
            .context("invalid server configuration")
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(&cli.settings)
        .with_context(|| format!("failed to load settings from {}", cli.settings.display()))?;

    // RUST_LOG wins; otherwise the settings file level; otherwise info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&settings.server.log_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = cli.into_server_config(settings)?;

    info!(
        bind = %config.bind_addr,
        config_file = %config.config_path().display(),
        history_file = %config.history_path().display(),
        history_limit = config.history_limit,
        "boss challenge server starting"
    );

    let service = Arc::new(ChallengeService::new(
        BossCatalog::standard(),
        Arc::new(JsonConfigRepository::new(config.config_path())),
        Arc::new(JsonHistoryRepository::new(config.history_path())),
        config.history_limit,
    ));

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
        }
    };

    run_server(&config, service, shutdown).await?;

    info!("boss challenge server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
