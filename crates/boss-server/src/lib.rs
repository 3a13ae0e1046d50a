//! boss-server library crate.
//!
//! Serves the boss challenge generator over a small HTTP JSON API and keeps
//! its state in two JSON files next to the binary (or under `--data-dir`).
//!
//! # Architecture
//!
//! ```text
//! Browser / curl  (JSON over HTTP)
//!         ↕
//! [boss-server]
//!   ├── domain/           ServerConfig, API reply types
//!   ├── application/      ChallengeService, ConfigStore, HistoryLog,
//!   │                     repository traits
//!   └── infrastructure/
//!         ├── http_server  warp routes and the serve loop
//!         ├── settings     optional TOML settings file
//!         └── storage/     JSON-file and in-memory repositories
//!         ↕
//! boss_config.json, boss_log.json
//! ```
//!
//! # Layer rules
//!
//! - `domain` performs no I/O.
//! - `application` depends on `domain`, `boss-core`, and the repository traits
//!   it defines; it never touches files or sockets directly.
//! - `infrastructure` implements those traits and owns every external
//!   dependency (warp, the file system, TOML).

/// Domain layer: configuration and wire types (no I/O).
pub mod domain;

/// Application layer: the operations behind each endpoint.
pub mod application;

/// Infrastructure layer: HTTP server, settings file, repositories.
pub mod infrastructure;
