//! Domain layer for boss-server.
//!
//! Plain types with no I/O: the runtime configuration and the JSON bodies of
//! the HTTP API.  File access and environment reads belong to the
//! infrastructure layer and `main.rs`.

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{AckReply, BossStatus, ErrorReply, ToggleReply};
