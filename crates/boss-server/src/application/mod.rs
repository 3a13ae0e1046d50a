//! Application layer for boss-server.
//!
//! Orchestrates the core domain against persisted state: the config store,
//! the history log, and the service that backs each API endpoint.  Storage is
//! reached only through the repository traits in [`repository`].
//!
//! Sockets, routing, and file formats belong to the infrastructure layer.

pub mod challenge_service;
pub mod config_store;
pub mod error;
pub mod history_log;
pub mod repository;

pub use challenge_service::ChallengeService;
pub use config_store::ConfigStore;
pub use error::ServiceError;
pub use history_log::HistoryLog;
pub use repository::{ConfigRepository, HistoryRepository, StoreError};
