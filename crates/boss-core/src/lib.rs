//! # boss-core
//!
//! Shared library for the boss challenge generator: the boss catalog, the
//! enabled/disabled config model, random challenge generation, and history
//! records.
//!
//! This crate has no file, network, or async dependencies.  `boss-server`
//! supplies persistence and the HTTP surface on top of it.
//!
//! ```rust
//! use boss_core::{generate, BossCatalog, BossConfig};
//!
//! let catalog = BossCatalog::standard();
//! let config = BossConfig::all_enabled(&catalog);
//! let challenge = generate(&catalog, &config, &mut rand::thread_rng()).unwrap();
//! assert!(catalog.contains(&challenge.boss));
//! ```

pub mod domain;

pub use domain::catalog::{BossCatalog, BossDefinition, CatalogError};
pub use domain::challenge::{generate, Challenge, ChallengeError};
pub use domain::config::BossConfig;
pub use domain::history::{
    recent, CompletionError, CompletionRequest, HistoryRecord, DEFAULT_HISTORY_LIMIT,
};
