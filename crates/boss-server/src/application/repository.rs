//! Persistence seams for the two state stores.
//!
//! The application layer only knows these traits.  The infrastructure layer
//! provides JSON-file implementations and in-memory ones for tests; both are
//! injected into [`ConfigStore`](super::ConfigStore) and
//! [`HistoryLog`](super::HistoryLog) at construction time.

use std::path::PathBuf;

use thiserror::Error;

use boss_core::{BossConfig, HistoryRecord};

/// Errors raised by a repository implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read, written, or renamed.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold valid state.
    #[error("corrupt state in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be encoded for writing.
    #[error("failed to serialize state for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// `true` when the stored data itself is unreadable, as opposed to the
    /// storage medium failing.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

/// Load/save access to the enabled/disabled map.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigRepository: Send + Sync {
    /// Returns the persisted map, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<BossConfig>, StoreError>;

    /// Replaces the persisted map with `config`.
    fn save(&self, config: &BossConfig) -> Result<(), StoreError>;
}

/// Load/save access to the ordered completion log.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    /// Returns every record in insertion order; empty when nothing has been saved.
    fn load(&self) -> Result<Vec<HistoryRecord>, StoreError>;

    /// Replaces the persisted log with `records`.
    fn save(&self, records: &[HistoryRecord]) -> Result<(), StoreError>;
}
