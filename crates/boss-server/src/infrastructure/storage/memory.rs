//! In-memory repositories for tests and throwaway runs.
//!
//! They behave like the JSON-file repositories (nothing saved → `None` /
//! empty) without touching the file system.

use std::sync::{Mutex, PoisonError};

use boss_core::{BossConfig, HistoryRecord};

use crate::application::{ConfigRepository, HistoryRepository, StoreError};

/// A [`ConfigRepository`] backed by a mutex-guarded `Option<BossConfig>`.
#[derive(Debug, Default)]
pub struct InMemoryConfigRepository {
    saved: Mutex<Option<BossConfig>>,
}

impl InMemoryConfigRepository {
    /// Starts with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts as if `config` had already been saved.
    pub fn with_config(config: BossConfig) -> Self {
        Self {
            saved: Mutex::new(Some(config)),
        }
    }

    /// The currently saved map, if any.
    pub fn snapshot(&self) -> Option<BossConfig> {
        self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load(&self) -> Result<Option<BossConfig>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, config: &BossConfig) -> Result<(), StoreError> {
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }
}

/// A [`HistoryRepository`] backed by a mutex-guarded `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    records: Mutex<Vec<HistoryRecord>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// The currently saved log.
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<(), StoreError> {
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        Ok(())
    }
}
