//! HistoryLog: append-only completion records.
//!
//! `append` reads the full log, pushes one record, and writes the full log
//! back.  That is O(n) per completion, which is fine for a personal log of a
//! few thousand entries.  Like [`ConfigStore`](super::ConfigStore), the
//! read-modify-write cycle runs under a per-store guard.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use boss_core::{recent, HistoryRecord};

use super::repository::{HistoryRepository, StoreError};

pub struct HistoryLog {
    repo: Arc<dyn HistoryRepository>,
    write_guard: Mutex<()>,
}

impl HistoryLog {
    pub fn new(repo: Arc<dyn HistoryRepository>) -> Self {
        Self {
            repo,
            write_guard: Mutex::new(()),
        }
    }

    /// Every record, oldest first.
    pub fn load(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        self.repo.load()
    }

    /// Adds `record` at the end of the log and persists the whole log.
    pub fn append(&self, record: HistoryRecord) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.repo.load()?;
        info!(
            boss = %record.boss,
            kills = ?record.kills,
            position = records.len(),
            "recording completed challenge"
        );
        records.push(record);
        self.repo.save(&records)
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Result<Vec<HistoryRecord>, StoreError> {
        let records = self.repo.load()?;
        Ok(recent(&records, n).to_vec())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
