//! ConfigStore: the enabled/disabled map and its read-modify-write cycle.
//!
//! Every call goes through the injected [`ConfigRepository`]; nothing is
//! cached, so the backing file stays the only source of truth.  A first run
//! with no saved map sees every catalog boss enabled.
//!
//! `toggle` holds a per-store guard for its whole load/flip/save cycle so two
//! concurrent toggles inside one process cannot lose an update.  Writers in
//! other processes are not covered.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use boss_core::{BossCatalog, BossConfig};

use super::error::ServiceError;
use super::repository::{ConfigRepository, StoreError};

pub struct ConfigStore {
    repo: Arc<dyn ConfigRepository>,
    catalog: Arc<BossCatalog>,
    write_guard: Mutex<()>,
}

impl ConfigStore {
    pub fn new(repo: Arc<dyn ConfigRepository>, catalog: Arc<BossCatalog>) -> Self {
        Self {
            repo,
            catalog,
            write_guard: Mutex::new(()),
        }
    }

    /// Returns the saved map, or an all-enabled map when none has been saved.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`], including `Corrupt` when the saved map is
    /// unreadable.  Corrupt state is never replaced by defaults.
    pub fn load(&self) -> Result<BossConfig, StoreError> {
        match self.repo.load()? {
            Some(config) => Ok(config),
            None => {
                debug!("no saved boss config; every boss starts enabled");
                Ok(BossConfig::all_enabled(&self.catalog))
            }
        }
    }

    /// Overwrites the saved map with `config`.
    pub fn save(&self, config: &BossConfig) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.repo.save(config)
    }

    /// Flips `name` and persists the whole map.  Returns the new value.
    ///
    /// # Errors
    ///
    /// [`ServiceError::NotFound`] for a name outside the catalog, in which
    /// case nothing is written.  [`ServiceError::Store`] on storage failure.
    pub fn toggle(&self, name: &str) -> Result<bool, ServiceError> {
        if !self.catalog.contains(name) {
            return Err(ServiceError::NotFound(name.to_string()));
        }

        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut config = self.load()?;
        let enabled = config
            .toggle(&self.catalog, name)
            .map_err(|_| ServiceError::NotFound(name.to_string()))?;
        self.repo.save(&config)?;

        info!(boss = name, enabled, "toggled boss");
        Ok(enabled)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
