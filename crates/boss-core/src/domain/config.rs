//! Enabled/disabled state for each boss.
//!
//! [`BossConfig`] is the in-memory shape of the persisted config file: a JSON
//! object mapping boss name to a boolean.  A name with no entry counts as
//! enabled.  That rule lives only in [`BossConfig::is_enabled`] so the boss
//! listing and challenge generation can never disagree about it.
//!
//! Entries for names that are not in the catalog are kept as-is (so a file
//! written against a different boss set survives a round-trip) but are
//! ignored everywhere else.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{BossCatalog, BossDefinition, CatalogError};

/// Boss name → enabled flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BossConfig {
    entries: BTreeMap<String, bool>,
}

impl BossConfig {
    /// Creates an empty config.  Every boss reads as enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with an explicit `true` entry for every catalog boss.
    ///
    /// This is what a first run sees before any config file exists.
    pub fn all_enabled(catalog: &BossCatalog) -> Self {
        Self {
            entries: catalog.names().map(|n| (n.to_string(), true)).collect(),
        }
    }

    /// Returns whether `name` is eligible for selection.  Absent means enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(true)
    }

    /// Stores an explicit flag for `name`.
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.entries.insert(name.into(), enabled);
    }

    /// Flips the flag for a catalog boss and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownBoss`] and leaves `self` untouched when
    /// `name` is not in `catalog`.
    pub fn toggle(&mut self, catalog: &BossCatalog, name: &str) -> Result<bool, CatalogError> {
        let boss = catalog.require(name)?;
        let enabled = !self.is_enabled(&boss.name);
        self.set(boss.name.clone(), enabled);
        Ok(enabled)
    }

    /// Catalog bosses currently eligible for selection, in catalog order.
    pub fn enabled_bosses<'c>(&self, catalog: &'c BossCatalog) -> Vec<&'c BossDefinition> {
        catalog
            .list_all()
            .iter()
            .filter(|b| self.is_enabled(&b.name))
            .collect()
    }

    /// Raw entries, including names the catalog does not know.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, bool)> for BossConfig {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
