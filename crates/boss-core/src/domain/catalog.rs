//! Boss catalog domain entity.
//!
//! The catalog is compiled-in reference data: every boss a challenge can be
//! generated for, together with the inclusive kill-count range a challenge
//! target is drawn from.  It is never persisted and never mutated at runtime.
//! Iteration order is declaration order and is stable across runs.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use thiserror::Error;

/// The canonical boss set: `(name, min_kills, max_kills)` in display order.
const STANDARD_BOSSES: &[(&str, u32, u32)] = &[
    ("Zulrah", 20, 50),
    ("Corporeal Beast", 20, 50),
    ("Giant Mole", 20, 50),
    ("Kalphite Queen", 15, 30),
    ("King Black Dragon", 20, 50),
    ("Sarachnis", 20, 50),
    ("Phosani's Nightmare", 20, 50),
    ("Chambers of Xeric", 1, 3),
    ("Theatre of Blood", 1, 3),
    ("Leviathan", 20, 50),
    ("Duke", 20, 50),
    ("Vardorvis", 20, 50),
    ("The Whisperer", 20, 50),
    ("Yama", 10, 20),
    ("Doom", 5, 10),
];

/// Errors raised when building a catalog or resolving a name against it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A definition has `min_kills == 0` or `max_kills < min_kills`.
    #[error("invalid kill range for {name}: {min_kills}..={max_kills}")]
    InvalidRange {
        name: String,
        min_kills: u32,
        max_kills: u32,
    },

    /// Two definitions share the same name.
    #[error("duplicate boss name: {0}")]
    DuplicateName(String),

    /// The name does not belong to any catalog entry.
    #[error("unknown boss: {0}")]
    UnknownBoss(String),
}

/// A named encounter with the kill-count range challenges are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossDefinition {
    /// Unique display name, also the key used in the persisted config.
    pub name: String,
    /// Smallest kill target a challenge may ask for (at least 1).
    pub min_kills: u32,
    /// Largest kill target a challenge may ask for (at least `min_kills`).
    pub max_kills: u32,
}

impl BossDefinition {
    pub fn new(name: impl Into<String>, min_kills: u32, max_kills: u32) -> Self {
        Self {
            name: name.into(),
            min_kills,
            max_kills,
        }
    }

    /// Returns the inclusive range a kill target is drawn from.
    pub fn kill_range(&self) -> RangeInclusive<u32> {
        self.min_kills..=self.max_kills
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.min_kills == 0 || self.max_kills < self.min_kills {
            return Err(CatalogError::InvalidRange {
                name: self.name.clone(),
                min_kills: self.min_kills,
                max_kills: self.max_kills,
            });
        }
        Ok(())
    }
}

/// Ordered, read-only set of boss definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossCatalog {
    bosses: Vec<BossDefinition>,
}

impl BossCatalog {
    /// Builds a catalog from `bosses`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRange`] for a definition with an empty or
    /// zero-based range and [`CatalogError::DuplicateName`] when a name repeats.
    pub fn new(bosses: Vec<BossDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(bosses.len());
        for boss in &bosses {
            boss.validate()?;
            if !seen.insert(boss.name.as_str()) {
                return Err(CatalogError::DuplicateName(boss.name.clone()));
            }
        }
        Ok(Self { bosses })
    }

    /// Returns the compiled-in boss set used by the server.
    pub fn standard() -> Self {
        Self {
            bosses: STANDARD_BOSSES
                .iter()
                .map(|&(name, min, max)| BossDefinition::new(name, min, max))
                .collect(),
        }
    }

    /// Looks up a boss by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&BossDefinition> {
        self.bosses.iter().find(|b| b.name == name)
    }

    /// Like [`lookup`](Self::lookup) but reports an unknown name as an error.
    pub fn require(&self, name: &str) -> Result<&BossDefinition, CatalogError> {
        self.lookup(name)
            .ok_or_else(|| CatalogError::UnknownBoss(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All definitions in declaration order.
    pub fn list_all(&self) -> &[BossDefinition] {
        &self.bosses
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bosses.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }
}

impl Default for BossCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
