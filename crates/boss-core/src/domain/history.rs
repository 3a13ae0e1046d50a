//! Completed-challenge records.
//!
//! The history log is an append-only, chronologically ordered list of
//! [`HistoryRecord`]s.  Records carry no identifier; their position in the log
//! is their identity.  `completed` is a local wall-clock timestamp without an
//! offset, serialized as ISO-8601 (`2024-01-01T00:00:00`, optionally with
//! fractional seconds).

use chrono::NaiveDateTime;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::catalog::BossCatalog;

/// Number of records the history endpoint returns when not configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// One finished challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub boss: String,
    /// Kill count.  `None` only for records logged before completions were
    /// validated, whose count was missing or not a whole number; it is
    /// written back as `null`.
    #[serde(default, deserialize_with = "lenient_kills")]
    pub kills: Option<u32>,
    pub completed: NaiveDateTime,
}

/// Reads any JSON value as a kill count, mapping everything that is not a
/// non-negative integer in `u32` range to `None`.
fn lenient_kills<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKills {
        Count(u32),
        Unrecorded(IgnoredAny),
    }

    Ok(match RawKills::deserialize(deserializer)? {
        RawKills::Count(kills) => Some(kills),
        RawKills::Unrecorded(_) => None,
    })
}

/// Reasons a completion request is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("unknown boss: {0}")]
    UnknownBoss(String),

    #[error("kills must be a positive integer, got {0}")]
    InvalidKills(i64),
}

/// A caller's claim that a challenge was finished, before validation.
///
/// `kills` is signed so that zero and negative values reach validation and are
/// reported as such instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub boss: String,
    pub kills: i64,
}

impl CompletionRequest {
    pub fn new(boss: impl Into<String>, kills: i64) -> Self {
        Self {
            boss: boss.into(),
            kills,
        }
    }

    /// Validates the request and stamps it with `completed`.
    ///
    /// The kill count is not checked against the boss's challenge range: a
    /// player may finish more (or fewer) kills than were asked for.
    ///
    /// # Errors
    ///
    /// [`CompletionError::UnknownBoss`] if `boss` is not in `catalog`,
    /// [`CompletionError::InvalidKills`] if `kills` is not in `1..=u32::MAX`.
    pub fn into_record(
        self,
        catalog: &BossCatalog,
        completed: NaiveDateTime,
    ) -> Result<HistoryRecord, CompletionError> {
        if !catalog.contains(&self.boss) {
            return Err(CompletionError::UnknownBoss(self.boss));
        }
        let kills = u32::try_from(self.kills)
            .ok()
            .filter(|k| *k > 0)
            .ok_or(CompletionError::InvalidKills(self.kills))?;

        Ok(HistoryRecord {
            boss: self.boss,
            kills: Some(kills),
            completed,
        })
    }
}

/// Returns the last `n` records, oldest first.  Fewer than `n` → all of them.
pub fn recent(records: &[HistoryRecord], n: usize) -> &[HistoryRecord] {
    &records[records.len().saturating_sub(n)..]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
