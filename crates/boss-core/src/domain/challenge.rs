//! Challenge generation.
//!
//! A challenge is a `(boss, kill target)` pair.  Generation is a pure function
//! of the catalog, a config snapshot, and a random source:
//!
//! 1. Collect the catalog bosses the config leaves enabled.
//! 2. Pick one uniformly, regardless of how wide its kill range is.
//! 3. Draw the kill target uniformly from the boss's inclusive range.
//!
//! The random source is a type parameter so production code can pass
//! `rand::thread_rng()` and tests can pass a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::catalog::BossCatalog;
use super::config::BossConfig;

/// Errors that can occur when generating a challenge.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallengeError {
    /// Every catalog boss is disabled.
    #[error("No bosses enabled")]
    NoBossesEnabled,
}

/// A generated challenge: kill `kills` of `boss`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub boss: String,
    pub kills: u32,
}

/// Picks an enabled boss and a kill target within its range.
///
/// # Errors
///
/// Returns [`ChallengeError::NoBossesEnabled`] when `config` disables every
/// boss in `catalog`.
pub fn generate<R: Rng + ?Sized>(
    catalog: &BossCatalog,
    config: &BossConfig,
    rng: &mut R,
) -> Result<Challenge, ChallengeError> {
    let enabled = config.enabled_bosses(catalog);
    let boss = enabled
        .choose(rng)
        .ok_or(ChallengeError::NoBossesEnabled)?;

    let kills = rng.gen_range(boss.kill_range());
    debug!(
        boss = %boss.name,
        kills,
        candidates = enabled.len(),
        "generated challenge"
    );

    Ok(Challenge {
        boss: boss.name.clone(),
        kills,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
