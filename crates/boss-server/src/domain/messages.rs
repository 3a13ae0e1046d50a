//! JSON bodies for the HTTP API.
//!
//! These are the wire shapes the browser page depends on.  Core types that
//! already have the right shape ([`boss_core::Challenge`],
//! [`boss_core::HistoryRecord`], [`boss_core::CompletionRequest`]) are sent
//! as-is; the structs here cover the rest.
//!
//! ```json
//! GET  /api/bosses          [{"name":"Zulrah","enabled":true,"min_kills":20,"max_kills":50}, ...]
//! POST /api/toggle/Zulrah   {"success":true,"enabled":false}
//! GET  /api/generate        {"boss":"Zulrah","kills":37}
//! POST /api/complete        {"success":true}
//! ```

use serde::{Deserialize, Serialize};

use boss_core::{BossConfig, BossDefinition};

/// One row of `GET /api/bosses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossStatus {
    pub name: String,
    pub enabled: bool,
    pub min_kills: u32,
    pub max_kills: u32,
}

impl BossStatus {
    pub fn from_definition(boss: &BossDefinition, config: &BossConfig) -> Self {
        Self {
            name: boss.name.clone(),
            enabled: config.is_enabled(&boss.name),
            min_kills: boss.min_kills,
            max_kills: boss.max_kills,
        }
    }
}

/// Reply to `POST /api/toggle/{name}`.  `enabled` is omitted on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ToggleReply {
    pub fn toggled(enabled: bool) -> Self {
        Self {
            success: true,
            enabled: Some(enabled),
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            enabled: None,
        }
    }
}

/// Reply to `POST /api/complete`.  `error` is present only on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// Generic failure body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

impl ErrorReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
