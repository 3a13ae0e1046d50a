//! JSON-file [`ConfigRepository`].
//!
//! The file is a flat JSON object of boss name to boolean, the same layout
//! earlier versions of the tracker wrote:
//!
//! ```json
//! {
//!   "Zulrah": true,
//!   "Giant Mole": false
//! }
//! ```

use std::path::PathBuf;

use boss_core::BossConfig;

use super::json_file::{read_json, write_json_atomic};
use crate::application::{ConfigRepository, StoreError};

#[derive(Debug, Clone)]
pub struct JsonConfigRepository {
    path: PathBuf,
}

impl JsonConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Option<BossConfig>, StoreError> {
        read_json(&self.path)
    }

    fn save(&self, config: &BossConfig) -> Result<(), StoreError> {
        write_json_atomic(&self.path, config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
