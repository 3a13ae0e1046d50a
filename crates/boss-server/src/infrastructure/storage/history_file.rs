//! JSON-file [`HistoryRepository`].
//!
//! The file is a JSON array of records in completion order:
//!
//! ```json
//! [
//!   { "boss": "Yama", "kills": 12, "completed": "2024-01-01T00:00:00" }
//! ]
//! ```

use std::path::PathBuf;

use boss_core::HistoryRecord;

use super::json_file::{read_json, write_json_atomic};
use crate::application::{HistoryRepository, StoreError};

#[derive(Debug, Clone)]
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(read_json::<Vec<HistoryRecord>>(&self.path)?.unwrap_or_default())
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<(), StoreError> {
        write_json_atomic(&self.path, records)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(boss: &str, kills: u32, completed: &str) -> HistoryRecord {
        HistoryRecord {
            boss: boss.to_string(),
            kills: Some(kills),
            completed: completed.parse().unwrap(),
        }
    }

    #[test]
    fn test_load_without_file_returns_empty_log() {
        let dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::new(dir.path().join("boss_log.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::new(dir.path().join("boss_log.json"));
        let records = vec![
            record("Doom", 7, "2024-03-01T20:00:00"),
            record("Zulrah", 40, "2024-03-02T21:15:30.125"),
        ];

        // Act
        repo.save(&records).unwrap();

        // Assert
        assert_eq!(repo.load().unwrap(), records);
    }

    #[test]
    fn test_reads_log_with_microsecond_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boss_log.json");
        fs::write(
            &path,
            r#"[
  {"boss": "Yama", "kills": 14, "completed": "2025-05-04T19:02:33.918274"}
]"#,
        )
        .unwrap();

        let log = JsonHistoryRepository::new(&path).load().unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].boss, "Yama");
    }

    #[test]
    fn test_unvalidated_records_load_and_survive_an_append() {
        // Arrange: a log holding a completion that never sent a kill count
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boss_log.json");
        fs::write(
            &path,
            r#"[{"boss": "Yama", "kills": null, "completed": "2025-01-01T10:00:00.123456"}]"#,
        )
        .unwrap();
        let repo = JsonHistoryRepository::new(&path);

        // Act
        let mut log = repo.load().unwrap();
        log.push(record("Doom", 6, "2025-01-02T11:00:00"));
        repo.save(&log).unwrap();

        // Assert
        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].kills, None);
        assert_eq!(reloaded[1].kills, Some(6));
        assert!(fs::read_to_string(&path).unwrap().contains("\"kills\": null"));
    }

    #[test]
    fn test_record_without_timestamp_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boss_log.json");
        fs::write(&path, r#"[{"boss": "Yama", "kills": 4}]"#).unwrap();

        let result = JsonHistoryRepository::new(&path).load();

        assert!(result.unwrap_err().is_corrupt());
    }
}
