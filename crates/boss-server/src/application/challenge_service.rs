//! ChallengeService: the operations behind each API endpoint.
//!
//! The service owns the catalog and both stores and exposes one method per
//! endpoint.  It depends only on the repository traits, so it runs unchanged
//! against JSON files in production and in-memory repositories in tests.
//!
//! All methods are synchronous and may block on file I/O; the HTTP layer
//! calls them from Tokio's blocking pool.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::{debug, info};

use boss_core::{generate, BossCatalog, Challenge, CompletionRequest, HistoryRecord};

use super::config_store::ConfigStore;
use super::error::ServiceError;
use super::history_log::HistoryLog;
use super::repository::{ConfigRepository, HistoryRepository};
use crate::domain::BossStatus;

pub struct ChallengeService {
    catalog: Arc<BossCatalog>,
    config: ConfigStore,
    history: HistoryLog,
    history_limit: usize,
}

impl ChallengeService {
    pub fn new(
        catalog: BossCatalog,
        config_repo: Arc<dyn ConfigRepository>,
        history_repo: Arc<dyn HistoryRepository>,
        history_limit: usize,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            config: ConfigStore::new(config_repo, Arc::clone(&catalog)),
            history: HistoryLog::new(history_repo),
            catalog,
            history_limit,
        }
    }

    pub fn catalog(&self) -> &BossCatalog {
        &self.catalog
    }

    /// `GET /api/bosses`: every catalog boss with its current flag, in catalog order.
    pub fn list_bosses(&self) -> Result<Vec<BossStatus>, ServiceError> {
        let config = self.config.load()?;
        Ok(self
            .catalog
            .list_all()
            .iter()
            .map(|boss| BossStatus::from_definition(boss, &config))
            .collect())
    }

    /// `POST /api/toggle/{name}`: flips one boss and returns its new flag.
    pub fn toggle(&self, name: &str) -> Result<bool, ServiceError> {
        self.config.toggle(name)
    }

    /// `GET /api/generate` with the thread-local random source.
    pub fn generate(&self) -> Result<Challenge, ServiceError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a challenge from the current config using `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Challenge, ServiceError> {
        let config = self.config.load()?;
        let challenge = generate(&self.catalog, &config, rng)?;
        info!(boss = %challenge.boss, kills = challenge.kills, "generated challenge");
        Ok(challenge)
    }

    /// `POST /api/complete`: validates and records a completion stamped now.
    pub fn complete(&self, request: CompletionRequest) -> Result<HistoryRecord, ServiceError> {
        self.complete_at(request, Local::now().naive_local())
    }

    /// Validates `request` and appends it with the given timestamp.
    ///
    /// # Errors
    ///
    /// [`ServiceError::InvalidRequest`] when the boss is unknown or the kill
    /// count is not positive; nothing is written in that case.
    pub fn complete_at(
        &self,
        request: CompletionRequest,
        completed: NaiveDateTime,
    ) -> Result<HistoryRecord, ServiceError> {
        let record = request.into_record(&self.catalog, completed)?;
        self.history.append(record.clone())?;
        Ok(record)
    }

    /// `GET /api/history`: the configured number of most recent records.
    pub fn recent_history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
        let records = self.history.recent(self.history_limit)?;
        debug!(count = records.len(), limit = self.history_limit, "loaded history");
        Ok(records)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::memory::{
        InMemoryConfigRepository, InMemoryHistoryRepository,
    };
    use boss_core::{BossConfig, CompletionError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn service() -> (ChallengeService, Arc<InMemoryHistoryRepository>) {
        let history = Arc::new(InMemoryHistoryRepository::new());
        let service = ChallengeService::new(
            BossCatalog::standard(),
            Arc::new(InMemoryConfigRepository::new()),
            history.clone(),
            20,
        );
        (service, history)
    }

    fn ts(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_list_bosses_reports_catalog_order_and_flags() {
        // Arrange
        let (service, _) = service();
        service.toggle("Giant Mole").unwrap();

        // Act
        let bosses = service.list_bosses().unwrap();

        // Assert
        assert_eq!(bosses.len(), 15);
        assert_eq!(bosses[0].name, "Zulrah");
        assert_eq!(bosses[2].name, "Giant Mole");
        assert!(!bosses[2].enabled);
        assert!(bosses.iter().filter(|b| b.name != "Giant Mole").all(|b| b.enabled));
    }

    #[test]
    fn test_list_bosses_treats_missing_entries_as_enabled() {
        // A saved map that predates some bosses.
        let config_repo = Arc::new(InMemoryConfigRepository::with_config(
            [("Zulrah".to_string(), false)].into_iter().collect::<BossConfig>(),
        ));
        let service = ChallengeService::new(
            BossCatalog::standard(),
            config_repo,
            Arc::new(InMemoryHistoryRepository::new()),
            20,
        );

        let bosses = service.list_bosses().unwrap();

        assert!(!bosses[0].enabled);
        assert!(bosses[1..].iter().all(|b| b.enabled));
    }

    #[test]
    fn test_generate_with_every_boss_disabled_fails() {
        let (service, _) = service();
        let names: Vec<String> = service.catalog().names().map(str::to_string).collect();
        for name in &names {
            service.toggle(name).unwrap();
        }

        let result = service.generate();

        assert!(matches!(result, Err(ServiceError::NoBossesEnabled)));
    }

    #[test]
    fn test_generate_only_zulrah_enabled() {
        // Arrange
        let (service, _) = service();
        let others: Vec<String> = service
            .catalog()
            .names()
            .filter(|n| *n != "Zulrah")
            .map(str::to_string)
            .collect();
        for name in &others {
            service.toggle(name).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(11);

        // Act / Assert
        for _ in 0..50 {
            let challenge = service.generate_with(&mut rng).unwrap();
            assert_eq!(challenge.boss, "Zulrah");
            assert!((20..=50).contains(&challenge.kills));
        }
    }

    #[test]
    fn test_complete_at_records_exact_request() {
        // Arrange
        let (service, _) = service();
        let completed = ts("2024-01-01T00:00:00");

        // Act
        service
            .complete_at(CompletionRequest::new("Yama", 12), completed)
            .unwrap();

        // Assert
        assert_eq!(
            service.recent_history().unwrap(),
            vec![HistoryRecord {
                boss: "Yama".to_string(),
                kills: Some(12),
                completed,
            }]
        );
    }

    #[test]
    fn test_complete_stamps_current_local_time() {
        let (service, _) = service();
        let before = Local::now().naive_local();

        let record = service.complete(CompletionRequest::new("Doom", 7)).unwrap();

        let after = Local::now().naive_local();
        assert!(before <= record.completed && record.completed <= after);
    }

    #[test]
    fn test_complete_rejects_invalid_request_without_writing() {
        // Arrange
        let (service, history) = service();

        // Act
        let unknown = service.complete(CompletionRequest::new("Obor", 3));
        let negative = service.complete(CompletionRequest::new("Zulrah", -4));

        // Assert
        assert!(matches!(
            unknown,
            Err(ServiceError::InvalidRequest(CompletionError::UnknownBoss(_)))
        ));
        assert!(matches!(
            negative,
            Err(ServiceError::InvalidRequest(CompletionError::InvalidKills(-4)))
        ));
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn test_recent_history_honours_configured_limit() {
        let service = ChallengeService::new(
            BossCatalog::standard(),
            Arc::new(InMemoryConfigRepository::new()),
            Arc::new(InMemoryHistoryRepository::new()),
            3,
        );
        for kills in 1..=5 {
            service
                .complete_at(CompletionRequest::new("Duke", kills), ts("2024-02-02T10:00:00"))
                .unwrap();
        }

        let kills: Vec<Option<u32>> =
            service.recent_history().unwrap().iter().map(|r| r.kills).collect();

        assert_eq!(kills, vec![Some(3), Some(4), Some(5)]);
    }
}
