//! Integration tests for boss-core.
//!
//! These exercise the catalog, config, generator, and history helpers together
//! through the public crate API, the same way `boss-server` drives them.

use boss_core::{
    generate, recent, BossCatalog, BossConfig, ChallengeError, CompletionRequest, HistoryRecord,
    DEFAULT_HISTORY_LIMIT,
};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn timestamp(s: &str) -> NaiveDateTime {
    s.parse().expect("valid timestamp")
}

/// Disabling every boss except Zulrah means every generated challenge is a
/// Zulrah challenge within 20..=50.
#[test]
fn test_only_zulrah_enabled_yields_zulrah_challenges() {
    // Arrange
    let catalog = BossCatalog::standard();
    let mut config = BossConfig::all_enabled(&catalog);
    for name in catalog.names().filter(|n| *n != "Zulrah") {
        config.toggle(&catalog, name).expect("known boss");
    }
    let mut rng = rand::thread_rng();

    // Act / Assert
    for _ in 0..50 {
        let challenge = generate(&catalog, &config, &mut rng).expect("Zulrah is enabled");
        assert_eq!(challenge.boss, "Zulrah");
        assert!((20..=50).contains(&challenge.kills));
    }
}

/// Every boss, enabled alone, produces only itself and only in-range targets.
#[test]
fn test_each_boss_alone_stays_within_its_range() {
    let catalog = BossCatalog::standard();
    let mut rng = StdRng::seed_from_u64(2024);

    for boss in catalog.list_all() {
        let config: BossConfig = catalog
            .names()
            .map(|n| (n.to_string(), n == boss.name))
            .collect();

        for _ in 0..1000 {
            let challenge = generate(&catalog, &config, &mut rng).unwrap();
            assert_eq!(challenge.boss, boss.name);
            assert!(boss.kill_range().contains(&challenge.kills));
        }
    }
}

/// Toggling every boss off through the public API leaves nothing to generate.
#[test]
fn test_toggling_everything_off_disables_generation() {
    let catalog = BossCatalog::standard();
    let mut config = BossConfig::new();
    let names: Vec<String> = catalog.names().map(str::to_string).collect();
    for name in &names {
        assert_eq!(config.toggle(&catalog, name), Ok(false));
    }

    let result = generate(&catalog, &config, &mut StdRng::seed_from_u64(0));

    assert_eq!(result, Err(ChallengeError::NoBossesEnabled));
}

/// A Yama completion on an empty log is the only record returned.
#[test]
fn test_single_completion_is_the_whole_recent_history() {
    // Arrange
    let catalog = BossCatalog::standard();
    let completed = timestamp("2024-01-01T00:00:00");
    let mut log: Vec<HistoryRecord> = Vec::new();

    // Act
    let record = CompletionRequest::new("Yama", 12)
        .into_record(&catalog, completed)
        .unwrap();
    log.push(record.clone());

    // Assert
    assert_eq!(recent(&log, DEFAULT_HISTORY_LIMIT), &[record]);
}

/// After 25 completions the default window holds records 6..=25.
#[test]
fn test_recent_window_after_twenty_five_completions() {
    let catalog = BossCatalog::standard();
    let log: Vec<HistoryRecord> = (1..=25)
        .map(|k| {
            CompletionRequest::new("Doom", k)
                .into_record(&catalog, timestamp("2024-06-01T12:00:00"))
                .unwrap()
        })
        .collect();

    let window = recent(&log, DEFAULT_HISTORY_LIMIT);

    assert_eq!(window.len(), 20);
    assert_eq!(window.first().unwrap().kills, Some(6));
    assert_eq!(window.last().unwrap().kills, Some(25));
}

/// Config and history survive a JSON round-trip unchanged.
#[test]
fn test_config_and_history_json_round_trip() {
    let catalog = BossCatalog::standard();
    let mut config = BossConfig::all_enabled(&catalog);
    config.toggle(&catalog, "Duke").unwrap();
    let history = vec![HistoryRecord {
        boss: "Duke".to_string(),
        kills: Some(33),
        completed: timestamp("2025-02-14T09:30:15.250"),
    }];

    let config_back: BossConfig =
        serde_json::from_str(&serde_json::to_string_pretty(&config).unwrap()).unwrap();
    let history_back: Vec<HistoryRecord> =
        serde_json::from_str(&serde_json::to_string_pretty(&history).unwrap()).unwrap();

    assert_eq!(config_back, config);
    assert_eq!(history_back, history);
}
