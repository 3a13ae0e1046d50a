//! Criterion benchmarks for challenge generation.
//!
//! Run with:
//! ```bash
//! cargo bench --package boss-core --bench generate_bench
//! ```

use boss_core::{generate, recent, BossCatalog, BossConfig, HistoryRecord};
use chrono::NaiveDateTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate_all_enabled(c: &mut Criterion) {
    let catalog = BossCatalog::standard();
    let config = BossConfig::all_enabled(&catalog);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate_all_enabled", |b| {
        b.iter(|| generate(black_box(&catalog), black_box(&config), &mut rng))
    });
}

fn bench_generate_single_enabled(c: &mut Criterion) {
    let catalog = BossCatalog::standard();
    let config: BossConfig = catalog
        .names()
        .map(|n| (n.to_string(), n == "Doom"))
        .collect();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate_single_enabled", |b| {
        b.iter(|| generate(black_box(&catalog), black_box(&config), &mut rng))
    });
}

fn bench_recent_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("recent_window");
    let completed: NaiveDateTime = "2024-01-01T00:00:00".parse().unwrap();

    for size in [20usize, 1_000, 10_000] {
        let log: Vec<HistoryRecord> = (0..size)
            .map(|i| HistoryRecord {
                boss: "Zulrah".to_string(),
                kills: Some((i % 50 + 1) as u32),
                completed,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| recent(black_box(log), 20).len())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generate_all_enabled,
    bench_generate_single_enabled,
    bench_recent_window
);
criterion_main!(benches);
