// Criterion benchmarks for RestStop

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reststop::core::{distance::haversine_distance, Coordinate, Ranker, Responder};
use reststop::models::{FilterCriteria, RankQuery, Restroom, SortKey};
use reststop::services::Catalog;

/// Tile the bundled catalog out to `count` records with unique ids
fn scaled_records(base: &[Restroom], count: usize) -> Vec<Restroom> {
    (0..count)
        .map(|i| {
            let mut restroom = base[i % base.len()].clone();
            restroom.id = i.to_string();
            restroom.latitude += (i / base.len()) as f64 * 0.001;
            restroom
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(11.0168),
                black_box(76.9558),
                black_box(11.0120),
                black_box(76.9523),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let ranker = Ranker::default();
    let origin = Coordinate::new(11.0168, 76.9558).expect("valid origin");

    let mut group = c.benchmark_group("ranking");

    for record_count in [32, 100, 500, 1000].iter() {
        let records = scaled_records(catalog.records(), *record_count);
        let query = RankQuery::new(origin)
            .with_text("coimbatore")
            .with_criteria(FilterCriteria {
                open_now_only: true,
                min_cleanliness: 2.5,
                ..Default::default()
            });

        group.bench_with_input(
            BenchmarkId::new("search", record_count),
            record_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&records), black_box(&query)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearby_by_cleanliness", record_count),
            record_count,
            |b, _| {
                b.iter(|| {
                    ranker.nearby(
                        black_box(&records),
                        black_box(origin),
                        SortKey::Cleanliness,
                        Some(10),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_responder(c: &mut Criterion) {
    let responder = Responder::default();

    c.bench_function("respond_fallback", |b| {
        b.iter(|| responder.respond(black_box("where can I go around Gandhipuram?")).len());
    });
}

criterion_group!(benches, bench_haversine_distance, bench_ranking, bench_responder);

criterion_main!(benches);
