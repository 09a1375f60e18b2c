//! Criterion benchmarks for sector-scoring.
//!
//! Targets:
//! - Single score (cold history) < 0.1ms
//! - Single score against 1000-entry history < 0.5ms

use criterion::{criterion_group, criterion_main, Criterion};

use sector_scoring::ConfidenceScorer;
use test_fixtures::{make_result, programming_services_code, tech_solutions_request};

fn bench_score_cold(c: &mut Criterion) {
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();

    c.bench_function("score_cold_history", |b| {
        b.iter(|| {
            let scorer = ConfidenceScorer::default();
            scorer.score(&result, &request).expect("scoring succeeds")
        })
    });
}

fn bench_score_warm(c: &mut Criterion) {
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();
    let scorer = ConfidenceScorer::default();
    for _ in 0..1000 {
        scorer.score(&result, &request).expect("scoring succeeds");
    }

    c.bench_function("score_full_history", |b| {
        b.iter(|| scorer.score(&result, &request).expect("scoring succeeds"))
    });
}

criterion_group!(benches, bench_score_cold, bench_score_warm);
criterion_main!(benches);
