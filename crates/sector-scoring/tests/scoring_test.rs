//! Tests for sector-scoring: level boundaries, factor behavior, the
//! layered metrics, history eviction, and the end-to-end scenario.

use std::sync::Arc;

use sector_core::models::{
    CodeType, ConfidenceLevel, PerformanceBand, ValidationStatus,
};
use sector_core::ScoringConfig;
use sector_scoring::engine::confidence_level;
use sector_scoring::{benchmark, calibration, statistics, ConfidenceScorer, ScoreHistory};
use test_fixtures::{
    make_code, make_request, make_result, programming_services_code, tech_solutions_request,
};

// ─── Confidence levels ───

#[test]
fn level_cutoffs_are_inclusive_on_the_upper_side() {
    assert_eq!(confidence_level(0.95), ConfidenceLevel::VeryHigh);
    assert_eq!(confidence_level(0.9), ConfidenceLevel::VeryHigh);
    assert_eq!(confidence_level(0.85), ConfidenceLevel::High);
    assert_eq!(confidence_level(0.7), ConfidenceLevel::High);
    assert_eq!(confidence_level(0.65), ConfidenceLevel::Medium);
    assert_eq!(confidence_level(0.5), ConfidenceLevel::Medium);
    assert_eq!(confidence_level(0.35), ConfidenceLevel::Low);
    assert_eq!(confidence_level(0.3), ConfidenceLevel::Low);
    assert_eq!(confidence_level(0.15), ConfidenceLevel::VeryLow);
}

// ─── Input validation ───

#[test]
fn result_without_code_is_rejected() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(None, 0.8);
    let request = tech_solutions_request();

    let err = scorer.score(&result, &request);
    assert!(err.is_err());
}

// ─── End-to-end scenario ───

#[test]
fn software_business_scores_high_against_naics_541511() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();

    let score = scorer.score(&result, &request).expect("scoring succeeds");

    assert!(
        score.overall_score > 0.7,
        "expected high band, got {}",
        score.overall_score
    );
    assert_eq!(score.confidence_level, ConfidenceLevel::High);
    assert_eq!(score.validation_status, ValidationStatus::Valid);
    assert!(score.factors.keyword_match > 0.9);
    assert!(score.factors.text_match > 0.9);
}

#[test]
fn all_published_values_stay_in_unit_range() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();

    let score = scorer.score(&result, &request).expect("scoring succeeds");

    assert!((0.0..=1.0).contains(&score.overall_score));
    for factor in score.factors.as_array() {
        assert!((0.0..=1.0).contains(&factor));
    }
    assert!((0.0..=1.0).contains(&score.calibration.calibrated_score));
    assert!((0.0..=1.0).contains(&score.uncertainty.uncertainty_score));
    assert!((0.0..=1.0).contains(&score.uncertainty.stability_index));
    assert!((0.0..=1.0).contains(&score.cross_validation.mean_score));
    let metrics = &score.benchmark.benchmark_metrics;
    for value in [
        metrics.industry_benchmark,
        metrics.code_type_benchmark,
        metrics.historical_benchmark,
        metrics.peer_benchmark,
        metrics.overall_benchmark,
    ] {
        assert!((0.0..=1.0).contains(&value));
    }
}

// ─── Result validation status ───

#[test]
fn very_low_result_confidence_is_invalid() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.2);
    let request = tech_solutions_request();

    let score = scorer.score(&result, &request).expect("scoring succeeds");
    assert_eq!(score.validation_status, ValidationStatus::Invalid);
    assert_eq!(
        score
            .validation_messages
            .iter()
            .filter(|m| m.contains("0.30 minimum"))
            .count(),
        1
    );
}

#[test]
fn moderate_confidence_and_missing_name_each_warn() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.4);
    let mut request = tech_solutions_request();
    request.business_name.clear();

    let score = scorer.score(&result, &request).expect("scoring succeeds");
    assert_eq!(score.validation_status, ValidationStatus::Warning);
    assert!(score
        .validation_messages
        .iter()
        .any(|m| m.contains("warning threshold")));
    assert!(score
        .validation_messages
        .iter()
        .any(|m| m.contains("business name is missing")));
}

#[test]
fn unrelated_code_warns_about_unsupported_match() {
    let scorer = ConfidenceScorer::default();
    let code = make_code(
        "722511",
        CodeType::Naics,
        "Full-Service Restaurants",
        "Food Service",
        &["restaurant", "dining"],
        0.9,
    );
    let result = make_result(Some(code), 0.8);
    let request = make_request("Quantum Widgets", "precision widget manufacturing");

    let score = scorer.score(&result, &request).expect("scoring succeeds");
    assert_eq!(score.validation_status, ValidationStatus::Warning);
    assert!(score
        .validation_messages
        .iter()
        .any(|m| m.contains("unsupported")));
}

// ─── History ───

#[test]
fn history_keeps_exactly_the_newest_thousand() {
    let history = ScoreHistory::new();
    for i in 0..1100 {
        history.record(i as f64);
    }

    assert_eq!(history.len(), 1000);
    let snapshot = history.snapshot();
    assert_eq!(snapshot.first().copied(), Some(100.0));
    assert_eq!(snapshot.last().copied(), Some(1099.0));
}

#[test]
fn every_successful_score_lands_in_history() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();

    assert!(scorer.history().is_empty());
    for _ in 0..3 {
        scorer.score(&result, &request).expect("scoring succeeds");
    }
    assert_eq!(scorer.history().len(), 3);
}

#[test]
fn scorers_can_share_one_history() {
    let shared = Arc::new(ScoreHistory::new());
    let a = ConfidenceScorer::new(ScoringConfig::default()).with_history(Arc::clone(&shared));
    let b = ConfidenceScorer::new(ScoringConfig::default()).with_history(Arc::clone(&shared));

    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();
    a.score(&result, &request).expect("scoring succeeds");
    b.score(&result, &request).expect("scoring succeeds");

    assert_eq!(shared.len(), 2);
}

// ─── Calibration ───

#[test]
fn calibration_without_history_passes_through() {
    let data = calibration::calibrate(0.8, &[], 0.2);
    assert_eq!(data.calibrated_score, 0.8);
    assert_eq!(data.calibration_method, "none");
    assert_eq!(data.calibration_quality, 0.0);
}

#[test]
fn calibration_pulls_toward_the_historical_mean() {
    let history = vec![0.5; 20];
    let data = calibration::calibrate(0.9, &history, 0.2);
    assert_eq!(data.calibration_method, "historical_performance");
    assert!(data.calibrated_score < 0.9);
    assert!(data.calibrated_score > 0.5);
    // quality = 20 / (20 + 20)
    assert!((data.calibration_quality - 0.5).abs() < 1e-9);
}

// ─── Statistics ───

#[test]
fn statistics_degrade_gracefully_below_two_samples() {
    let metrics = statistics::compute(0.7, &[0.6]);
    assert_eq!(metrics.z_score, 0.0);
    assert_eq!(metrics.p_value, 1.0);
    assert_eq!(metrics.confidence_interval, (0.7, 0.7));
    assert!(metrics.is_statistically_valid);
}

#[test]
fn score_at_the_historical_mean_has_zero_z() {
    let history = vec![0.6, 0.8, 0.7, 0.6, 0.8];
    let metrics = statistics::compute(0.7, &history);
    assert!(metrics.z_score.abs() < 1e-9);
    assert!(metrics.p_value > 0.99);
}

// ─── Cross-validation ───

#[test]
fn weight_perturbation_folds_are_tight() {
    let scorer = ConfidenceScorer::default();
    let result = make_result(Some(programming_services_code()), 0.85);
    let request = tech_solutions_request();

    let score = scorer.score(&result, &request).expect("scoring succeeds");
    assert_eq!(score.cross_validation.fold_scores.len(), 5);
    assert!(score.cross_validation.is_stable);
    assert!(score.cross_validation.std_deviation < 0.05);
}

// ─── Benchmarking ───

#[test]
fn known_category_uses_its_industry_benchmark() {
    let engine = benchmark::BenchmarkEngine::new();
    let code = programming_services_code();
    let request = tech_solutions_request();

    let data = engine.compute(0.8, &code, &request, &[]);
    assert!((data.benchmark_metrics.industry_benchmark - 0.82).abs() < 1e-9);
    assert!((data.benchmark_metrics.code_type_benchmark - 0.80).abs() < 1e-9);
    // No history: historical benchmark is neutral, percentile is median.
    assert!((data.benchmark_metrics.historical_benchmark - 0.5).abs() < 1e-9);
    assert_eq!(data.benchmark_percentile, 50.0);
}

#[test]
fn percentile_ranks_against_history() {
    let engine = benchmark::BenchmarkEngine::new();
    let code = programming_services_code();
    let request = tech_solutions_request();
    let history: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();

    let data = engine.compute(0.75, &code, &request, &history);
    assert_eq!(data.benchmark_percentile, 80.0);
}

#[test]
fn nudge_applies_only_above_the_quality_threshold() {
    let engine = benchmark::BenchmarkEngine::new();
    let code = programming_services_code();
    let request = tech_solutions_request();

    // Short history: quality stays at the floor, no nudge either way.
    let sparse = engine.compute(0.95, &code, &request, &[0.5; 5]);
    assert_eq!(benchmark::apply_nudge(0.95, &sparse, 0.70), 0.95);

    // Long low history: quality clears the threshold; an excellent gap
    // nudges the score up 2%.
    let history = vec![0.4; 200];
    let rich = engine.compute(0.95, &code, &request, &history);
    assert_eq!(
        rich.comparison.overall_performance,
        PerformanceBand::Excellent
    );
    let nudged = benchmark::apply_nudge(0.95, &rich, 0.70);
    assert!(nudged > 0.95);
    assert!(nudged <= 1.0);
}

// ─── Recommendations ───

#[test]
fn weak_factors_produce_deduplicated_recommendations() {
    let scorer = ConfidenceScorer::default();
    let code = make_code(
        "5399",
        CodeType::Sic,
        "General Merchandise Stores",
        "Retail",
        &["merchandise"],
        0.5,
    );
    let result = make_result(Some(code), 0.6);
    let request = make_request("Acme Holdings", "diversified operations");

    let score = scorer.score(&result, &request).expect("scoring succeeds");
    assert!(!score.recommendations.is_empty());
    let mut unique = score.recommendations.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), score.recommendations.len());
}
