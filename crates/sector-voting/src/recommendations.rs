//! Recommendation assembly: issue-attached advice plus threshold-gated
//! generic guidance, deduplicated in first-occurrence order.

use sector_core::models::{ConsistencyChecks, QualityMetrics, ValidationIssue};
use sector_core::stats;

pub fn generate(
    issues: &[ValidationIssue],
    quality: &QualityMetrics,
    consistency: &ConsistencyChecks,
    validation_score: f64,
) -> Vec<String> {
    let mut recommendations: Vec<String> = issues
        .iter()
        .filter_map(|i| i.recommendation.clone())
        .collect();

    if quality.result_completeness < 0.5 {
        recommendations
            .push("most strategies produced no results; broaden their inputs".to_string());
    }
    if quality.code_format_compliance < 1.0 {
        recommendations
            .push("some final results carry malformed codes; check the code store".to_string());
    }
    if consistency.cross_strategy_agreement < 0.5 {
        recommendations
            .push("review strategy configuration; vote sets barely overlap".to_string());
    }
    if validation_score < 0.7 {
        recommendations.push("review voting configuration and strategy weights".to_string());
    }

    stats::dedup_preserving_order(recommendations)
}
