//! Overall validation score and the validity rule.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{
    ConsistencyChecks, IssueType, QualityMetrics, Severity, ValidationIssue, ValidationWarning,
};
use sector_core::stats;

/// Score deductions per issue severity.
const CRITICAL_PENALTY: f64 = 0.3;
const ERROR_PENALTY: f64 = 0.2;
const WARNING_ISSUE_PENALTY: f64 = 0.1;
/// Deduction per advisory warning entry.
const WARNING_PENALTY: f64 = 0.05;

/// Start at 1.0, deduct per issue/warning, then average in quality and
/// consistency once each, clamped to [0, 1].
pub fn compute(
    issues: &[ValidationIssue],
    warnings: &[ValidationWarning],
    quality: &QualityMetrics,
    consistency: &ConsistencyChecks,
) -> f64 {
    let mut score: f64 = 1.0;

    for issue in issues {
        score -= match issue.severity {
            Severity::Critical => CRITICAL_PENALTY,
            Severity::Error => ERROR_PENALTY,
            Severity::Warning => WARNING_ISSUE_PENALTY,
        };
    }
    score -= WARNING_PENALTY * warnings.len() as f64;

    score = (score + quality.overall_quality) / 2.0;

    let consistency_mean = stats::mean(&[
        consistency.cross_strategy_agreement,
        consistency.confidence_consistency,
        consistency.result_stability,
    ]);
    score = (score + consistency_mean) / 2.0;

    score.clamp(0.0, 1.0)
}

/// A result is valid when no issue is critical, no issue concerns the
/// result count (a hard business rule, not score-driven), and either no
/// issues exist at all or the score clears the configured floor.
pub fn is_valid(
    issues: &[ValidationIssue],
    validation_score: f64,
    config: &VotingValidationConfig,
) -> bool {
    let has_critical = issues.iter().any(|i| i.severity == Severity::Critical);
    let has_count_issue = issues
        .iter()
        .any(|i| i.issue_type == IssueType::ResultCount);
    if has_critical || has_count_issue {
        return false;
    }
    issues.is_empty() || validation_score >= config.min_validity_score
}
