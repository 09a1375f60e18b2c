//! VotingValidator — runs all checks against a voting result and the raw
//! votes, aggregates issues into a score, and derives validity.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{
    ConsistencyChecks, IssueType, QualityMetrics, Severity, StrategyVote, ValidationIssue,
    VotingResult, VotingValidationResult,
};

use crate::checks::{self, CheckReport};
use crate::{recommendations, score};

/// Validator for consensus voting results.
///
/// Never errors: invalid input is reported as a single critical issue
/// inside a fully-populated result, so callers always get the same shape
/// back.
pub struct VotingValidator {
    config: VotingValidationConfig,
}

impl VotingValidator {
    pub fn new(config: VotingValidationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &VotingValidationConfig {
        &self.config
    }

    /// Validate a voting result against the votes that produced it.
    ///
    /// `result` is an `Option` so a missing consensus object reports as
    /// an input-validation failure rather than a type-level impossibility.
    pub fn validate(
        &self,
        result: Option<&VotingResult>,
        votes: &[StrategyVote],
    ) -> VotingValidationResult {
        let Some(result) = result else {
            return input_failure("voting result is missing");
        };
        if votes.is_empty() {
            return input_failure("no strategy votes were provided");
        }

        let mut report = CheckReport::new();
        report.merge(checks::basic::check(result, votes, &self.config));

        let quality = checks::quality::compute(result, votes, &self.config);

        let (consistency, consistency_report) =
            checks::consistency::check(result, votes, &self.config);
        report.merge(consistency_report);

        report.merge(checks::anomaly::check(votes, &self.config));
        report.merge(checks::cross_validation::check(result, votes, &self.config));
        report.merge(checks::statistical::check(result, votes, &self.config));
        report.merge(checks::temporal::check(votes, &self.config));

        let validation_score =
            score::compute(&report.issues, &report.warnings, &quality, &consistency);
        let is_valid = score::is_valid(&report.issues, validation_score, &self.config);
        let recommendations = recommendations::generate(
            &report.issues,
            &quality,
            &consistency,
            validation_score,
        );

        if is_valid {
            tracing::debug!(
                event = "voting_validated",
                round_id = %result.round_id,
                validation_score,
                issues = report.issues.len(),
                warnings = report.warnings.len(),
                "voting result validated"
            );
        } else {
            tracing::warn!(
                event = "voting_invalid",
                round_id = %result.round_id,
                validation_score,
                issues = report.issues.len(),
                "voting result failed validation"
            );
        }

        VotingValidationResult {
            is_valid,
            validation_score,
            issues: report.issues,
            warnings: report.warnings,
            quality,
            consistency,
            recommendations,
        }
    }
}

impl Default for VotingValidator {
    fn default() -> Self {
        Self::new(VotingValidationConfig::default())
    }
}

/// A fully-populated invalid result carrying one critical issue.
fn input_failure(message: &str) -> VotingValidationResult {
    tracing::warn!(event = "voting_input_invalid", message, "voting validation rejected input");
    VotingValidationResult {
        is_valid: false,
        validation_score: 0.0,
        issues: vec![ValidationIssue {
            issue_type: IssueType::InputValidation,
            severity: Severity::Critical,
            message: message.to_string(),
            recommendation: Some(
                "provide a voting result and at least one strategy vote".to_string(),
            ),
        }],
        warnings: Vec::new(),
        quality: QualityMetrics::default(),
        consistency: ConsistencyChecks::default(),
        recommendations: vec![
            "provide a voting result and at least one strategy vote".to_string(),
        ],
    }
}
