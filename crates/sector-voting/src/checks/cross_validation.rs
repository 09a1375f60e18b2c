//! Leave-one-out cross-validation: the consensus should survive the
//! removal of any single strategy.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{
    IssueType, Severity, StrategyVote, ValidationIssue, VotingResult,
};
use sector_core::stats;

use super::{code_identities, set_overlap, CheckReport};

/// Leave-one-out needs at least two strategies.
const MIN_VOTERS: usize = 2;

pub fn check(
    result: &VotingResult,
    votes: &[StrategyVote],
    config: &VotingValidationConfig,
) -> CheckReport {
    let mut report = CheckReport::new();
    if !config.enable_cross_validation
        || votes.len() < MIN_VOTERS
        || result.final_results.is_empty()
    {
        return report;
    }

    let final_set = code_identities(&result.final_results);

    let agreements: Vec<f64> = (0..votes.len())
        .map(|left_out| {
            let mut remaining = std::collections::HashSet::new();
            for (i, vote) in votes.iter().enumerate() {
                if i != left_out {
                    remaining.extend(code_identities(&vote.results));
                }
            }
            set_overlap(&remaining, &final_set)
        })
        .collect();

    let mean_agreement = stats::mean(&agreements);
    if mean_agreement < config.cross_validation_threshold {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::CrossValidation,
            severity: Severity::Error,
            message: format!(
                "leave-one-out agreement {mean_agreement:.2} is below {:.2}; the consensus depends on a single strategy",
                config.cross_validation_threshold
            ),
            recommendation: Some(
                "add independent strategies so no single vote dominates".to_string(),
            ),
        });
    }

    report
}
