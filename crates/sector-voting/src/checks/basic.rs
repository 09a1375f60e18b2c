//! Basic threshold checks: result count bounds, aggregate metric minimums,
//! and per-result confidence bounds.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{
    IssueType, Severity, StrategyVote, ValidationIssue, ValidationWarning, VotingResult,
};

use super::CheckReport;

pub fn check(
    result: &VotingResult,
    _votes: &[StrategyVote],
    config: &VotingValidationConfig,
) -> CheckReport {
    let mut report = CheckReport::new();
    let count = result.final_results.len();

    if count < config.min_result_count {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::ResultCount,
            severity: Severity::Error,
            message: format!(
                "voting produced {count} result(s), below the minimum {}",
                config.min_result_count
            ),
            recommendation: Some(
                "engage additional classification strategies for this request".to_string(),
            ),
        });
    } else if count > config.max_result_count {
        report.warnings.push(ValidationWarning {
            message: format!(
                "voting produced {count} results, above the maximum {}",
                config.max_result_count
            ),
            strategy: None,
        });
    }

    for (metric, value, minimum, issue_type) in [
        (
            "voting score",
            result.voting_score,
            config.min_voting_score,
            IssueType::VotingScore,
        ),
        (
            "agreement",
            result.agreement,
            config.min_agreement,
            IssueType::Agreement,
        ),
        (
            "consistency",
            result.consistency,
            config.min_consistency,
            IssueType::Consistency,
        ),
    ] {
        if value < minimum {
            report.issues.push(ValidationIssue {
                issue_type,
                severity: Severity::Error,
                message: format!("{metric} {value:.2} is below the minimum {minimum:.2}"),
                recommendation: Some(format!(
                    "investigate why strategies disagree; {metric} should reach {minimum:.2}"
                )),
            });
        }
    }

    for (index, final_result) in result.final_results.iter().enumerate() {
        let confidence = final_result.confidence;
        if confidence < config.min_confidence_threshold
            || confidence > config.max_confidence_threshold
        {
            report.warnings.push(ValidationWarning {
                message: format!(
                    "result {index} confidence {confidence:.2} is outside [{:.2}, {:.2}]",
                    config.min_confidence_threshold, config.max_confidence_threshold
                ),
                strategy: None,
            });
        }
    }

    report
}
