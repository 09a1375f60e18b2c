//! Simplified chi-square independence check: observed vote counts per
//! final result against a uniform-distribution null.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{StrategyVote, ValidationWarning, VotingResult};

use super::CheckReport;

/// The chi-square needs at least two voters to say anything.
const MIN_VOTERS: usize = 2;

pub fn check(
    result: &VotingResult,
    votes: &[StrategyVote],
    config: &VotingValidationConfig,
) -> CheckReport {
    let mut report = CheckReport::new();
    if !config.enable_statistical_validation
        || votes.len() < MIN_VOTERS
        || result.final_results.is_empty()
    {
        return report;
    }

    let observed: Vec<f64> = result
        .final_results
        .iter()
        .filter_map(|r| r.code.as_ref())
        .map(|code| {
            let identity = code.identity_owned();
            votes
                .iter()
                .filter(|v| {
                    v.results.iter().any(|r| {
                        r.code.as_ref().is_some_and(|c| c.identity_owned() == identity)
                    })
                })
                .count() as f64
        })
        .collect();

    let total: f64 = observed.iter().sum();
    if observed.is_empty() || total == 0.0 {
        return report;
    }

    let expected = total / observed.len() as f64;
    let chi_square: f64 = observed
        .iter()
        .map(|obs| (obs - expected).powi(2) / expected)
        .sum();

    if chi_square > config.statistical_significance {
        report.warnings.push(ValidationWarning {
            message: format!(
                "vote distribution deviates from uniform (chi-square {chi_square:.2}); strategies may not be independent"
            ),
            strategy: None,
        });
    }

    report
}
