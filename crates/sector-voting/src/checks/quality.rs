//! Quality metrics over the voting round: completeness, reliability,
//! consistency, and code format compliance.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{QualityMetrics, StrategyVote, VotingResult};
use sector_core::stats;

use super::matching_confidences;

/// Reliability assigned when only one vote matched a result — a single
/// observation says nothing about variance either way.
const SINGLE_VOTE_RELIABILITY: f64 = 0.5;

pub fn compute(
    result: &VotingResult,
    votes: &[StrategyVote],
    config: &VotingValidationConfig,
) -> QualityMetrics {
    let result_completeness = if votes.is_empty() {
        0.0
    } else {
        let contributing = votes.iter().filter(|v| !v.results.is_empty()).count();
        contributing as f64 / votes.len() as f64
    };

    let confidence_reliability = {
        let per_result: Vec<f64> = result
            .final_results
            .iter()
            .filter_map(|r| r.code.as_ref())
            .map(|code| {
                let confidences = matching_confidences(&code.identity_owned(), votes);
                match confidences.len() {
                    0 => 0.0,
                    1 => SINGLE_VOTE_RELIABILITY,
                    _ => 1.0 - stats::variance(&confidences).min(1.0),
                }
            })
            .collect();
        stats::mean(&per_result)
    };

    let strategy_consistency = {
        let per_result: Vec<f64> = result
            .final_results
            .iter()
            .filter_map(|r| r.code.as_ref())
            .map(|code| {
                let identity = code.identity_owned();
                let voted = votes
                    .iter()
                    .filter(|v| {
                        v.results.iter().any(|r| {
                            r.code.as_ref().is_some_and(|c| c.identity_owned() == identity)
                        })
                    })
                    .count();
                if votes.is_empty() {
                    0.0
                } else {
                    voted as f64 / votes.len() as f64
                }
            })
            .collect();
        stats::mean(&per_result)
    };

    let code_format_compliance = {
        if result.final_results.is_empty() {
            0.0
        } else {
            let compliant = result
                .final_results
                .iter()
                .filter(|r| {
                    r.code.as_ref().is_some_and(|c| {
                        !c.code.trim().is_empty()
                            && (!config.require_description || !c.description.trim().is_empty())
                    })
                })
                .count();
            compliant as f64 / result.final_results.len() as f64
        }
    };

    let overall_quality = stats::mean(&[
        result_completeness,
        confidence_reliability,
        strategy_consistency,
        code_format_compliance,
    ]);

    QualityMetrics {
        result_completeness,
        confidence_reliability,
        strategy_consistency,
        code_format_compliance,
        overall_quality,
    }
}
