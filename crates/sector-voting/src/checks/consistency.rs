//! Cross-strategy consistency: agreement, confidence variance, rank
//! stability, and the aggregate anomaly score.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{
    ConsistencyChecks, IssueType, Severity, StrategyVote, ValidationIssue, VotingResult,
};
use sector_core::stats;

use super::{code_identities, matching_confidences, set_overlap, vote_confidence, CheckReport};

/// Agreement below this is an error — strategies vote for different codes.
const AGREEMENT_FLOOR: f64 = 0.3;
/// Confidence consistency below this warns about divergent confidences.
const CONFIDENCE_CONSISTENCY_FLOOR: f64 = 0.5;
/// Rank stability below this warns about unstable orderings.
const STABILITY_FLOOR: f64 = 0.5;

/// Minimum voters for the anomaly distribution to mean anything.
const MIN_VOTERS_FOR_ANOMALY: usize = 3;

pub fn check(
    result: &VotingResult,
    votes: &[StrategyVote],
    config: &VotingValidationConfig,
) -> (ConsistencyChecks, CheckReport) {
    let mut report = CheckReport::new();

    let cross_strategy_agreement = pairwise_agreement(votes);
    let confidence_consistency = confidence_consistency(result, votes);
    let result_stability = rank_stability(result, votes);
    let anomaly_score = anomaly_score(votes, config.anomaly_threshold);

    if cross_strategy_agreement < AGREEMENT_FLOOR {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::Agreement,
            severity: Severity::Error,
            message: format!(
                "cross-strategy agreement {cross_strategy_agreement:.2} is below {AGREEMENT_FLOOR:.2}"
            ),
            recommendation: Some(
                "review strategy configuration; vote sets barely overlap".to_string(),
            ),
        });
    }
    if confidence_consistency < CONFIDENCE_CONSISTENCY_FLOOR {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::Consistency,
            severity: Severity::Warning,
            message: format!(
                "confidence consistency {confidence_consistency:.2} is below {CONFIDENCE_CONSISTENCY_FLOOR:.2}"
            ),
            recommendation: Some(
                "strategies disagree on how confident to be; recheck calibration".to_string(),
            ),
        });
    }
    if result_stability < STABILITY_FLOOR {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::Consistency,
            severity: Severity::Warning,
            message: format!(
                "result rank stability {result_stability:.2} is below {STABILITY_FLOOR:.2}"
            ),
            recommendation: Some(
                "final results rank very differently across strategies".to_string(),
            ),
        });
    }
    if anomaly_score > 0.0 {
        report.issues.push(ValidationIssue {
            issue_type: IssueType::Anomaly,
            severity: Severity::Error,
            message: format!(
                "strategy confidence anomaly detected (mean exceeding z {anomaly_score:.2})"
            ),
            recommendation: Some(
                "inspect the outlier strategy before trusting this round".to_string(),
            ),
        });
    }

    (
        ConsistencyChecks {
            cross_strategy_agreement,
            confidence_consistency,
            result_stability,
            anomaly_score,
        },
        report,
    )
}

/// Mean pairwise overlap between strategies' result-code sets.
/// A single strategy has nothing to disagree with.
fn pairwise_agreement(votes: &[StrategyVote]) -> f64 {
    if votes.len() < 2 {
        return 1.0;
    }
    let sets: Vec<_> = votes.iter().map(|v| code_identities(&v.results)).collect();
    let mut overlaps = Vec::new();
    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            overlaps.push(set_overlap(&sets[i], &sets[j]));
        }
    }
    stats::mean(&overlaps)
}

/// Mean per-result confidence agreement, over results matched by at
/// least two votes. Nothing qualifying means nothing disagrees.
fn confidence_consistency(result: &VotingResult, votes: &[StrategyVote]) -> f64 {
    let per_result: Vec<f64> = result
        .final_results
        .iter()
        .filter_map(|r| r.code.as_ref())
        .filter_map(|code| {
            let confidences = matching_confidences(&code.identity_owned(), votes);
            if confidences.len() < 2 {
                None
            } else {
                Some(1.0 - stats::variance(&confidences).min(1.0))
            }
        })
        .collect();
    if per_result.is_empty() {
        1.0
    } else {
        stats::mean(&per_result)
    }
}

/// Mean per-result rank stability across strategies' result lists.
fn rank_stability(result: &VotingResult, votes: &[StrategyVote]) -> f64 {
    let longest = votes.iter().map(|v| v.results.len()).max().unwrap_or(0);
    if longest == 0 {
        return 1.0;
    }
    let normalizer = (longest * longest) as f64;

    let per_result: Vec<f64> = result
        .final_results
        .iter()
        .filter_map(|r| r.code.as_ref())
        .filter_map(|code| {
            let identity = code.identity_owned();
            let ranks: Vec<f64> = votes
                .iter()
                .filter_map(|v| {
                    v.results.iter().position(|r| {
                        r.code.as_ref().is_some_and(|c| c.identity_owned() == identity)
                    })
                })
                .map(|rank| rank as f64)
                .collect();
            if ranks.len() < 2 {
                None
            } else {
                let normalized = (stats::variance(&ranks) / normalizer).clamp(0.0, 1.0);
                Some(1.0 - normalized)
            }
        })
        .collect();

    if per_result.is_empty() {
        1.0
    } else {
        stats::mean(&per_result)
    }
}

/// Mean of the |z| values that exceed the threshold, over per-strategy
/// aggregate confidences. Zero when nothing exceeds or voters are too few.
fn anomaly_score(votes: &[StrategyVote], threshold: f64) -> f64 {
    if votes.len() < MIN_VOTERS_FOR_ANOMALY {
        return 0.0;
    }
    let confidences: Vec<f64> = votes.iter().map(vote_confidence).collect();
    let mean = stats::mean(&confidences);
    let std = stats::std_deviation(&confidences);
    if std == 0.0 {
        return 0.0;
    }
    let exceeding: Vec<f64> = confidences
        .iter()
        .map(|c| ((c - mean) / std).abs())
        .filter(|z| *z > threshold)
        .collect();
    if exceeding.is_empty() {
        0.0
    } else {
        stats::mean(&exceeding)
    }
}
