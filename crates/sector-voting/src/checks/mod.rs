//! Validation check framework.
//!
//! Each check module appends issues and warnings independently; the
//! engine merges them and derives the overall score and validity.

pub mod anomaly;
pub mod basic;
pub mod consistency;
pub mod cross_validation;
pub mod quality;
pub mod statistical;
pub mod temporal;

use std::collections::HashSet;

use sector_core::models::{
    ClassificationResult, CodeType, StrategyVote, ValidationIssue, ValidationWarning,
};
use sector_core::stats;

/// Issues and warnings accumulated by one check.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationWarning>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: CheckReport) {
        self.issues.extend(other.issues);
        self.warnings.extend(other.warnings);
    }
}

/// Code identities of a result list.
pub fn code_identities(results: &[ClassificationResult]) -> HashSet<(CodeType, String)> {
    results
        .iter()
        .filter_map(|r| r.code.as_ref())
        .map(|c| c.identity_owned())
        .collect()
}

/// Set overlap `2·common / (|a| + |b|)`. Two empty sets agree fully.
pub fn set_overlap(a: &HashSet<(CodeType, String)>, b: &HashSet<(CodeType, String)>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let common = a.intersection(b).count();
    2.0 * common as f64 / (a.len() + b.len()) as f64
}

/// A strategy's aggregate confidence: the mean of its result confidences,
/// falling back to its self-reported confidence when it produced nothing.
pub fn vote_confidence(vote: &StrategyVote) -> f64 {
    if vote.results.is_empty() {
        return vote.confidence;
    }
    stats::mean(&vote.results.iter().map(|r| r.confidence).collect::<Vec<_>>())
}

/// Confidences of the vote results matching one final result's identity.
pub fn matching_confidences(
    identity: &(CodeType, String),
    votes: &[StrategyVote],
) -> Vec<f64> {
    votes
        .iter()
        .flat_map(|v| v.results.iter())
        .filter(|r| {
            r.code
                .as_ref()
                .is_some_and(|c| c.identity_owned() == *identity)
        })
        .map(|r| r.confidence)
        .collect()
}
