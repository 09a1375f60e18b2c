//! Per-strategy anomaly detection: z-score outliers in aggregate
//! confidence and in result count.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{StrategyVote, ValidationWarning};
use sector_core::stats;

use super::{vote_confidence, CheckReport};

/// The z-distribution needs at least this many voters to be meaningful.
const MIN_VOTERS: usize = 3;

pub fn check(votes: &[StrategyVote], config: &VotingValidationConfig) -> CheckReport {
    let mut report = CheckReport::new();
    if !config.enable_anomaly_detection || votes.len() < MIN_VOTERS {
        return report;
    }

    let confidences: Vec<f64> = votes.iter().map(vote_confidence).collect();
    for (vote, z) in votes.iter().zip(z_scores(&confidences)) {
        if z.abs() > config.anomaly_threshold {
            report.warnings.push(ValidationWarning {
                message: format!(
                    "strategy '{}' confidence is a z={z:.2} outlier",
                    vote.strategy_name
                ),
                strategy: Some(vote.strategy_name.clone()),
            });
        }
    }

    let counts: Vec<f64> = votes.iter().map(|v| v.results.len() as f64).collect();
    for (vote, z) in votes.iter().zip(z_scores(&counts)) {
        if z.abs() > config.anomaly_threshold {
            report.warnings.push(ValidationWarning {
                message: format!(
                    "strategy '{}' produced an outlier result count (z={z:.2})",
                    vote.strategy_name
                ),
                strategy: Some(vote.strategy_name.clone()),
            });
        }
    }

    report
}

/// Z-score of every value against the sample's own mean and deviation.
/// A zero-deviation sample has no outliers.
fn z_scores(values: &[f64]) -> Vec<f64> {
    let mean = stats::mean(values);
    let std = stats::std_deviation(values);
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - mean) / std).collect()
}
