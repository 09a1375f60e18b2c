//! Temporal spread check: votes arriving far apart suggest slow or
//! stalled strategies.

use sector_core::config::VotingValidationConfig;
use sector_core::models::{StrategyVote, ValidationWarning};

use super::CheckReport;

pub fn check(votes: &[StrategyVote], config: &VotingValidationConfig) -> CheckReport {
    let mut report = CheckReport::new();
    if !config.enable_temporal_validation || votes.is_empty() {
        return report;
    }

    let earliest = votes.iter().map(|v| v.vote_time).min();
    let latest = votes.iter().map(|v| v.vote_time).max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return report;
    };

    let spread = latest - earliest;
    if spread.num_milliseconds() as u128 > config.temporal_window.as_millis() {
        report.warnings.push(ValidationWarning {
            message: format!(
                "vote timestamps spread over {}s exceeds the {}s window; a strategy may be stalling",
                spread.num_seconds(),
                config.temporal_window.as_secs()
            ),
            strategy: None,
        });
    }

    report
}
