use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classification::ClassificationResult;

/// How the voting aggregator combined strategy votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingStrategy {
    Majority,
    Weighted,
    Borda,
    Consensus,
}

/// One strategy's contribution to a consensus round.
///
/// Ephemeral — held only for the duration of one voting round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyVote {
    pub strategy_name: String,
    pub results: Vec<ClassificationResult>,
    /// Relative weight of this strategy in the aggregate.
    pub weight: f64,
    /// The strategy's own confidence in its vote.
    pub confidence: f64,
    pub vote_time: DateTime<Utc>,
}

/// Consensus output of the voting aggregator.
///
/// `final_results` must be non-empty for the result to be considered
/// potentially valid — absence is a critical validation issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingResult {
    pub round_id: Uuid,
    pub final_results: Vec<ClassificationResult>,
    pub voting_score: f64,
    pub agreement: f64,
    pub consistency: f64,
    pub diversity: f64,
    pub voting_strategy: VotingStrategy,
}
