use std::time::Duration;

/// Configuration for voting-result validation.
#[derive(Debug, Clone)]
pub struct VotingValidationConfig {
    /// Fewer final results than this is an error issue.
    pub min_result_count: usize,
    /// More final results than this is a warning.
    pub max_result_count: usize,
    /// Minimum acceptable aggregate voting score.
    pub min_voting_score: f64,
    /// Minimum acceptable aggregate agreement.
    pub min_agreement: f64,
    /// Minimum acceptable aggregate consistency.
    pub min_consistency: f64,
    /// Per-result confidence floor; below it is a per-result warning.
    pub min_confidence_threshold: f64,
    /// Per-result confidence ceiling.
    pub max_confidence_threshold: f64,
    /// Whether code format compliance requires a non-empty description.
    pub require_description: bool,
    pub enable_anomaly_detection: bool,
    /// Z-score above which a strategy is anomalous.
    pub anomaly_threshold: f64,
    pub enable_cross_validation: bool,
    /// Minimum mean leave-one-out agreement.
    pub cross_validation_threshold: f64,
    pub enable_statistical_validation: bool,
    /// Chi-square statistic above which vote distribution is suspect.
    pub statistical_significance: f64,
    pub enable_temporal_validation: bool,
    /// Maximum acceptable spread between earliest and latest vote.
    pub temporal_window: Duration,
    /// Minimum validation score for a result with issues to stay valid.
    pub min_validity_score: f64,
}

impl Default for VotingValidationConfig {
    fn default() -> Self {
        Self {
            min_result_count: 1,
            max_result_count: 10,
            min_voting_score: 0.5,
            min_agreement: 0.4,
            min_consistency: 0.4,
            min_confidence_threshold: 0.1,
            max_confidence_threshold: 1.0,
            require_description: true,
            enable_anomaly_detection: true,
            anomaly_threshold: 2.0,
            enable_cross_validation: true,
            cross_validation_threshold: 0.5,
            enable_statistical_validation: true,
            statistical_significance: 3.841,
            enable_temporal_validation: true,
            temporal_window: Duration::from_secs(30),
            min_validity_score: 0.6,
        }
    }
}
