use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Qualitative confidence band, assigned by fixed cutoffs
/// (inclusive on the upper side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Outcome of result validation inside the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Invalid,
}

/// The 8 named sub-scores feeding the overall confidence score.
///
/// Every factor must be clamped to [0.0, 1.0] before aggregation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    pub text_match: f64,
    pub keyword_match: f64,
    pub name_match: f64,
    pub category_match: f64,
    pub code_quality: f64,
    pub usage_frequency: f64,
    pub contextual: f64,
    pub validation: f64,
}

impl ConfidenceFactors {
    /// All 8 factors in declaration order.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.text_match,
            self.keyword_match,
            self.name_match,
            self.category_match,
            self.code_quality,
            self.usage_frequency,
            self.contextual,
            self.validation,
        ]
    }

    /// Return a copy with every factor clamped to [0.0, 1.0].
    pub fn clamped(&self) -> Self {
        Self {
            text_match: self.text_match.clamp(0.0, 1.0),
            keyword_match: self.keyword_match.clamp(0.0, 1.0),
            name_match: self.name_match.clamp(0.0, 1.0),
            category_match: self.category_match.clamp(0.0, 1.0),
            code_quality: self.code_quality.clamp(0.0, 1.0),
            usage_frequency: self.usage_frequency.clamp(0.0, 1.0),
            contextual: self.contextual.clamp(0.0, 1.0),
            validation: self.validation.clamp(0.0, 1.0),
        }
    }
}

/// Raw-vs-calibrated score with calibration provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationData {
    pub raw_score: f64,
    pub calibrated_score: f64,
    /// "historical_performance" when history informed the adjustment,
    /// "none" otherwise.
    pub calibration_method: String,
    /// Asymptotic in sample size — more history, higher quality.
    pub calibration_quality: f64,
    pub historical_sample_size: usize,
}

/// Placement of the current score within the historical distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalMetrics {
    pub z_score: f64,
    /// Two-tailed p-value from the normal approximation.
    pub p_value: f64,
    /// 95% confidence interval around the score, clamped to [0, 1].
    pub confidence_interval: (f64, f64),
    pub is_statistically_valid: bool,
    pub sample_size: usize,
}

/// Per-factor uncertainty summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyMetrics {
    /// Mean factor uncertainty — factors near 0.5 are uncertain,
    /// factors near the extremes are certain.
    pub uncertainty_score: f64,
    /// 1 − normalized variance across the 8 factors.
    pub stability_index: f64,
    /// Score ± half the uncertainty band, clamped to [0, 1].
    pub confidence_range: (f64, f64),
}

/// Weight-perturbation fold cross-validation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossValidation {
    pub fold_scores: Vec<f64>,
    pub mean_score: f64,
    pub std_deviation: f64,
    pub stability_index: f64,
    pub is_stable: bool,
}

/// Direction of recent historical scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkTrend {
    Improving,
    Declining,
    Stable,
}

/// Qualitative bucket for score-vs-benchmark gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

/// The four reference benchmarks and their combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub industry_benchmark: f64,
    pub code_type_benchmark: f64,
    pub historical_benchmark: f64,
    pub peer_benchmark: f64,
    pub overall_benchmark: f64,
}

/// Score-vs-benchmark comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub overall_performance: PerformanceBand,
    pub performance_gap: f64,
    pub improvement_potential: f64,
}

/// Full benchmarking context for a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkData {
    pub benchmark_metrics: BenchmarkMetrics,
    pub comparison: BenchmarkComparison,
    /// Rank of the current score among historical scores, 0–100.
    pub benchmark_percentile: f64,
    pub benchmark_trend: BenchmarkTrend,
    /// Confidence in the benchmark itself, driven by history size.
    pub benchmark_quality: f64,
}

/// Complete output of one scoring call.
///
/// Constructed fresh per call; only the shared score history persists
/// across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub overall_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub validation_status: ValidationStatus,
    pub factors: ConfidenceFactors,
    pub validation_messages: Vec<String>,
    pub recommendations: Vec<String>,
    pub calibration: CalibrationData,
    pub statistics: StatisticalMetrics,
    pub uncertainty: UncertaintyMetrics,
    pub cross_validation: CrossValidation,
    pub benchmark: BenchmarkData,
    pub score_version: String,
    pub last_updated: DateTime<Utc>,
}
