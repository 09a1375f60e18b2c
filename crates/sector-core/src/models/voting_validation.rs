use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Error,
    Warning,
}

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    InputValidation,
    ResultCount,
    VotingScore,
    Agreement,
    Consistency,
    CrossValidation,
    Anomaly,
}

/// A structured problem with a voting result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    pub recommendation: Option<String>,
}

/// An advisory observation that does not affect validity by itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub message: String,
    /// Strategy this warning names, when strategy-specific.
    pub strategy: Option<String>,
}

/// Four quality sub-scores plus their unweighted mean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Fraction of strategies that contributed at least one result.
    pub result_completeness: f64,
    /// Mean per-result agreement of matching vote confidences.
    pub confidence_reliability: f64,
    /// Mean fraction of strategies that voted for each final result.
    pub strategy_consistency: f64,
    /// Fraction of final results with well-formed codes.
    pub code_format_compliance: f64,
    pub overall_quality: f64,
}

/// Cross-strategy consistency sub-scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsistencyChecks {
    /// Mean pairwise overlap between strategies' result-code sets.
    pub cross_strategy_agreement: f64,
    /// Mean per-result confidence agreement across strategies.
    pub confidence_consistency: f64,
    /// Mean per-result rank stability across strategies' lists.
    pub result_stability: f64,
    /// Mean exceeding z-score of per-strategy aggregate confidence;
    /// 0 when nothing exceeds the threshold or fewer than 3 voters.
    pub anomaly_score: f64,
}

/// Output of voting validation. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingValidationResult {
    pub is_valid: bool,
    pub validation_score: f64,
    pub issues: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationWarning>,
    pub quality: QualityMetrics,
    pub consistency: ConsistencyChecks,
    pub recommendations: Vec<String>,
}
