//! Data models for classification, voting, scoring, and reporting.

pub mod classification;
pub mod completeness;
pub mod confidence;
pub mod confidence_score;
pub mod improvement;
pub mod industry_code;
pub mod rules;
pub mod voting;
pub mod voting_validation;

pub use classification::{ClassificationRequest, ClassificationResult};
pub use completeness::{
    CompletenessLevel, CompletenessReport, CompletenessRule, FieldPresence, RecordView,
    RuleOutcome,
};
pub use confidence::Confidence;
pub use confidence_score::{
    BenchmarkComparison, BenchmarkData, BenchmarkMetrics, BenchmarkTrend, CalibrationData,
    ConfidenceFactors, ConfidenceLevel, ConfidenceScore, CrossValidation, PerformanceBand,
    StatisticalMetrics, UncertaintyMetrics, ValidationStatus,
};
pub use improvement::{
    ConfidenceState, ImprovementPlan, PlanPhase, PlanStrategy, Priority, RiskLevel,
};
pub use industry_code::{CodeType, IndustryCode};
pub use rules::{NumericField, TextField, ValidationRule};
pub use voting::{StrategyVote, VotingResult, VotingStrategy};
pub use voting_validation::{
    ConsistencyChecks, IssueType, QualityMetrics, Severity, ValidationIssue, ValidationWarning,
    VotingValidationResult,
};
