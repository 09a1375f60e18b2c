use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confidence_score::ConfidenceFactors;

/// Aggregate snapshot of scoring performance, consumed by the improver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceState {
    pub overall_confidence: f64,
    pub factor_averages: ConfidenceFactors,
    /// Recent score slope; negative means declining.
    pub trend: f64,
    pub sample_size: usize,
}

impl ConfidenceState {
    /// Stand-in snapshot used when no live aggregation is wired in.
    pub fn baseline() -> Self {
        Self {
            overall_confidence: 0.62,
            factor_averages: ConfidenceFactors {
                text_match: 0.55,
                keyword_match: 0.45,
                name_match: 0.60,
                category_match: 0.50,
                code_quality: 0.70,
                usage_frequency: 0.55,
                contextual: 0.58,
                validation: 0.75,
            },
            trend: 0.0,
            sample_size: 250,
        }
    }
}

/// Execution priority of an improvement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Overall delivery risk of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One selected remediation strategy inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStrategy {
    pub name: String,
    pub description: String,
    /// Expected confidence impact, [0, 1].
    pub impact: f64,
    /// Relative implementation effort, [0, 1].
    pub effort: f64,
    pub priority: Priority,
    /// impact / effort — the selection sort key.
    pub roi: f64,
    /// Effort-derived cost used by budget cuts.
    pub cost: f64,
}

/// One fixed-duration execution phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPhase {
    pub name: String,
    pub duration_days: u32,
    pub strategy_names: Vec<String>,
}

/// A prioritized remediation plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementPlan {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub current: ConfidenceState,
    pub target_confidence: f64,
    pub strategies: Vec<PlanStrategy>,
    pub phases: Vec<PlanPhase>,
    pub timeline_days: u32,
    pub total_cost: f64,
    pub risk: RiskLevel,
    pub expected_outcome: f64,
    pub monitoring: Vec<String>,
    pub recommendations: Vec<String>,
}
