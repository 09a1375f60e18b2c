//! ImprovementEngine — selects applicable catalog strategies, sorts by
//! ROI, applies the budget cut, buckets into phases, and synthesizes the
//! plan's timeline, cost, risk, and outcome sections.

use chrono::Utc;
use uuid::Uuid;

use sector_core::config::ImprovementConfig;
use sector_core::models::{
    ConfidenceState, ImprovementPlan, PlanPhase, PlanStrategy, Priority, RiskLevel,
};
use sector_core::stats;

use super::catalog::CATALOG;

/// Effort-to-cost conversion for the budget cut.
const COST_PER_EFFORT: f64 = 10_000.0;

/// Confidence contribution per unit of strategy impact.
const IMPACT_YIELD: f64 = 0.1;

/// Length of each execution phase.
const PHASE_DAYS: u32 = 30;

/// Generates prioritized remediation plans from a confidence snapshot.
pub struct ImprovementEngine {
    config: ImprovementConfig,
}

impl ImprovementEngine {
    pub fn new(config: ImprovementConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ImprovementConfig {
        &self.config
    }

    /// Generate a plan from the baseline snapshot.
    // TODO: aggregate ConfidenceState from a live ScoreHistory instead of
    // the baseline snapshot once the scorer exposes factor averages.
    pub fn generate_plan(&self) -> ImprovementPlan {
        self.generate_plan_for(&ConfidenceState::baseline())
    }

    /// Generate a plan for an explicit snapshot.
    pub fn generate_plan_for(&self, state: &ConfidenceState) -> ImprovementPlan {
        let target_confidence = (state.overall_confidence * (1.0 + self.config.target_boost))
            .min(self.config.target_cap);

        let mut strategies: Vec<PlanStrategy> = CATALOG
            .iter()
            .filter(|entry| (entry.applies)(state))
            .map(|entry| PlanStrategy {
                name: entry.name.to_string(),
                description: entry.description.to_string(),
                impact: entry.impact,
                effort: entry.effort,
                priority: entry.priority,
                roi: if entry.effort > 0.0 {
                    entry.impact / entry.effort
                } else {
                    entry.impact
                },
                cost: entry.effort * COST_PER_EFFORT,
            })
            .collect();

        strategies.sort_by(|a, b| b.roi.partial_cmp(&a.roi).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(budget) = self.config.budget {
            strategies = apply_budget(strategies, budget);
        }

        let phases = bucket_into_phases(&strategies);
        let timeline_days = PHASE_DAYS * phases.iter().filter(|p| !p.strategy_names.is_empty()).count() as u32;
        let total_cost: f64 = strategies.iter().map(|s| s.cost).sum();
        let risk = risk_level(&strategies);

        let total_impact: f64 = strategies.iter().map(|s| s.impact).sum();
        let expected_outcome =
            (state.overall_confidence + total_impact * IMPACT_YIELD).min(target_confidence);

        let recommendations = stats::dedup_preserving_order(
            strategies.iter().map(|s| s.description.clone()).collect(),
        );

        tracing::debug!(
            event = "improvement_plan_generated",
            strategies = strategies.len(),
            target = target_confidence,
            expected = expected_outcome,
            total_cost,
            "improvement plan generated"
        );

        ImprovementPlan {
            plan_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            current: state.clone(),
            target_confidence,
            strategies,
            phases,
            timeline_days,
            total_cost,
            risk,
            expected_outcome,
            monitoring: vec![
                "overall confidence".to_string(),
                "per-factor averages".to_string(),
                "calibration quality".to_string(),
                "validation pass rate".to_string(),
            ],
            recommendations,
        }
    }
}

impl Default for ImprovementEngine {
    fn default() -> Self {
        Self::new(ImprovementConfig::default())
    }
}

/// Greedy budget cut over the ROI-sorted list: accept each strategy whose
/// cost still fits the remaining budget.
fn apply_budget(strategies: Vec<PlanStrategy>, budget: f64) -> Vec<PlanStrategy> {
    let mut spent = 0.0;
    strategies
        .into_iter()
        .filter(|s| {
            if spent + s.cost <= budget {
                spent += s.cost;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Three fixed-length phases, bucketed by priority.
fn bucket_into_phases(strategies: &[PlanStrategy]) -> Vec<PlanPhase> {
    let names_with = |priority: Priority| -> Vec<String> {
        strategies
            .iter()
            .filter(|s| s.priority == priority)
            .map(|s| s.name.clone())
            .collect()
    };

    vec![
        PlanPhase {
            name: "quick wins".to_string(),
            duration_days: PHASE_DAYS,
            strategy_names: names_with(Priority::High),
        },
        PlanPhase {
            name: "core improvements".to_string(),
            duration_days: PHASE_DAYS,
            strategy_names: names_with(Priority::Medium),
        },
        PlanPhase {
            name: "structural changes".to_string(),
            duration_days: PHASE_DAYS,
            strategy_names: names_with(Priority::Low),
        },
    ]
}

/// Delivery risk from mean strategy effort.
fn risk_level(strategies: &[PlanStrategy]) -> RiskLevel {
    let efforts: Vec<f64> = strategies.iter().map(|s| s.effort).collect();
    let mean_effort = stats::mean(&efforts);
    if mean_effort < 0.3 {
        RiskLevel::Low
    } else if mean_effort < 0.6 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
