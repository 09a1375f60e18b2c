//! Record completeness validation: weighted field ratios, a 5-level
//! qualitative scale, and configurable threshold rules.

use sector_core::config::CompletenessConfig;
use sector_core::models::{
    CompletenessLevel, CompletenessReport, RecordView, RuleOutcome,
};

/// Validates single records for field completeness.
pub struct CompletenessValidator {
    config: CompletenessConfig,
}

impl CompletenessValidator {
    pub fn new(config: CompletenessConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompletenessConfig {
        &self.config
    }

    /// Produce a completeness report for one record view.
    pub fn validate(&self, view: &RecordView) -> CompletenessReport {
        let mut present_weight = 0.0;
        let mut total_weight = 0.0;
        let mut missing_required = Vec::new();
        let mut missing_optional = Vec::new();

        for field in &view.fields {
            let weight = if field.required {
                1.0
            } else {
                self.config.optional_weight
            };
            total_weight += weight;
            if field.present {
                present_weight += weight;
            } else if field.required {
                missing_required.push(field.name.clone());
            } else {
                missing_optional.push(field.name.clone());
            }
        }

        let overall = if total_weight > 0.0 {
            present_weight / total_weight
        } else {
            0.0
        };

        let rule_outcomes: Vec<RuleOutcome> = self
            .config
            .rules
            .iter()
            .map(|rule| {
                let passed = overall >= rule.min_overall;
                RuleOutcome {
                    rule: rule.name.clone(),
                    passed,
                    message: if passed {
                        format!("completeness {overall:.2} meets {:.2}", rule.min_overall)
                    } else {
                        format!("completeness {overall:.2} is below {:.2}", rule.min_overall)
                    },
                }
            })
            .collect();

        let passed = missing_required.is_empty() && rule_outcomes.iter().all(|r| r.passed);

        tracing::debug!(
            event = "completeness_validated",
            record_kind = %view.record_kind,
            overall,
            passed,
            "record completeness validated"
        );

        CompletenessReport {
            record_kind: view.record_kind.clone(),
            fields: view.fields.clone(),
            overall,
            level: level_for(overall),
            missing_required,
            missing_optional,
            rule_outcomes,
            passed,
        }
    }
}

impl Default for CompletenessValidator {
    fn default() -> Self {
        Self::new(CompletenessConfig::default())
    }
}

/// Bucket the weighted ratio into the 5-level scale.
fn level_for(overall: f64) -> CompletenessLevel {
    if overall >= 0.95 {
        CompletenessLevel::Excellent
    } else if overall >= 0.85 {
        CompletenessLevel::Good
    } else if overall >= 0.70 {
        CompletenessLevel::Fair
    } else if overall >= 0.50 {
        CompletenessLevel::Poor
    } else {
        CompletenessLevel::Critical
    }
}
