use crate::models::completeness::CompletenessRule;

/// Configuration for record completeness validation.
#[derive(Debug, Clone)]
pub struct CompletenessConfig {
    /// Weight of an optional field relative to a required field's 1.0.
    pub optional_weight: f64,
    /// Threshold rules evaluated against the overall ratio.
    pub rules: Vec<CompletenessRule>,
}

impl Default for CompletenessConfig {
    fn default() -> Self {
        Self {
            optional_weight: 0.5,
            rules: vec![CompletenessRule {
                name: "minimum_completeness".to_string(),
                min_overall: 0.5,
            }],
        }
    }
}
