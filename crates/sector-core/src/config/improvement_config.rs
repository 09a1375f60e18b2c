/// Configuration for improvement plan generation.
#[derive(Debug, Clone)]
pub struct ImprovementConfig {
    /// Proportional confidence boost the plan targets.
    pub target_boost: f64,
    /// Absolute cap on the target confidence.
    pub target_cap: f64,
    /// Optional budget; strategies are greedily cut to fit it.
    pub budget: Option<f64>,
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            target_boost: 0.10,
            target_cap: 0.95,
            budget: None,
        }
    }
}
