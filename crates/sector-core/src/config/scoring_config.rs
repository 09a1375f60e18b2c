use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::models::confidence_score::ConfidenceFactors;
use crate::models::rules::{NumericField, TextField, ValidationRule};

/// Weights for the 8 confidence factors. Must sum to 1.0.
#[derive(Debug, Clone)]
pub struct FactorWeights {
    pub text_match: f64,
    pub keyword_match: f64,
    pub name_match: f64,
    pub category_match: f64,
    pub code_quality: f64,
    pub usage_frequency: f64,
    pub contextual: f64,
    pub validation: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            text_match: 0.20,
            keyword_match: 0.20,
            name_match: 0.15,
            category_match: 0.15,
            code_quality: 0.10,
            usage_frequency: 0.05,
            contextual: 0.10,
            validation: 0.05,
        }
    }
}

impl FactorWeights {
    /// All 8 weights in factor declaration order.
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

    /// Weighted sum of clamped factors.
    pub fn weighted_sum(&self, factors: &ConfidenceFactors) -> f64 {
        let f = factors.clamped().as_array();
        let w = self.as_array();
        f.iter().zip(w.iter()).map(|(f, w)| f * w).sum()
    }
}

/// Configuration for the confidence scorer.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
    /// Rules feeding the validation factor.
    pub rules: Vec<ValidationRule>,
    /// Capacity of the shared score history ring buffer.
    pub history_capacity: usize,
    /// Blend factor pulling the calibrated score toward the history mean.
    pub calibration_blend: f64,
    /// Benchmark quality above which the score is nudged by performance.
    pub benchmark_quality_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            rules: vec![
                ValidationRule::Threshold {
                    field: NumericField::ResultConfidence,
                    min: 0.3,
                },
                ValidationRule::Pattern {
                    field: TextField::BusinessName,
                    required: true,
                },
                ValidationRule::Logic {
                    name: "manual_review".to_string(),
                },
            ],
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            calibration_blend: 0.2,
            benchmark_quality_threshold: 0.70,
        }
    }
}
