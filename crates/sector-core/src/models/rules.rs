//! Typed validation rules for the confidence scorer.
//!
//! Each rule kind is a variant with a single evaluation function — no
//! stringly-typed parameter maps, no runtime type assertions.

use serde::{Deserialize, Serialize};

use super::classification::{ClassificationRequest, ClassificationResult};

/// Numeric fields a threshold rule can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// The strategy-reported confidence on the result.
    ResultConfidence,
    /// The stored confidence on the industry code itself.
    CodeConfidence,
}

/// Text fields a pattern rule can require to be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    BusinessName,
    BusinessDescription,
    Website,
    CodeDescription,
    CodeCategory,
}

/// A single scoring validation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationRule {
    /// Passes iff the named numeric field is at least `min`.
    Threshold { field: NumericField, min: f64 },
    /// Passes iff the named text field is non-empty (when `required`).
    Pattern { field: TextField, required: bool },
    /// Always-passes placeholder for rules evaluated outside this engine.
    Logic { name: String },
}

impl ValidationRule {
    /// Evaluate this rule against a result/request pair.
    pub fn evaluate(&self, result: &ClassificationResult, request: &ClassificationRequest) -> bool {
        match self {
            ValidationRule::Threshold { field, min } => {
                let value = match field {
                    NumericField::ResultConfidence => result.confidence,
                    NumericField::CodeConfidence => result
                        .code
                        .as_ref()
                        .map(|c| c.confidence.value())
                        .unwrap_or(0.0),
                };
                value >= *min
            }
            ValidationRule::Pattern { field, required } => {
                if !required {
                    return true;
                }
                let value = match field {
                    TextField::BusinessName => request.business_name.as_str(),
                    TextField::BusinessDescription => request.business_description.as_str(),
                    TextField::Website => request.website.as_str(),
                    TextField::CodeDescription => result
                        .code
                        .as_ref()
                        .map(|c| c.description.as_str())
                        .unwrap_or(""),
                    TextField::CodeCategory => result
                        .code
                        .as_ref()
                        .map(|c| c.category.as_str())
                        .unwrap_or(""),
                };
                !value.trim().is_empty()
            }
            ValidationRule::Logic { .. } => true,
        }
    }
}
