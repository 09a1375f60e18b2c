use serde::{Deserialize, Serialize};

use super::classification::ClassificationRequest;
use super::industry_code::IndustryCode;

/// Presence of one field in a record under completeness review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPresence {
    pub name: String,
    pub present: bool,
    pub required: bool,
}

/// A record flattened into named field presences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordView {
    pub record_kind: String,
    pub fields: Vec<FieldPresence>,
}

fn field(name: &str, present: bool, required: bool) -> FieldPresence {
    FieldPresence {
        name: name.to_string(),
        present,
        required,
    }
}

impl RecordView {
    /// View over an industry code record.
    pub fn industry_code(code: &IndustryCode) -> Self {
        Self {
            record_kind: "industry_code".to_string(),
            fields: vec![
                field("code", !code.code.trim().is_empty(), true),
                field("description", !code.description.trim().is_empty(), true),
                field("category", !code.category.trim().is_empty(), true),
                field(
                    "subcategory",
                    code.subcategory
                        .as_deref()
                        .is_some_and(|s| !s.trim().is_empty()),
                    false,
                ),
                field("keywords", !code.keywords.is_empty(), false),
            ],
        }
    }

    /// View over a classification request.
    pub fn classification_request(request: &ClassificationRequest) -> Self {
        Self {
            record_kind: "classification_request".to_string(),
            fields: vec![
                field(
                    "business_name",
                    !request.business_name.trim().is_empty(),
                    true,
                ),
                field(
                    "business_description",
                    !request.business_description.trim().is_empty(),
                    true,
                ),
                field("website", !request.website.trim().is_empty(), false),
                field("keywords", !request.keywords.is_empty(), false),
                field(
                    "preferred_code_types",
                    !request.preferred_code_types.is_empty(),
                    false,
                ),
            ],
        }
    }
}

/// 5-level qualitative completeness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

/// Threshold rule against the overall completeness ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessRule {
    pub name: String,
    pub min_overall: f64,
}

/// Pass/fail outcome of one completeness rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub passed: bool,
    pub message: String,
}

/// Completeness report over a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub record_kind: String,
    pub fields: Vec<FieldPresence>,
    /// Weighted completeness ratio, [0, 1].
    pub overall: f64,
    pub level: CompletenessLevel,
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
    pub rule_outcomes: Vec<RuleOutcome>,
    pub passed: bool,
}
