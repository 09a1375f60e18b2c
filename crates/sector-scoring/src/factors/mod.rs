//! The 8 confidence factors.
//!
//! Each factor module produces a score in [0.0, 1.0]; the engine combines
//! them with the configured weight table.

pub mod category;
pub mod contextual;
pub mod keyword;
pub mod name;
pub mod text;

use sector_core::models::{
    ClassificationRequest, ClassificationResult, CodeType, ConfidenceFactors, IndustryCode,
    ValidationRule,
};

/// Stable usage-frequency default per code scheme — no live usage
/// telemetry is available.
pub fn usage_frequency(code_type: CodeType) -> f64 {
    match code_type {
        CodeType::Naics => 0.60,
        CodeType::Sic => 0.50,
        CodeType::Mcc => 0.55,
    }
}

/// Fraction of validation rules that pass. No rules means a pass.
pub fn validation_score(
    rules: &[ValidationRule],
    result: &ClassificationResult,
    request: &ClassificationRequest,
) -> f64 {
    if rules.is_empty() {
        return 1.0;
    }
    let passed = rules.iter().filter(|r| r.evaluate(result, request)).count();
    passed as f64 / rules.len() as f64
}

/// Compute all 8 factors for a code/result/request triple.
pub fn compute(
    code: &IndustryCode,
    result: &ClassificationResult,
    request: &ClassificationRequest,
    rules: &[ValidationRule],
) -> ConfidenceFactors {
    ConfidenceFactors {
        text_match: text::score(code, request),
        keyword_match: keyword::score(code, request),
        name_match: name::score(code, request),
        category_match: category::score(code, request),
        code_quality: code.confidence.value(),
        usage_frequency: usage_frequency(code.code_type),
        contextual: contextual::score(code, request),
        validation: validation_score(rules, result, request),
    }
    .clamped()
}
