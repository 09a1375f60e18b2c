//! Name match: business-name tokens found in the code description, with
//! an industry-indicator boost.

use sector_core::models::{ClassificationRequest, IndustryCode};

use crate::tokenize::{name_tokens, token_set};

/// Words in a business name that directly indicate an industry.
const INDUSTRY_INDICATORS: &[&str] = &[
    "restaurant",
    "cafe",
    "bakery",
    "tech",
    "software",
    "consulting",
    "construction",
    "plumbing",
    "medical",
    "dental",
    "auto",
    "salon",
    "legal",
    "realty",
    "fitness",
];

/// Boost applied when an indicator from the name appears in the code's
/// category or description.
const INDICATOR_BOOST: f64 = 0.2;

pub fn score(code: &IndustryCode, request: &ClassificationRequest) -> f64 {
    let tokens = name_tokens(&request.business_name);
    if tokens.is_empty() {
        return 0.0;
    }

    let description_tokens = token_set(&code.description);
    let found = tokens
        .iter()
        .filter(|t| description_tokens.contains(*t))
        .count();
    let mut score = found as f64 / tokens.len() as f64;

    let code_text = format!("{} {}", code.category, code.description).to_lowercase();
    let indicated = tokens
        .iter()
        .filter(|t| INDUSTRY_INDICATORS.contains(&t.as_str()))
        .any(|t| code_text.contains(t.as_str()));
    if indicated {
        score += INDICATOR_BOOST;
    }

    score.min(1.0)
}
