//! Contextual match: website-domain and preferred-code-type signals.

use sector_core::models::{ClassificationRequest, IndustryCode};

use crate::tokenize::{domain_tokens, token_set};

const BASE: f64 = 0.5;
const DOMAIN_BONUS: f64 = 0.25;
const PREFERRED_TYPE_BONUS: f64 = 0.25;

pub fn score(code: &IndustryCode, request: &ClassificationRequest) -> f64 {
    let mut score = BASE;

    let domain = domain_tokens(&request.website);
    if !domain.is_empty() {
        let mut code_tokens = token_set(&code.description);
        for keyword in &code.keywords {
            code_tokens.insert(keyword.to_lowercase());
        }
        if domain.iter().any(|t| code_tokens.contains(t)) {
            score += DOMAIN_BONUS;
        }
    }

    if request.preferred_code_types.contains(&code.code_type) {
        score += PREFERRED_TYPE_BONUS;
    }

    score.min(1.0)
}
