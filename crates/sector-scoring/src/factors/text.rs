//! Text match: shared phrases and token overlap between the code
//! description and the business name + description.

use sector_core::models::{ClassificationRequest, IndustryCode};

use crate::tokenize::{bigrams, token_set};

/// Weight of exact phrase matches versus plain token overlap.
const PHRASE_WEIGHT: f64 = 0.6;
const OVERLAP_WEIGHT: f64 = 0.4;

/// Shared bigrams at which the phrase component saturates.
const PHRASE_SATURATION: f64 = 2.0;

pub fn score(code: &IndustryCode, request: &ClassificationRequest) -> f64 {
    let business = format!(
        "{} {}",
        request.business_name, request.business_description
    );

    let code_tokens = token_set(&code.description);
    if code_tokens.is_empty() {
        return 0.0;
    }
    let business_tokens = token_set(&business);

    let shared_phrases = bigrams(&code.description)
        .intersection(&bigrams(&business))
        .count();
    let phrase = (shared_phrases as f64 / PHRASE_SATURATION).min(1.0);

    let overlap = code_tokens.intersection(&business_tokens).count() as f64
        / code_tokens.len() as f64;

    PHRASE_WEIGHT * phrase + OVERLAP_WEIGHT * overlap
}
