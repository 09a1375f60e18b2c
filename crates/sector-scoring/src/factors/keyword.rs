//! Keyword match: fraction of the code's keywords found in the request's
//! business name, description, or explicit keywords.

use sector_core::models::{ClassificationRequest, IndustryCode};

use crate::tokenize::token_set;

pub fn score(code: &IndustryCode, request: &ClassificationRequest) -> f64 {
    if code.keywords.is_empty() {
        return 0.0;
    }

    let haystack = format!(
        "{} {} {}",
        request.business_name,
        request.business_description,
        request.keywords.join(" ")
    )
    .to_lowercase();
    let tokens = token_set(&haystack);

    let matched = code
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| tokens.contains(k) || haystack.contains(k.as_str()))
        .count();

    matched as f64 / code.keywords.len() as f64
}
