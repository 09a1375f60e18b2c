//! Category match: token overlap between the code category and the
//! business text, plus a synonym-table bonus.

use sector_core::models::{ClassificationRequest, IndustryCode};

use crate::tokenize::token_set;

/// Category-to-business synonym groups.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("technology", &["tech", "software", "computer", "it"]),
    ("food", &["restaurant", "cafe", "catering", "bakery"]),
    ("retail", &["store", "shop", "merchandise"]),
    ("healthcare", &["medical", "health", "clinic", "dental"]),
    ("finance", &["financial", "bank", "insurance", "accounting"]),
    ("construction", &["contractor", "building", "remodeling"]),
];

const OVERLAP_WEIGHT: f64 = 0.7;
const SYNONYM_BONUS: f64 = 0.3;

pub fn score(code: &IndustryCode, request: &ClassificationRequest) -> f64 {
    let category_tokens = token_set(&code.category);
    if category_tokens.is_empty() {
        return 0.0;
    }

    let business = format!(
        "{} {}",
        request.business_name, request.business_description
    );
    let business_tokens = token_set(&business);

    let overlap = category_tokens.intersection(&business_tokens).count() as f64
        / category_tokens.len() as f64;

    let synonym_hit = SYNONYMS.iter().any(|(group, members)| {
        let group_in_category = category_tokens.contains(*group);
        let group_in_business = business_tokens.contains(*group);
        let member_in_business = members.iter().any(|m| business_tokens.contains(*m));
        let member_in_category = members.iter().any(|m| category_tokens.contains(*m));
        (group_in_category && member_in_business) || (group_in_business && member_in_category)
    });

    let mut score = OVERLAP_WEIGHT * overlap;
    if synonym_hit {
        score += SYNONYM_BONUS;
    }
    score.min(1.0)
}
