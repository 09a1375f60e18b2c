use serde::{Deserialize, Serialize};

use super::industry_code::{CodeType, IndustryCode};

/// Output of a single classification strategy for one candidate code.
///
/// `code: None` is a valid "no classification" outcome; downstream scoring
/// rejects it with an explicit error rather than scoring an empty result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub code: Option<IndustryCode>,
    /// Strategy-reported confidence for this candidate, [0.0, 1.0].
    pub confidence: f64,
    /// How the match was made (e.g. "keyword", "description", "exact").
    pub match_type: String,
    /// Which request fields contributed to the match.
    pub matched_on: Vec<String>,
    /// Human-readable reasons supporting the match.
    pub reasons: Vec<String>,
}

/// Read-only input to classification and scoring. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub business_name: String,
    pub business_description: String,
    pub website: String,
    pub keywords: Vec<String>,
    pub preferred_code_types: Vec<CodeType>,
    pub max_results: usize,
    pub min_confidence: f64,
}

impl Default for ClassificationRequest {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            business_description: String::new(),
            website: String::new(),
            keywords: Vec::new(),
            preferred_code_types: Vec::new(),
            max_results: 10,
            min_confidence: 0.0,
        }
    }
}
