//! Test fixture builders for the Sector workspace.
//!
//! Provides minimal constructors for the core models plus the canonical
//! end-to-end scenario (a software business scored against NAICS 541511),
//! shared by tests across crates.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use sector_core::models::{
    ClassificationRequest, ClassificationResult, CodeType, Confidence, IndustryCode, StrategyVote,
    VotingResult, VotingStrategy,
};

/// Build an industry code with the given identity and keywords.
pub fn make_code(
    code: &str,
    code_type: CodeType,
    description: &str,
    category: &str,
    keywords: &[&str],
    confidence: f64,
) -> IndustryCode {
    IndustryCode {
        code: code.to_string(),
        code_type,
        description: description.to_string(),
        category: category.to_string(),
        subcategory: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        confidence: Confidence::new(confidence),
    }
}

/// Build a classification result for a code.
pub fn make_result(code: Option<IndustryCode>, confidence: f64) -> ClassificationResult {
    ClassificationResult {
        code,
        confidence,
        match_type: "keyword".to_string(),
        matched_on: vec!["business_description".to_string()],
        reasons: vec!["keyword overlap".to_string()],
    }
}

/// Build a minimal request from a name and description.
pub fn make_request(business_name: &str, business_description: &str) -> ClassificationRequest {
    ClassificationRequest {
        business_name: business_name.to_string(),
        business_description: business_description.to_string(),
        ..Default::default()
    }
}

/// Build a vote at a given time.
pub fn make_vote_at(
    strategy_name: &str,
    results: Vec<ClassificationResult>,
    confidence: f64,
    vote_time: DateTime<Utc>,
) -> StrategyVote {
    StrategyVote {
        strategy_name: strategy_name.to_string(),
        results,
        weight: 1.0,
        confidence,
        vote_time,
    }
}

/// Build a vote timestamped now.
pub fn make_vote(
    strategy_name: &str,
    results: Vec<ClassificationResult>,
    confidence: f64,
) -> StrategyVote {
    make_vote_at(strategy_name, results, confidence, Utc::now())
}

/// Build a voting result with healthy aggregate metrics.
pub fn make_voting_result(final_results: Vec<ClassificationResult>) -> VotingResult {
    VotingResult {
        round_id: Uuid::new_v4(),
        final_results,
        voting_score: 0.8,
        agreement: 0.8,
        consistency: 0.8,
        diversity: 0.5,
        voting_strategy: VotingStrategy::Weighted,
    }
}

/// NAICS 541511 — Custom Computer Programming Services.
pub fn programming_services_code() -> IndustryCode {
    make_code(
        "541511",
        CodeType::Naics,
        "Custom Computer Programming Services",
        "Technology",
        &["programming", "software", "computer"],
        0.85,
    )
}

/// The canonical software-business request matching NAICS 541511.
pub fn tech_solutions_request() -> ClassificationRequest {
    ClassificationRequest {
        business_name: "Tech Solutions Inc".to_string(),
        business_description: "Custom software development and computer programming services"
            .to_string(),
        website: "https://techsolutions-software.com".to_string(),
        preferred_code_types: vec![CodeType::Naics],
        ..Default::default()
    }
}

/// A second plausible candidate for the software request (SIC scheme).
pub fn programming_services_sic_code() -> IndustryCode {
    make_code(
        "7371",
        CodeType::Sic,
        "Computer Programming Services",
        "Technology",
        &["programming", "computer"],
        0.75,
    )
}
