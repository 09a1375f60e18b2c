//! # sector-core
//!
//! Foundation crate for the Sector industry-code classification system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod stats;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{RetryConfig, ScoringConfig, VotingValidationConfig};
pub use errors::{ScoringError, SectorError, SectorResult, StoreError};
pub use models::{
    ClassificationRequest, ClassificationResult, CodeType, Confidence, ConfidenceFactors,
    ConfidenceScore, IndustryCode, StrategyVote, VotingResult, VotingValidationResult,
};
