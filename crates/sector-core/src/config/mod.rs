//! Configuration structs with documented defaults.
//!
//! All configuration is plain structs — no environment variables or file
//! loading in this core; any config surface is external plumbing.

pub mod completeness_config;
pub mod improvement_config;
pub mod retry_config;
pub mod scoring_config;
pub mod voting_config;

pub use completeness_config::CompletenessConfig;
pub use improvement_config::ImprovementConfig;
pub use retry_config::RetryConfig;
pub use scoring_config::{FactorWeights, ScoringConfig};
pub use voting_config::VotingValidationConfig;
