//! # sector-voting
//!
//! Validation of consensus classification results against the raw
//! strategy votes that produced them.
//!
//! ## Checks
//! 1. **Basic** — result count bounds, aggregate metric thresholds,
//!    per-result confidence bounds
//! 2. **Quality** — completeness, reliability, consistency, code format
//! 3. **Consistency** — cross-strategy agreement, confidence variance,
//!    rank stability, anomaly score
//! 4. **Anomaly** — z-score outliers per strategy (confidence and count)
//! 5. **Cross-validation** — leave-one-out robustness
//! 6. **Statistical** — chi-square vote-distribution check
//! 7. **Temporal** — vote timestamp spread
//!
//! Validation never errors: invalid input is reported as a critical issue
//! inside the returned result.

pub mod checks;
pub mod engine;
pub mod recommendations;
pub mod score;

pub use engine::VotingValidator;
