//! # sector-scoring
//!
//! Multi-factor confidence scoring for classification results.
//!
//! ## Factors
//! 1. **Text match** — shared phrases and token overlap with the code description
//! 2. **Keyword match** — code keywords found in the request text
//! 3. **Name match** — business-name tokens in the description, industry-indicator boost
//! 4. **Category match** — category token overlap plus synonym-table lookup
//! 5. **Code quality** — the code's own stored confidence
//! 6. **Usage frequency** — stable per-code-type default (no live telemetry)
//! 7. **Contextual** — website domain and preferred-code-type signals
//! 8. **Validation** — rule-based threshold/pattern/logic evaluation
//!
//! Layered on the weighted base score: historical calibration, z-score
//! statistics, uncertainty quantification, weight-perturbation
//! cross-validation, and four-way benchmarking.

pub mod benchmark;
pub mod calibration;
pub mod cross_validation;
pub mod engine;
pub mod factors;
pub mod history;
pub mod statistics;
pub mod tokenize;
pub mod uncertainty;

pub use engine::ConfidenceScorer;
pub use history::ScoreHistory;
