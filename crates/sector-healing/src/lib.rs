//! # sector-healing
//!
//! Quality remediation surfaces:
//! - **Improvement planning** — turns an aggregate confidence snapshot
//!   into a prioritized, budgeted, phased remediation plan
//! - **Completeness reporting** — weighted field-completeness reports
//!   over single records, with a 5-level scale and threshold rules

pub mod completeness;
pub mod improvement;

pub use completeness::CompletenessValidator;
pub use improvement::ImprovementEngine;
