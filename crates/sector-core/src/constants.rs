//! Workspace-wide constants.

/// Version string stamped on every produced ConfidenceScore.
pub const SCORE_VERSION: &str = "2.1.0";

/// Confidence-level cutoffs (inclusive on the upper side).
pub const LEVEL_VERY_HIGH: f64 = 0.9;
pub const LEVEL_HIGH: f64 = 0.7;
pub const LEVEL_MEDIUM: f64 = 0.5;
pub const LEVEL_LOW: f64 = 0.3;

/// Maximum number of scores retained in the shared score history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;
