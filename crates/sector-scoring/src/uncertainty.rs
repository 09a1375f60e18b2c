//! Uncertainty quantification over the 8 factors.
//!
//! A factor near 0.5 says little either way; factors near the extremes
//! are decisive. Stability reflects how tightly the factors agree.

use sector_core::models::{ConfidenceFactors, UncertaintyMetrics};
use sector_core::stats;

/// Maximum possible variance for values confined to [0, 1].
const MAX_FACTOR_VARIANCE: f64 = 0.25;

/// Half-width of the confidence range per unit of uncertainty.
const RANGE_SCALE: f64 = 0.1;

pub fn quantify(score: f64, factors: &ConfidenceFactors) -> UncertaintyMetrics {
    let values = factors.as_array();

    let uncertainty_score =
        stats::mean(&values.map(|f| 1.0 - 2.0 * (f - 0.5).abs()).to_vec());

    let normalized_variance = (stats::variance(&values) / MAX_FACTOR_VARIANCE).clamp(0.0, 1.0);
    let stability_index = 1.0 - normalized_variance;

    let margin = RANGE_SCALE * uncertainty_score;
    let confidence_range = (
        (score - margin).clamp(0.0, 1.0),
        (score + margin).clamp(0.0, 1.0),
    );

    UncertaintyMetrics {
        uncertainty_score: uncertainty_score.clamp(0.0, 1.0),
        stability_index,
        confidence_range,
    }
}
