//! Fold cross-validation by weight perturbation.
//!
//! Five folds rescore the same factors under slightly perturbed,
//! renormalized weights. A score that swings under ±2% weight changes is
//! leaning on a single factor; a stable one is broadly supported.

use sector_core::config::FactorWeights;
use sector_core::models::{ConfidenceFactors, CrossValidation};
use sector_core::stats;

const FOLDS: usize = 5;
const PERTURBATION: f64 = 0.02;

/// Standard deviation across folds below which the score is stable.
const STABILITY_CUTOFF: f64 = 0.05;

pub fn run(factors: &ConfidenceFactors, weights: &FactorWeights) -> CrossValidation {
    let values = factors.clamped().as_array();
    let base = weights.as_array();

    let mut fold_scores = Vec::with_capacity(FOLDS);
    for fold in 0..FOLDS {
        // Alternating-parity perturbation: deterministic, so repeated
        // scoring of the same input reproduces the same folds.
        let perturbed: Vec<f64> = base
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let sign = if (i + fold) % 2 == 0 { 1.0 } else { -1.0 };
                w * (1.0 + sign * PERTURBATION)
            })
            .collect();
        let total: f64 = perturbed.iter().sum();
        let score: f64 = values
            .iter()
            .zip(&perturbed)
            .map(|(f, w)| f * w / total)
            .sum();
        fold_scores.push(score.clamp(0.0, 1.0));
    }

    let mean_score = stats::mean(&fold_scores);
    let std_deviation = stats::std_deviation(&fold_scores);

    CrossValidation {
        fold_scores,
        mean_score,
        std_deviation,
        stability_index: 1.0 - (std_deviation / STABILITY_CUTOFF).min(1.0),
        is_stable: std_deviation < STABILITY_CUTOFF,
    }
}
