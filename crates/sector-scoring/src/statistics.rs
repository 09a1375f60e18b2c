//! Placement of the current score within the historical distribution:
//! z-score, two-tailed p-value, and a 95% confidence interval.

use sector_core::models::StatisticalMetrics;
use sector_core::stats;

/// |z| above this is considered statistically aberrant (99% two-tailed).
const Z_VALIDITY_CUTOFF: f64 = 2.576;

/// 95% two-tailed normal quantile.
const Z_95: f64 = 1.96;

pub fn compute(score: f64, history: &[f64]) -> StatisticalMetrics {
    if history.len() < 2 {
        return StatisticalMetrics {
            z_score: 0.0,
            p_value: 1.0,
            confidence_interval: (score, score),
            is_statistically_valid: true,
            sample_size: history.len(),
        };
    }

    let mean = stats::mean(history);
    let std = stats::std_deviation(history);
    let z = if std > 0.0 { (score - mean) / std } else { 0.0 };

    let n = history.len() as f64;
    let margin = Z_95 * std / n.sqrt();
    let interval = (
        (score - margin).clamp(0.0, 1.0),
        (score + margin).clamp(0.0, 1.0),
    );

    StatisticalMetrics {
        z_score: z,
        p_value: two_tailed_p(z),
        confidence_interval: interval,
        is_statistically_valid: z.abs() <= Z_VALIDITY_CUTOFF,
        sample_size: history.len(),
    }
}

/// Two-tailed p-value under the normal approximation: erfc(|z| / √2).
fn two_tailed_p(z: f64) -> f64 {
    erfc(z.abs() / std::f64::consts::SQRT_2).clamp(0.0, 1.0)
}

/// Complementary error function, Abramowitz & Stegun 7.1.26.
/// Maximum absolute error 1.5e-7 — far below what score comparison needs.
fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    poly * (-x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_value_is_one_at_zero_and_small_for_large_z() {
        assert!((two_tailed_p(0.0) - 1.0).abs() < 1e-6);
        assert!(two_tailed_p(3.0) < 0.01);
    }

    #[test]
    fn erfc_matches_known_values() {
        // erfc(1) ≈ 0.157299
        assert!((erfc(1.0) - 0.157299).abs() < 1e-4);
    }
}
