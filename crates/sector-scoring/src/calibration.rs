//! Historical calibration: pull the raw score toward the mean of past
//! scores, with quality growing asymptotically in sample size.

use sector_core::models::CalibrationData;
use sector_core::stats;

/// Sample size at which calibration quality reaches 0.5.
const QUALITY_HALF_POINT: f64 = 20.0;

pub fn calibrate(raw_score: f64, history: &[f64], blend: f64) -> CalibrationData {
    if history.is_empty() {
        return CalibrationData {
            raw_score,
            calibrated_score: raw_score,
            calibration_method: "none".to_string(),
            calibration_quality: 0.0,
            historical_sample_size: 0,
        };
    }

    let historical_mean = stats::mean(history);
    let calibrated = raw_score + blend * (historical_mean - raw_score);
    let n = history.len() as f64;

    CalibrationData {
        raw_score,
        calibrated_score: calibrated.clamp(0.0, 1.0),
        calibration_method: "historical_performance".to_string(),
        calibration_quality: n / (n + QUALITY_HALF_POINT),
        historical_sample_size: history.len(),
    }
}
