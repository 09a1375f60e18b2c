//! Zero-failure statistics helpers.
//!
//! Every function here is total: empty input yields a defined zero value,
//! never an error or panic, so aggregate computations over partial data
//! degrade gracefully instead of aborting a validation pipeline.

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance. Fewer than 2 values yields 0.0.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Fewer than 2 values yields 0.0.
pub fn std_deviation(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Remove duplicate strings, preserving first-occurrence order.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn variance_of_identical_values_is_zero() {
        let values = [0.7; 5];
        assert_eq!(variance(&values), 0.0);
        assert_eq!(std_deviation(&values), 0.0);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_preserving_order(items), vec!["b", "a"]);
    }
}
