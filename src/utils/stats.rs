//! Small numeric helpers shared by the run parser and the aggregator.

use crate::utils::config::AVG_DECIMALS;

/// Arithmetic mean of a slice; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard median: mean of the two central values for even-length input.
///
/// Returns 0.0 for an empty slice; callers only pass non-empty delay lists.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round a mean latency to the report precision (3 decimals)
pub fn round_avg(value: f64) -> f64 {
    round_to(value, AVG_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.5]), 7.5);
    }

    #[test]
    fn test_round_avg() {
        assert_eq!(round_avg(2.2219999), 2.222);
        assert_eq!(round_avg(1.0 / 3.0), 0.333);
    }
}
