//! Percentile Computation and Series Summaries
//!
//! Percentiles use linear interpolation between nearest ranks. The
//! describe-style summary mirrors the quartile block printed for every
//! analysis: count, mean, std dev, min, q25, median, q75, max.

/// Describe-style summary of one metric series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of values in the series.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q75: f64,
    /// Maximum value.
    pub max: f64,
}

/// Compute a single percentile from a series.
///
/// Uses linear interpolation between nearest ranks; empty input yields 0.
pub fn compute_percentile(values: &[f64], percentile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    if values.len() == 1 {
        return values[0];
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(sorted.len() - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Median of a series (50th percentile).
pub fn median(values: &[f64]) -> f64 {
    compute_percentile(values, 50.0)
}

/// Compute the describe-style summary of a series.
pub fn describe(values: &[f64]) -> SeriesSummary {
    if values.is_empty() {
        return SeriesSummary {
            count: 0,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            q25: 0.0,
            median: 0.0,
            q75: 0.0,
            max: 0.0,
        };
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        0.0
    } else {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };

    let min = values
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    SeriesSummary {
        count,
        mean,
        std_dev,
        min,
        q25: compute_percentile(values, 25.0),
        median: compute_percentile(values, 50.0),
        q75: compute_percentile(values, 75.0),
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_series() {
        let values = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert!((median(&values) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn median_of_even_series_interpolates() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert!((median(&values) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn quartiles_of_uniform_series() {
        let values: Vec<f64> = (1..=101).map(|v| v as f64).collect();
        assert!((compute_percentile(&values, 25.0) - 26.0).abs() < 1e-9);
        assert!((compute_percentile(&values, 75.0) - 76.0).abs() < 1e-9);
    }

    #[test]
    fn describe_matches_hand_computation() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = describe(&values);

        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // Sample std dev of this classic series is sqrt(32/7)
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert!((summary.median - 4.5).abs() < 1e-12);
    }

    #[test]
    fn describe_of_empty_series() {
        let summary = describe(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 0.0);
    }

    #[test]
    fn single_value_is_its_own_percentile() {
        assert!((compute_percentile(&[42.0], 99.0) - 42.0).abs() < f64::EPSILON);
    }
}
