//! Non-parametric Significance Tests
//!
//! Friedman chi-squared for k matched series and the Wilcoxon signed-rank
//! test for one matched pair. Both are rank tests: no normality assumption
//! about the underlying metric, which is routinely violated by diff sizes
//! and running times.

use thiserror::Error;

use crate::distribution::{chi_squared_sf, normal_two_sided_p};
use crate::ranks::{average_ranks, tie_correction_term};

/// Result of a significance test: the test statistic and its p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceTest {
    /// Test statistic (chi-squared for Friedman, W for Wilcoxon).
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

/// Errors from significance testing.
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    /// No data to test.
    #[error("series are empty")]
    Empty,
    /// Matched series differ in length.
    #[error("matched series must have equal lengths ({left} vs {right})")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the offending series.
        right: usize,
    },
    /// Friedman needs at least three series to rank within rows.
    #[error("friedman test needs at least 3 matched series, got {0}")]
    TooFewSeries(usize),
    /// Friedman needs at least two rows for a meaningful statistic.
    #[error("friedman test needs at least 2 matched rows, got {0}")]
    TooFewRows(usize),
    /// Wilcoxon is undefined when every paired difference is zero.
    #[error("all paired differences are zero")]
    AllZeroDifferences,
    /// Every row is fully tied; the rank statistic is undefined.
    #[error("ranks are fully tied, test statistic is undefined")]
    FullyTied,
}

/// Friedman chi-squared test across k matched series.
///
/// Ranks the k values within each row (average ranks on ties), applies the
/// tie-corrected chi-squared statistic and evaluates it against k − 1
/// degrees of freedom.
pub fn friedman_test(columns: &[&[f64]]) -> Result<SignificanceTest, StatsError> {
    let k = columns.len();
    if k < 3 {
        return Err(StatsError::TooFewSeries(k));
    }
    let n = columns[0].len();
    for col in columns {
        if col.len() != n {
            return Err(StatsError::LengthMismatch {
                left: n,
                right: col.len(),
            });
        }
    }
    if n == 0 {
        return Err(StatsError::Empty);
    }
    if n < 2 {
        return Err(StatsError::TooFewRows(n));
    }

    let kf = k as f64;
    let nf = n as f64;

    let mut rank_sums = vec![0.0; k];
    let mut tie_term = 0.0;
    let mut row = vec![0.0; k];
    for i in 0..n {
        for (j, col) in columns.iter().enumerate() {
            row[j] = col[i];
        }
        let ranks = average_ranks(&row);
        for (j, rank) in ranks.iter().enumerate() {
            rank_sums[j] += rank;
        }
        tie_term += tie_correction_term(&row);
    }

    let correction = 1.0 - tie_term / (nf * kf * (kf * kf - 1.0));
    if correction <= 0.0 {
        return Err(StatsError::FullyTied);
    }

    let sum_sq: f64 = rank_sums.iter().map(|r| r * r).sum();
    let uncorrected = 12.0 / (nf * kf * (kf + 1.0)) * sum_sq - 3.0 * nf * (kf + 1.0);
    let statistic = uncorrected / correction;
    let p_value = chi_squared_sf(statistic, kf - 1.0);

    Ok(SignificanceTest { statistic, p_value })
}

/// Wilcoxon signed-rank test of two matched series, two-sided.
///
/// Zero differences are dropped; the absolute differences are ranked with
/// average ranks on ties. The reported statistic is W = min(W+, W−); its
/// p-value comes from the tie-corrected normal approximation.
pub fn wilcoxon_signed_rank(a: &[f64], b: &[f64]) -> Result<SignificanceTest, StatsError> {
    if a.len() != b.len() {
        return Err(StatsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(StatsError::Empty);
    }

    let diffs: Vec<f64> = a
        .iter()
        .zip(b)
        .map(|(x, y)| x - y)
        .filter(|d| *d != 0.0)
        .collect();
    let n = diffs.len();
    if n == 0 {
        return Err(StatsError::AllZeroDifferences);
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = average_ranks(&abs_diffs);

    let w_plus: f64 = diffs
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();
    let nf = n as f64;
    let w_minus = nf * (nf + 1.0) / 2.0 - w_plus;
    let statistic = w_plus.min(w_minus);

    let mean = nf * (nf + 1.0) / 4.0;
    let variance =
        nf * (nf + 1.0) * (2.0 * nf + 1.0) / 24.0 - tie_correction_term(&abs_diffs) / 48.0;
    if variance <= 0.0 {
        return Err(StatsError::FullyTied);
    }

    let z = (statistic - mean) / variance.sqrt();
    let p_value = normal_two_sided_p(z);

    Ok(SignificanceTest { statistic, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friedman_on_consistently_ordered_series() {
        // Within every row the order is col0 < col1 < col2, so the rank sums
        // are maximally spread: statistic is exactly 8 for n=4, k=3.
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 3.0, 4.0, 5.0];
        let c = [3.0, 4.0, 5.0, 6.0];

        let test = friedman_test(&[&a, &b, &c]).unwrap();
        assert!((test.statistic - 8.0).abs() < 1e-9);
        // chi-squared survival at 8 with 2 df is exp(-4) ~ 0.0183
        assert!(test.p_value > 0.01 && test.p_value < 0.03);
    }

    #[test]
    fn friedman_identical_series_is_degenerate() {
        let a = [1.0, 2.0, 3.0];
        let err = friedman_test(&[&a, &a, &a]).unwrap_err();
        assert!(matches!(err, StatsError::FullyTied));
    }

    #[test]
    fn friedman_rejects_two_series() {
        let a = [1.0, 2.0];
        let b = [2.0, 3.0];
        assert!(matches!(
            friedman_test(&[&a, &b]),
            Err(StatsError::TooFewSeries(2))
        ));
    }

    #[test]
    fn friedman_rejects_mismatched_lengths() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0];
        let c = [1.0, 2.0, 3.0];
        assert!(matches!(
            friedman_test(&[&a, &b, &c]),
            Err(StatsError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn wilcoxon_detects_constant_shift() {
        let a: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let b: Vec<f64> = a.iter().map(|v| v + 5.0).collect();

        let test = wilcoxon_signed_rank(&a, &b).unwrap();
        // Every difference is negative, so W+ = 0.
        assert!((test.statistic - 0.0).abs() < 1e-12);
        assert!(test.p_value < 0.01);
    }

    #[test]
    fn wilcoxon_balanced_differences_are_insignificant() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 1.0, 4.0, 3.0, 6.0];

        let test = wilcoxon_signed_rank(&a, &b).unwrap();
        assert!((test.statistic - 6.0).abs() < 1e-9);
        assert!(test.p_value > 0.5);
    }

    #[test]
    fn wilcoxon_drops_zero_differences() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 5.0];

        // Only one non-zero pair survives; the test runs on it alone.
        let test = wilcoxon_signed_rank(&a, &b).unwrap();
        assert!(test.p_value > 0.3);
    }

    #[test]
    fn wilcoxon_identical_series_errors() {
        let a = [1.0, 2.0, 3.0];
        assert!(matches!(
            wilcoxon_signed_rank(&a, &a),
            Err(StatsError::AllZeroDifferences)
        ));
    }

    #[test]
    fn wilcoxon_rejects_mismatched_lengths() {
        assert!(matches!(
            wilcoxon_signed_rank(&[1.0], &[1.0, 2.0]),
            Err(StatsError::LengthMismatch { left: 1, right: 2 })
        ));
    }
}
