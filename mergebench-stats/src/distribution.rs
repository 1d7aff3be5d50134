//! Distribution Helpers
//!
//! Closed-form approximations good to a few decimal places in the p-value,
//! which is all the reported tests need.

/// Standard normal CDF, Abramowitz–Stegun 7.1.26 approximation.
pub(crate) fn normal_cdf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x / 2.0).exp();

    0.5 * (1.0 + sign * y)
}

/// Two-sided p-value for a standard normal statistic.
pub(crate) fn normal_two_sided_p(z: f64) -> f64 {
    (2.0 * (1.0 - normal_cdf(z.abs()))).clamp(0.0, 1.0)
}

/// Survival function of the chi-squared distribution.
///
/// Wilson–Hilferty: the cube root of a chi-squared variable over its degrees
/// of freedom is approximately normal.
pub(crate) fn chi_squared_sf(x: f64, df: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    let nine_df = 9.0 * df;
    let z = ((x / df).powf(1.0 / 3.0) - (1.0 - 2.0 / nine_df)) / (2.0 / nine_df).sqrt();
    (1.0 - normal_cdf(z)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_cdf_at_zero_is_half() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn normal_cdf_known_points() {
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((normal_cdf(-1.96) - 0.025).abs() < 1e-3);
        assert!(normal_cdf(6.0) > 0.999);
    }

    #[test]
    fn two_sided_p_is_symmetric() {
        assert!((normal_two_sided_p(1.5) - normal_two_sided_p(-1.5)).abs() < 1e-12);
        assert!((normal_two_sided_p(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn chi_squared_sf_known_points() {
        // df=2: exact survival is exp(-x/2); 5.991 is the 95th percentile
        assert!((chi_squared_sf(5.991, 2.0) - 0.05).abs() < 5e-3);
        // df=4: 9.488 is the 95th percentile
        assert!((chi_squared_sf(9.488, 4.0) - 0.05).abs() < 5e-3);
        assert!((chi_squared_sf(0.0, 2.0) - 1.0).abs() < 1e-12);
    }
}
