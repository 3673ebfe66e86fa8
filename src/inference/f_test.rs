//! F-distribution oracle and F-test records.
//!
//! Every call into `statrs` goes through [`upper_tail_p_value`] or
//! [`f_quantile`], which turn degenerate parameters into `NaN` instead of
//! panicking, so one bad variant never aborts the other five.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use statrs::function::beta::inv_beta_reg;

/// An F-test: statistic, degrees of freedom and upper-tail p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTest {
    pub statistic: f64,
    pub df1: f64,
    pub df2: f64,
    pub p_value: f64,
}

impl FTest {
    /// Evaluate `P(F(df1, df2) > statistic)`.
    pub fn new(statistic: f64, df1: f64, df2: f64) -> Self {
        Self {
            statistic,
            df1,
            df2,
            p_value: upper_tail_p_value(statistic, df1, df2),
        }
    }
}

/// Degrees of freedom above this are clamped before inverting the beta
/// function. `inv_beta_reg` does not converge for parameters near 1e8, and
/// at 1e6 the quantile is within 1e-5 of its limiting chi-square form.
const MAX_QUANTILE_DF: f64 = 1e6;

fn valid_df(df: f64) -> bool {
    df.is_finite() && df > 0.0
}

fn distribution(df1: f64, df2: f64) -> Option<FisherSnedecor> {
    if !valid_df(df1) || !valid_df(df2) {
        return None;
    }
    FisherSnedecor::new(df1, df2).ok()
}

/// Upper-tail probability `1 - Fcdf(statistic; df1, df2)`.
///
/// `+inf` maps to 0 and any negative statistic to 1. A `NaN` statistic or
/// invalid degrees of freedom yield `NaN`.
pub fn upper_tail_p_value(statistic: f64, df1: f64, df2: f64) -> f64 {
    if statistic.is_nan() {
        return f64::NAN;
    }
    let Some(dist) = distribution(df1, df2) else {
        return f64::NAN;
    };

    if statistic == f64::INFINITY {
        0.0
    } else if statistic <= 0.0 {
        1.0
    } else {
        dist.sf(statistic)
    }
}

/// Quantile `Finv(p; df1, df2)`, or `NaN` when `p` or the degrees of freedom
/// are out of range.
///
/// Inverts through the regularized incomplete beta function: if
/// `X ~ F(df1, df2)` then `df1 X / (df1 X + df2) ~ Beta(df1/2, df2/2)`.
/// Degrees of freedom above 1e6 are clamped.
pub fn f_quantile(p: f64, df1: f64, df2: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) || !valid_df(df1) || !valid_df(df2) {
        return f64::NAN;
    }
    let df1 = df1.min(MAX_QUANTILE_DF);
    let df2 = df2.min(MAX_QUANTILE_DF);
    let q = inv_beta_reg(df1 / 2.0, df2 / 2.0, p);
    df2 * q / (df1 * (1.0 - q))
}

/// Bounds `(FL, FU)` on an observed mean-square ratio.
///
/// `FL = f_obs / Finv(1 - alpha/2; df1, df2)` and
/// `FU = f_obs * Finv(1 - alpha/2; df2, df1)`.
pub fn ratio_bounds(f_obs: f64, df1: f64, df2: f64, alpha: f64) -> (f64, f64) {
    let p = 1.0 - alpha / 2.0;
    let lower = f_obs / f_quantile(p, df1, df2);
    let upper = f_obs * f_quantile(p, df2, df1);
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_value_known_values() {
        assert!((upper_tail_p_value(3.0, 4.0, 20.0) - 0.043_200_998_334_214).abs() < 1e-8);
        assert!((upper_tail_p_value(1.0, 2.0, 2.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_p_value_far_tail_keeps_precision() {
        // 1 - P(F(5, 15) > 1e6) underflows to 0 in double precision.
        let p = upper_tail_p_value(1e6, 5.0, 15.0);
        assert!(p > 0.0);
        assert!((p / 7.367_678_584_210_199e-41 - 1.0).abs() < 1e-6);

        let p = upper_tail_p_value(1e4, 5.0, 15.0);
        assert!((p / 7.348_399_180_062_335e-26 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_p_value_edges() {
        assert_eq!(upper_tail_p_value(f64::INFINITY, 3.0, 5.0), 0.0);
        assert_eq!(upper_tail_p_value(0.0, 3.0, 5.0), 1.0);
        assert_eq!(upper_tail_p_value(-2.0, 3.0, 5.0), 1.0);
        assert!(upper_tail_p_value(f64::NAN, 3.0, 5.0).is_nan());
    }

    #[test]
    fn test_p_value_invalid_df() {
        assert!(upper_tail_p_value(2.0, 0.0, 5.0).is_nan());
        assert!(upper_tail_p_value(2.0, 3.0, -1.0).is_nan());
        assert!(upper_tail_p_value(2.0, 3.0, f64::NAN).is_nan());
        assert!(upper_tail_p_value(2.0, f64::INFINITY, 5.0).is_nan());
    }

    #[test]
    fn test_quantile_known_values() {
        assert!((f_quantile(0.975, 9.0, 10.0) - 3.778_962_634_091_574).abs() < 1e-6);
        assert!((f_quantile(0.975, 10.0, 9.0) - 3.963_865_157_622_532).abs() < 1e-6);
        assert!((f_quantile(0.95, 5.0, 15.0) - 2.901_294_536_236_157).abs() < 1e-6);
    }

    #[test]
    fn test_quantile_fractional_df() {
        assert!((f_quantile(0.975, 9.0, 9.826_122_059_581) - 3.817_287_150_357_014).abs() < 1e-6);
    }

    #[test]
    fn test_quantile_huge_df_approaches_chi_square_limit() {
        // qchisq(0.975, 9) / 9 and 9 / qchisq(0.025, 9)
        let upper = f_quantile(0.975, 9.0, 1e9);
        assert!((upper - 2.113_640_866_515_737).abs() < 1e-4);
        assert_eq!(upper, f_quantile(0.975, 9.0, 1e300));

        let lower = f_quantile(0.975, 1e9, 9.0);
        assert!((lower - 3.332_852_538_519_152).abs() < 1e-4);
        assert_eq!(lower, f_quantile(0.975, 1e300, 9.0));

        assert!((f_quantile(0.975, 1e9, 1e9) - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_quantile_invalid_inputs() {
        assert!(f_quantile(1.0, 3.0, 5.0).is_nan());
        assert!(f_quantile(0.0, 3.0, 5.0).is_nan());
        assert!(f_quantile(f64::NAN, 3.0, 5.0).is_nan());
        assert!(f_quantile(0.95, f64::NAN, 5.0).is_nan());
        assert!(f_quantile(0.95, 3.0, 0.0).is_nan());
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let q = f_quantile(0.9, 7.0, 12.0);
        assert!((upper_tail_p_value(q, 7.0, 12.0) - 0.1).abs() < 1e-8);
    }

    #[test]
    fn test_f_test_record() {
        let test = FTest::new(6.184_116_809_116_81, 9.0, 10.0);
        assert_eq!(test.df1, 9.0);
        assert_eq!(test.df2, 10.0);
        assert!((test.p_value - 0.004_367_456_751).abs() < 1e-8);
    }

    #[test]
    fn test_ratio_bounds() {
        let (fl, fu) = ratio_bounds(6.0, 9.0, 10.0, 0.05);
        assert!((fl - 6.0 / 3.778_962_634_091_574).abs() < 1e-5);
        assert!((fu - 6.0 * 3.963_865_157_622_532).abs() < 1e-5);
        assert!(fl < 6.0 && 6.0 < fu);
    }
}
