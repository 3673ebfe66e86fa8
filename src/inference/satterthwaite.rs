//! Linear combinations of mean squares for the two-way random model.
//!
//! ICC(2,1) and ICC(2,k) compare `RMS` against `a * CMS + b * EMS`. The
//! coefficients depend on an ICC value (the null `rho0` for the F-test, the
//! point estimate for the confidence interval), and the combination's
//! effective degrees of freedom follow Satterthwaite (1946).
//!
//! No guard is placed on `rho`: at `rho = 1` the coefficients divide by
//! zero and the resulting `NaN`/`inf` flows into the interval.

use crate::core::VarianceComponents;

/// Coefficients `(a, b)` of `a * CMS + b * EMS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgreementCoefficients {
    pub a: f64,
    pub b: f64,
}

impl AgreementCoefficients {
    /// Single-rater coefficients (McGraw & Wong case A-1):
    ///
    /// `a = k ρ / (n (1 − ρ))`, `b = 1 + k ρ (n − 1) / (n (1 − ρ))`.
    pub fn single(rho: f64, vc: &VarianceComponents) -> Self {
        let n = vc.n();
        let k = vc.k();
        let scale = n * (1.0 - rho);
        Self {
            a: k * rho / scale,
            b: 1.0 + k * rho * (n - 1.0) / scale,
        }
    }

    /// Average-rater coefficients (case A-k), the single-rater form without
    /// the `k` factor:
    ///
    /// `c = ρ / (n (1 − ρ))`, `d = 1 + ρ (n − 1) / (n (1 − ρ))`.
    pub fn average(rho: f64, vc: &VarianceComponents) -> Self {
        let n = vc.n();
        let scale = n * (1.0 - rho);
        Self {
            a: rho / scale,
            b: 1.0 + rho * (n - 1.0) / scale,
        }
    }

    /// `a * CMS + b * EMS`.
    pub fn combined_mean_square(&self, vc: &VarianceComponents) -> f64 {
        self.a * vc.cms + self.b * vc.ems
    }

    /// Satterthwaite degrees of freedom of the combined mean square:
    ///
    /// `v = (a CMS + b EMS)² / ((a CMS)² / (k − 1) + (b EMS)² / ((n − 1)(k − 1)))`.
    pub fn satterthwaite_df(&self, vc: &VarianceComponents) -> f64 {
        let judges_term = self.a * vc.cms;
        let residual_term = self.b * vc.ems;

        let numerator = (judges_term + residual_term).powi(2);
        let denominator =
            judges_term.powi(2) / vc.df_judges() + residual_term.powi(2) / vc.df_residual();

        numerator / denominator
    }
}
