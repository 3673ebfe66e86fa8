//! Two-way random effects, absolute agreement: ICC(2,1) and ICC(2,k).
//!
//! Judges are a random sample, so systematic judge offsets count against
//! agreement. Targets are compared with the combination `a CMS + b EMS`,
//! which has no exact F reference; confidence intervals use Satterthwaite's
//! approximate degrees of freedom (McGraw & Wong 1996, cases A-1 and A-k).

use crate::core::{IccType, VarianceComponents};
use crate::estimators::traits::IccEstimator;
use crate::inference::{f_quantile, AgreementCoefficients, FTest};

/// Critical values `(Finv(p; n−1, v), Finv(p; v, n−1))` at `p = 1 − alpha/2`.
fn critical_values(vc: &VarianceComponents, v: f64, alpha: f64) -> (f64, f64) {
    let p = 1.0 - alpha / 2.0;
    (f_quantile(p, vc.df_targets(), v), f_quantile(p, v, vc.df_targets()))
}

/// ICC(2,1), "Single random raters".
///
/// `(RMS − EMS) / (RMS + (CMS − EMS) k / n + (k − 1) EMS)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc2Estimator;

impl IccEstimator for Icc2Estimator {
    fn kind(&self) -> IccType {
        IccType::Icc2
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        let (n, k) = (vc.n(), vc.k());
        (vc.rms - vc.ems) / (vc.rms + (vc.cms - vc.ems) * k / n + (k - 1.0) * vc.ems)
    }

    fn f_test(&self, vc: &VarianceComponents, rho0: f64) -> FTest {
        let coef = AgreementCoefficients::single(rho0, vc);
        FTest::new(
            vc.rms / coef.combined_mean_square(vc),
            vc.df_targets(),
            vc.df_residual(),
        )
    }

    fn confidence_interval(
        &self,
        vc: &VarianceComponents,
        estimate: f64,
        alpha: f64,
    ) -> (f64, f64) {
        let (n, k) = (vc.n(), vc.k());
        let v = AgreementCoefficients::single(estimate, vc).satterthwaite_df(vc);
        let (f_lower, f_upper) = critical_values(vc, v, alpha);

        let pooled = k * vc.cms + (k * n - k - n) * vc.ems;
        let lower = n * (vc.rms - f_lower * vc.ems) / (f_lower * pooled + n * vc.rms);
        let upper = n * (f_upper * vc.rms - vc.ems) / (pooled + n * f_upper * vc.rms);
        (lower, upper)
    }
}

/// ICC(2,k), "Average random raters".
///
/// `(RMS − EMS) / (RMS + (CMS − EMS) / n)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc2kEstimator;

impl IccEstimator for Icc2kEstimator {
    fn kind(&self) -> IccType {
        IccType::Icc2k
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        (vc.rms - vc.ems) / (vc.rms + (vc.cms - vc.ems) / vc.n())
    }

    fn f_test(&self, vc: &VarianceComponents, rho0: f64) -> FTest {
        let coef = AgreementCoefficients::average(rho0, vc);
        FTest::new(
            vc.rms / coef.combined_mean_square(vc),
            vc.df_targets(),
            vc.df_residual(),
        )
    }

    fn confidence_interval(
        &self,
        vc: &VarianceComponents,
        estimate: f64,
        alpha: f64,
    ) -> (f64, f64) {
        let n = vc.n();
        let v = AgreementCoefficients::average(estimate, vc).satterthwaite_df(vc);
        let (f_lower, f_upper) = critical_values(vc, v, alpha);

        let judges = vc.cms - vc.ems;
        let lower = n * (vc.rms - f_lower * vc.ems) / (f_lower * judges + n * vc.rms);
        let upper = n * (f_upper * vc.rms - vc.ems) / (judges + n * f_upper * vc.rms);
        (lower, upper)
    }
}
