//! Two-way mixed effects, consistency: ICC(3,1) and ICC(3,k).
//!
//! Judges are fixed, so their main effect is removed and targets are
//! compared against the residual mean square `EMS`.

use crate::core::{IccType, VarianceComponents};
use crate::estimators::traits::IccEstimator;
use crate::inference::{ratio_bounds, FTest};

fn df(vc: &VarianceComponents) -> (f64, f64) {
    (vc.df_targets(), vc.df_residual())
}

/// F-test shared by ICC(3,1) and ICC(3,k): `RMS/EMS (1 − rho0) / (1 + (k − 1) rho0)`.
fn shared_f_test(vc: &VarianceComponents, rho0: f64) -> FTest {
    let (df1, df2) = df(vc);
    let statistic = vc.rms / vc.ems * (1.0 - rho0) / (1.0 + (vc.k() - 1.0) * rho0);
    FTest::new(statistic, df1, df2)
}

/// ICC(3,1), "Single fixed raters".
///
/// `(RMS − EMS) / (RMS + (k − 1) EMS)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc3Estimator;

impl IccEstimator for Icc3Estimator {
    fn kind(&self) -> IccType {
        IccType::Icc3
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        (vc.rms - vc.ems) / (vc.rms + (vc.k() - 1.0) * vc.ems)
    }

    fn f_test(&self, vc: &VarianceComponents, rho0: f64) -> FTest {
        shared_f_test(vc, rho0)
    }

    fn confidence_interval(
        &self,
        vc: &VarianceComponents,
        _estimate: f64,
        alpha: f64,
    ) -> (f64, f64) {
        let (df1, df2) = df(vc);
        let k = vc.k();
        let (fl, fu) = ratio_bounds(vc.rms / vc.ems, df1, df2, alpha);
        ((fl - 1.0) / (fl + k - 1.0), (fu - 1.0) / (fu + k - 1.0))
    }
}

/// ICC(3,k), "Average fixed raters".
///
/// `(RMS − EMS) / RMS`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc3kEstimator;

impl IccEstimator for Icc3kEstimator {
    fn kind(&self) -> IccType {
        IccType::Icc3k
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        (vc.rms - vc.ems) / vc.rms
    }

    fn f_test(&self, vc: &VarianceComponents, rho0: f64) -> FTest {
        shared_f_test(vc, rho0)
    }

    fn confidence_interval(
        &self,
        vc: &VarianceComponents,
        _estimate: f64,
        alpha: f64,
    ) -> (f64, f64) {
        let (df1, df2) = df(vc);
        let (fl, fu) = ratio_bounds(vc.rms / vc.ems, df1, df2, alpha);
        (1.0 - 1.0 / fl, 1.0 - 1.0 / fu)
    }
}
