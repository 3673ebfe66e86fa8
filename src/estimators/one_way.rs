//! One-way random effects: ICC(1,1) and ICC(1,k).
//!
//! Every target is rated by its own set of judges, so judge and residual
//! variation are pooled into the within-target mean square `WMS`.

use crate::core::{IccType, VarianceComponents};
use crate::estimators::traits::IccEstimator;
use crate::inference::{ratio_bounds, FTest};

fn df(vc: &VarianceComponents) -> (f64, f64) {
    (vc.df_targets(), vc.df_within())
}

/// F-test shared by ICC(1,1) and ICC(1,k): `RMS/WMS (1 − rho0) / (1 + (k − 1) rho0)`.
fn shared_f_test(vc: &VarianceComponents, rho0: f64) -> FTest {
    let (df1, df2) = df(vc);
    let statistic = vc.rms / vc.wms * (1.0 - rho0) / (1.0 + (vc.k() - 1.0) * rho0);
    FTest::new(statistic, df1, df2)
}

/// ICC(1,1), "Single raters absolute".
///
/// `(RMS − WMS) / (RMS + (k − 1) WMS)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc1Estimator;

impl IccEstimator for Icc1Estimator {
    fn kind(&self) -> IccType {
        IccType::Icc1
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        (vc.rms - vc.wms) / (vc.rms + (vc.k() - 1.0) * vc.wms)
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
        let (fl, fu) = ratio_bounds(vc.rms / vc.wms, df1, df2, alpha);
        ((fl - 1.0) / (fl + k - 1.0), (fu - 1.0) / (fu + k - 1.0))
    }
}

/// ICC(1,k), "Average raters absolute".
///
/// `(RMS − WMS) / RMS`
#[derive(Debug, Clone, Copy, Default)]
pub struct Icc1kEstimator;

impl IccEstimator for Icc1kEstimator {
    fn kind(&self) -> IccType {
        IccType::Icc1k
    }

    fn estimate(&self, vc: &VarianceComponents) -> f64 {
        (vc.rms - vc.wms) / vc.rms
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
        let (fl, fu) = ratio_bounds(vc.rms / vc.wms, df1, df2, alpha);
        (1.0 - 1.0 / fl, 1.0 - 1.0 / fu)
    }
}
