//! Core traits for ICC estimators.

use crate::core::{IccOptions, IccResult, IccType, OptionsError, TableError, VarianceComponents};
use crate::inference::FTest;
use thiserror::Error;

/// Errors that can occur during an ICC analysis.
///
/// Only the input boundary can fail. Numeric degeneracies inside a single
/// estimator surface as non-finite fields of its [`IccResult`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IccError {
    #[error("invalid rating table: {0}")]
    InvalidTable(#[from] TableError),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

impl IccError {
    /// Whether the table had fewer than two targets or two judges.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, IccError::InvalidTable(TableError::InvalidShape { .. }))
    }
}

/// One ICC variant: point estimate, F-test and confidence interval, each a
/// pure function of the variance components.
pub trait IccEstimator {
    /// Which variant this estimator computes.
    fn kind(&self) -> IccType;

    /// Point estimate.
    fn estimate(&self, vc: &VarianceComponents) -> f64;

    /// F-test of `H0: ICC = rho0`.
    fn f_test(&self, vc: &VarianceComponents, rho0: f64) -> FTest;

    /// Confidence interval at level `1 - alpha`.
    ///
    /// `estimate` is the value returned by [`IccEstimator::estimate`]; only the
    /// two-way random variants use it.
    fn confidence_interval(
        &self,
        vc: &VarianceComponents,
        estimate: f64,
        alpha: f64,
    ) -> (f64, f64);

    /// Run all three stages and package the result.
    fn evaluate(&self, vc: &VarianceComponents, options: &IccOptions) -> IccResult {
        let estimate = self.estimate(vc);
        let test = self.f_test(vc, options.rho0);
        let confidence_interval = self.confidence_interval(vc, estimate, options.alpha);

        IccResult {
            kind: self.kind(),
            estimate,
            f_statistic: test.statistic,
            df1: test.df1,
            df2: test.df2,
            p_value: test.p_value,
            confidence_interval,
        }
    }
}
