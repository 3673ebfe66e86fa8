//! ICC estimators, one per Shrout & Fleiss variant.

mod analyzer;
mod one_way;
mod traits;
mod two_way_mixed;
mod two_way_random;

pub use analyzer::{icc, IccAnalyzer, IccAnalyzerBuilder};
pub use one_way::{Icc1Estimator, Icc1kEstimator};
pub use traits::{IccError, IccEstimator};
pub use two_way_mixed::{Icc3Estimator, Icc3kEstimator};
pub use two_way_random::{Icc2Estimator, Icc2kEstimator};

use crate::core::IccType;

/// The estimator implementing `kind`.
pub fn estimator_for(kind: IccType) -> &'static dyn IccEstimator {
    match kind {
        IccType::Icc1 => &Icc1Estimator,
        IccType::Icc2 => &Icc2Estimator,
        IccType::Icc3 => &Icc3Estimator,
        IccType::Icc1k => &Icc1kEstimator,
        IccType::Icc2k => &Icc2kEstimator,
        IccType::Icc3k => &Icc3kEstimator,
    }
}
