//! Intraclass correlation coefficients for inter-rater reliability.
//!
//! Given a table of ratings (targets in rows, judges in columns) this crate
//! performs the two-way ANOVA decomposition and reports the six Shrout &
//! Fleiss (1979) coefficients with McGraw & Wong (1996) inference: point
//! estimate, F-test against a hypothesized value, p-value and confidence
//! interval.
//!
//! | Variant | Model | Unit |
//! |---|---|---|
//! | ICC(1,1) / ICC(1,k) | one-way random | single / average rater |
//! | ICC(2,1) / ICC(2,k) | two-way random, absolute agreement | single / average rater |
//! | ICC(3,1) / ICC(3,k) | two-way mixed, consistency | single / average rater |
//!
//! # Example
//!
//! ```rust
//! use anofox_icc::prelude::*;
//!
//! let table = RatingTable::from_rows(&[
//!     [103.0, 119.0],
//!     [82.0, 65.0],
//!     [116.0, 106.0],
//!     [102.0, 102.0],
//!     [99.0, 105.0],
//!     [98.0, 100.0],
//!     [104.0, 107.0],
//!     [62.0, 85.0],
//!     [97.0, 101.0],
//!     [107.0, 110.0],
//! ])?;
//!
//! let analysis = IccAnalyzer::builder()
//!     .confidence_level(0.95)
//!     .build()
//!     .analyze(&table)?;
//!
//! for result in &analysis {
//!     println!(
//!         "{:<24} {:>8} {:.3} [{:.3}, {:.3}] p={:.5}",
//!         result.descriptive_name(),
//!         result.label(),
//!         result.estimate,
//!         result.ci_lower(),
//!         result.ci_upper(),
//!         result.p_value,
//!     );
//! }
//! # Ok::<(), anofox_icc::IccError>(())
//! ```
//!
//! Degenerate tables (for instance judges in perfect agreement, which makes a
//! mean square zero) are not errors: the affected fields hold `NaN` or
//! `±inf` and the other variants are unaffected.

pub mod core;
pub mod estimators;
pub mod inference;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        IccAnalysis, IccModel, IccOptions, IccOptionsBuilder, IccResult, IccType, OptionsError,
        RatingTable, TableError, VarianceComponents,
    };
    pub use crate::estimators::{icc, IccAnalyzer, IccAnalyzerBuilder, IccError, IccEstimator};
}

pub use crate::core::{
    IccAnalysis, IccModel, IccOptions, IccOptionsBuilder, IccResult, IccType, OptionsError,
    RatingTable, TableError, VarianceComponents,
};
pub use crate::estimators::{icc, IccAnalyzer, IccAnalyzerBuilder, IccError, IccEstimator};
