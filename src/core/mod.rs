//! Core types for ICC analysis.

mod kind;
mod options;
mod result;
mod table;
mod variance;

pub use kind::{IccModel, IccType};
pub use options::{IccOptions, IccOptionsBuilder, OptionsError};
pub use result::{IccAnalysis, IccResult};
pub use table::{RatingTable, TableError, MIN_DIMENSION};
pub use variance::VarianceComponents;
