//! Numeric helpers shared by the variance decomposition.

mod matrix;

pub use matrix::{column_means, grand_mean, row_means, squared_deviations};
