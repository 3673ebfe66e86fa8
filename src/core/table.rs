//! Rating table: targets in rows, judges in columns.
//!
//! # Example
//!
//! ```
//! use anofox_icc::core::RatingTable;
//!
//! let table = RatingTable::from_rows(&[
//!     vec![9.0, 2.0, 5.0, 8.0],
//!     vec![6.0, 1.0, 3.0, 2.0],
//!     vec![8.0, 4.0, 6.0, 8.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(table.n_targets(), 3);
//! assert_eq!(table.n_judges(), 4);
//! ```

use faer::Mat;
use thiserror::Error;

/// Smallest number of targets and judges for which every ICC is defined.
pub const MIN_DIMENSION: usize = 2;

/// Errors raised while building a [`RatingTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// Fewer than two targets or fewer than two judges.
    #[error("invalid shape: need at least 2 targets and 2 judges, got {targets}x{judges}")]
    InvalidShape { targets: usize, judges: usize },

    /// A row does not have the same number of ratings as the first row.
    #[error("ragged rows: row {row} has {got} ratings, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A cell is NaN or infinite.
    #[error("non-finite rating at row {row}, column {col}")]
    NonFiniteRating { row: usize, col: usize },
}

/// An immutable `n_targets x n_judges` matrix of complete, finite ratings.
///
/// Construction validates the shape and every cell, so downstream code can
/// rely on `n_targets >= 2`, `n_judges >= 2` and finite values.
#[derive(Debug, Clone)]
pub struct RatingTable {
    data: Mat<f64>,
}

impl RatingTable {
    /// Wrap an existing matrix (rows = targets, columns = judges).
    pub fn new(data: Mat<f64>) -> Result<Self, TableError> {
        Self::validate(&data)?;
        Ok(Self { data })
    }

    /// Build a table from row slices, one slice per target.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, TableError> {
        let n_targets = rows.len();
        let n_judges = rows.first().map_or(0, |r| r.as_ref().len());

        for (row, values) in rows.iter().enumerate() {
            let got = values.as_ref().len();
            if got != n_judges {
                return Err(TableError::RaggedRows {
                    row,
                    expected: n_judges,
                    got,
                });
            }
        }

        let data = Mat::from_fn(n_targets, n_judges, |i, j| rows[i].as_ref()[j]);
        Self::new(data)
    }

    /// Build a table from a closure evaluated at every `(target, judge)` cell.
    pub fn from_fn(
        n_targets: usize,
        n_judges: usize,
        f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, TableError> {
        Self::new(Mat::from_fn(n_targets, n_judges, f))
    }

    fn validate(data: &Mat<f64>) -> Result<(), TableError> {
        let targets = data.nrows();
        let judges = data.ncols();

        if targets < MIN_DIMENSION || judges < MIN_DIMENSION {
            return Err(TableError::InvalidShape { targets, judges });
        }

        for i in 0..targets {
            for j in 0..judges {
                if !data[(i, j)].is_finite() {
                    return Err(TableError::NonFiniteRating { row: i, col: j });
                }
            }
        }

        Ok(())
    }

    /// Number of rated targets (rows).
    pub fn n_targets(&self) -> usize {
        self.data.nrows()
    }

    /// Number of judges (columns).
    pub fn n_judges(&self) -> usize {
        self.data.ncols()
    }

    /// Rating given to `target` by `judge`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, target: usize, judge: usize) -> f64 {
        self.data[(target, judge)]
    }

    /// Borrow the underlying matrix.
    pub fn as_mat(&self) -> &Mat<f64> {
        &self.data
    }

    /// Consume the table and return the underlying matrix.
    pub fn into_mat(self) -> Mat<f64> {
        self.data
    }
}

impl TryFrom<Mat<f64>> for RatingTable {
    type Error = TableError;

    fn try_from(data: Mat<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
