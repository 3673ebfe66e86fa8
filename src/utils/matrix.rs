//! Matrix utility functions.

use faer::{Col, Mat};

/// Mean of each row (one entry per target).
pub fn row_means(x: &Mat<f64>) -> Col<f64> {
    let n_cols = x.ncols();

    Col::from_fn(x.nrows(), |i| {
        let sum: f64 = (0..n_cols).map(|j| x[(i, j)]).sum();
        sum / n_cols as f64
    })
}

/// Mean of each column (one entry per judge).
pub fn column_means(x: &Mat<f64>) -> Col<f64> {
    let n_rows = x.nrows();

    Col::from_fn(x.ncols(), |j| {
        let sum: f64 = (0..n_rows).map(|i| x[(i, j)]).sum();
        sum / n_rows as f64
    })
}

/// Mean of every cell in the matrix.
pub fn grand_mean(x: &Mat<f64>) -> f64 {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut sum = 0.0;
    for j in 0..n_cols {
        for i in 0..n_rows {
            sum += x[(i, j)];
        }
    }

    sum / (n_rows * n_cols) as f64
}

/// Sum of squared deviations of `values` around `center`.
pub fn squared_deviations(values: &Col<f64>, center: f64) -> f64 {
    values.iter().map(|&v| (v - center).powi(2)).sum()
}
