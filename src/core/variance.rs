//! Two-way ANOVA decomposition of a rating table.

use super::table::RatingTable;
use crate::utils::{column_means, grand_mean, row_means, squared_deviations};

/// Sums of squares and mean squares shared by every ICC estimator.
///
/// With `n` targets and `k` judges:
///
/// | Term | Sum of squares | df | Mean square |
/// |---|---|---|---|
/// | Between targets | `BSS = k Σ (row mean − grand mean)²` | `n − 1` | `RMS` |
/// | Between judges | `RSS = n Σ (col mean − grand mean)²` | `k − 1` | `CMS` |
/// | Within targets | `WSS = Σ (x − row mean)²` | `n (k − 1)` | `WMS` |
/// | Residual | `ESS = WSS − RSS` | `(n − 1)(k − 1)` | `EMS` |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceComponents {
    /// Number of targets (rows).
    pub n_targets: usize,
    /// Number of judges (columns).
    pub n_judges: usize,
    /// Mean of all ratings.
    pub grand_mean: f64,

    /// Within-targets sum of squares.
    pub wss: f64,
    /// Between-judges sum of squares.
    pub rss: f64,
    /// Between-targets sum of squares.
    pub bss: f64,
    /// Residual sum of squares.
    pub ess: f64,

    /// Within-targets mean square.
    pub wms: f64,
    /// Between-judges (columns) mean square.
    pub cms: f64,
    /// Between-targets (rows) mean square.
    pub rms: f64,
    /// Residual mean square.
    pub ems: f64,
}

impl VarianceComponents {
    /// Decompose the table's total variation.
    pub fn compute(table: &RatingTable) -> Self {
        let x = table.as_mat();
        let n = table.n_targets();
        let k = table.n_judges();

        let target_means = row_means(x);
        let judge_means = column_means(x);
        let mean_total = grand_mean(x);

        let mut wss = 0.0;
        for i in 0..n {
            for j in 0..k {
                wss += (x[(i, j)] - target_means[i]).powi(2);
            }
        }
        let rss = n as f64 * squared_deviations(&judge_means, mean_total);
        let bss = k as f64 * squared_deviations(&target_means, mean_total);
        let ess = wss - rss;

        let mut components = Self {
            n_targets: n,
            n_judges: k,
            grand_mean: mean_total,
            wss,
            rss,
            bss,
            ess,
            wms: 0.0,
            cms: 0.0,
            rms: 0.0,
            ems: 0.0,
        };
        components.wms = wss / components.df_within();
        components.cms = rss / components.df_judges();
        components.rms = bss / components.df_targets();
        components.ems = ess / components.df_residual();
        components
    }

    /// `n` as a float.
    pub fn n(&self) -> f64 {
        self.n_targets as f64
    }

    /// `k` as a float.
    pub fn k(&self) -> f64 {
        self.n_judges as f64
    }

    /// Between-targets degrees of freedom, `n − 1`.
    pub fn df_targets(&self) -> f64 {
        self.n() - 1.0
    }

    /// Between-judges degrees of freedom, `k − 1`.
    pub fn df_judges(&self) -> f64 {
        self.k() - 1.0
    }

    /// Within-targets degrees of freedom, `n (k − 1)`.
    pub fn df_within(&self) -> f64 {
        self.n() * (self.k() - 1.0)
    }

    /// Residual degrees of freedom, `(n − 1)(k − 1)`.
    pub fn df_residual(&self) -> f64 {
        (self.n() - 1.0) * (self.k() - 1.0)
    }

    /// Total sum of squares (`BSS + WSS`).
    pub fn tss(&self) -> f64 {
        self.bss + self.wss
    }
}
