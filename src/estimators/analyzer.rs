//! Entry point: run all six ICC estimators over a rating table.

use crate::core::{
    IccAnalysis, IccOptions, IccOptionsBuilder, IccResult, IccType, RatingTable,
    VarianceComponents,
};
use crate::estimators::estimator_for;
use crate::estimators::traits::IccError;

/// Computes ICC(1,1), ICC(2,1), ICC(3,1), ICC(1,k), ICC(2,k) and ICC(3,k).
///
/// # Example
///
/// ```
/// use anofox_icc::prelude::*;
///
/// let table = RatingTable::from_rows(&[
///     [9.0, 2.0, 5.0, 8.0],
///     [6.0, 1.0, 3.0, 2.0],
///     [8.0, 4.0, 6.0, 8.0],
///     [7.0, 1.0, 2.0, 6.0],
///     [10.0, 5.0, 6.0, 9.0],
///     [6.0, 2.0, 4.0, 7.0],
/// ])?;
///
/// let analysis = IccAnalyzer::builder().alpha(0.05).build().analyze(&table)?;
///
/// let icc3 = analysis.get(IccType::Icc3);
/// assert!((icc3.estimate - 0.7148).abs() < 1e-4);
/// # Ok::<(), anofox_icc::estimators::IccError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IccAnalyzer {
    options: IccOptions,
}

impl IccAnalyzer {
    /// Create a new analyzer with the given options.
    pub fn new(options: IccOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the analyzer.
    pub fn builder() -> IccAnalyzerBuilder {
        IccAnalyzerBuilder::default()
    }

    /// Options this analyzer runs with.
    pub fn options(&self) -> &IccOptions {
        &self.options
    }

    /// Decompose the table and evaluate every ICC variant.
    ///
    /// Fails only on invalid options; per-variant numeric degeneracies are
    /// reported as non-finite fields of the corresponding result.
    pub fn analyze(&self, table: &RatingTable) -> Result<IccAnalysis, IccError> {
        self.options.validate_for(table.n_judges())?;

        let components = VarianceComponents::compute(table);
        tracing::debug!(
            n_targets = components.n_targets,
            n_judges = components.n_judges,
            rms = components.rms,
            cms = components.cms,
            wms = components.wms,
            ems = components.ems,
            "decomposed rating table"
        );

        let results = IccType::ALL.map(|kind| self.evaluate(kind, &components));
        Ok(IccAnalysis::new(results, components, self.options))
    }

    /// Build a table from row slices and analyze it.
    pub fn analyze_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<IccAnalysis, IccError> {
        let table = RatingTable::from_rows(rows)?;
        self.analyze(&table)
    }

    /// Evaluate a single variant.
    pub fn analyze_one(&self, table: &RatingTable, kind: IccType) -> Result<IccResult, IccError> {
        self.options.validate_for(table.n_judges())?;
        let components = VarianceComponents::compute(table);
        Ok(self.evaluate(kind, &components))
    }

    fn evaluate(&self, kind: IccType, components: &VarianceComponents) -> IccResult {
        let result = estimator_for(kind).evaluate(components, &self.options);

        tracing::trace!(
            icc = %kind,
            estimate = result.estimate,
            f = result.f_statistic,
            p = result.p_value,
            "evaluated estimator"
        );
        if !result.is_finite() {
            tracing::debug!(
                icc = %kind,
                estimate = result.estimate,
                ci_lower = result.ci_lower(),
                ci_upper = result.ci_upper(),
                "degenerate mean squares produced non-finite output"
            );
        }

        result
    }
}

/// Compute all six ICCs at significance level `alpha` with `rho0 = 0`.
pub fn icc(table: &RatingTable, alpha: f64) -> Result<IccAnalysis, IccError> {
    IccAnalyzer::new(IccOptions::with_alpha(alpha)).analyze(table)
}

/// Builder for `IccAnalyzer`.
#[derive(Debug, Clone, Default)]
pub struct IccAnalyzerBuilder {
    builder: IccOptionsBuilder,
}

impl IccAnalyzerBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.builder = self.builder.alpha(alpha);
        self
    }

    /// Set the confidence level (`alpha = 1 - level`).
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the hypothesized ICC for the F-tests.
    pub fn rho0(mut self, rho0: f64) -> Self {
        self.builder = self.builder.rho0(rho0);
        self
    }

    /// Build the analyzer. Options are validated when `analyze` runs.
    pub fn build(self) -> IccAnalyzer {
        IccAnalyzer::new(self.builder.build_unchecked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionsError;

    fn reference_table() -> RatingTable {
        RatingTable::from_rows(&[
            [103.0, 119.0],
            [82.0, 65.0],
            [116.0, 106.0],
            [102.0, 102.0],
            [99.0, 105.0],
            [98.0, 100.0],
            [104.0, 107.0],
            [62.0, 85.0],
            [97.0, 101.0],
            [107.0, 110.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_analyze_returns_canonical_order() {
        let analysis = IccAnalyzer::default().analyze(&reference_table()).unwrap();

        let kinds: Vec<_> = analysis.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, IccType::ALL);
        assert_eq!(analysis.n_targets(), 10);
        assert_eq!(analysis.n_judges(), 2);
    }

    #[test]
    fn test_builder_options_are_kept() {
        let analyzer = IccAnalyzer::builder().alpha(0.1).rho0(0.2).build();
        assert!((analyzer.options().alpha - 0.1).abs() < 1e-12);
        assert!((analyzer.options().rho0 - 0.2).abs() < 1e-12);

        let analysis = analyzer.analyze(&reference_table()).unwrap();
        assert!((analysis.alpha() - 0.1).abs() < 1e-12);
        assert!((analysis.rho0() - 0.2).abs() < 1e-12);
        assert!((analysis.confidence_level() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_options_rejected_at_analyze() {
        let analyzer = IccAnalyzer::builder().alpha(0.0).build();
        let err = analyzer.analyze(&reference_table()).unwrap_err();
        assert_eq!(err, IccError::InvalidOptions(OptionsError::InvalidAlpha(0.0)));

        let analyzer = IccAnalyzer::builder().rho0(1.0).build();
        assert!(analyzer.analyze_one(&reference_table(), IccType::Icc2).is_err());
    }

    #[test]
    fn test_rho0_bound_checked_against_table() {
        // Two judges admit any rho0 above -1.
        let analysis = IccAnalyzer::builder()
            .rho0(-0.8)
            .build()
            .analyze(&reference_table())
            .unwrap();
        assert!((analysis.rho0() + 0.8).abs() < 1e-12);

        let four_judges = RatingTable::from_fn(5, 4, |i, j| (i * 3 + j % 2) as f64).unwrap();
        let err = IccAnalyzer::builder()
            .rho0(-0.8)
            .build()
            .analyze(&four_judges)
            .unwrap_err();
        assert_eq!(
            err,
            IccError::InvalidOptions(OptionsError::NullValueBelowBound {
                rho0: -0.8,
                n_judges: 4
            })
        );
    }

    #[test]
    fn test_analyze_rows_shape_error() {
        let err = IccAnalyzer::default()
            .analyze_rows(&[[1.0, 2.0, 3.0]])
            .unwrap_err();
        assert!(err.is_invalid_shape());
    }

    #[test]
    fn test_analyze_one_matches_full_analysis() {
        let table = reference_table();
        let analyzer = IccAnalyzer::default();
        let analysis = analyzer.analyze(&table).unwrap();

        for kind in IccType::ALL {
            let single = analyzer.analyze_one(&table, kind).unwrap();
            assert_eq!(&single, analysis.get(kind));
        }
    }

    #[test]
    fn test_icc_function() {
        let analysis = icc(&reference_table(), 0.05).unwrap();
        assert!((analysis.get(IccType::Icc1).estimate - 0.7216).abs() < 1e-4);
        assert!(icc(&reference_table(), 1.5).is_err());
    }
}
