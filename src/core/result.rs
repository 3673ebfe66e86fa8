//! ICC result structures.

use super::kind::IccType;
use super::options::IccOptions;
use super::variance::VarianceComponents;

/// Point estimate and inference for one ICC variant.
///
/// Degenerate inputs (a zero mean square, an estimate at 0 or 1) leave
/// `NaN` or `±inf` in the affected fields; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IccResult {
    /// Which coefficient this is.
    pub kind: IccType,

    /// Point estimate. May fall outside [0, 1].
    pub estimate: f64,

    /// F-statistic against `H0: ICC = rho0`.
    pub f_statistic: f64,

    /// Numerator degrees of freedom.
    pub df1: f64,

    /// Denominator degrees of freedom.
    pub df2: f64,

    /// Upper-tail p-value of the F-test.
    pub p_value: f64,

    /// Confidence interval `(lower, upper)` at level `1 - alpha`.
    pub confidence_interval: (f64, f64),
}

impl IccResult {
    /// Shrout & Fleiss label, e.g. `ICC(2,1)`.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// McGraw & Wong description, e.g. `Single random raters`.
    pub fn descriptive_name(&self) -> &'static str {
        self.kind.descriptive_name()
    }

    /// Lower confidence bound.
    pub fn ci_lower(&self) -> f64 {
        self.confidence_interval.0
    }

    /// Upper confidence bound.
    pub fn ci_upper(&self) -> f64 {
        self.confidence_interval.1
    }

    /// Whether `value` lies inside the confidence interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        let (lower, upper) = self.confidence_interval;
        lower <= value && value <= upper
    }

    /// Whether the F-test rejects `H0` at `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.estimate,
            self.f_statistic,
            self.df1,
            self.df2,
            self.p_value,
            self.confidence_interval.0,
            self.confidence_interval.1,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// The six ICC results of one rating table, in canonical order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IccAnalysis {
    results: [IccResult; 6],
    components: VarianceComponents,
    options: IccOptions,
}

impl IccAnalysis {
    /// Assemble an analysis. `results` must follow [`IccType::ALL`].
    pub(crate) fn new(
        results: [IccResult; 6],
        components: VarianceComponents,
        options: IccOptions,
    ) -> Self {
        debug_assert!(results
            .iter()
            .zip(IccType::ALL)
            .all(|(r, kind)| r.kind == kind));

        Self {
            results,
            components,
            options,
        }
    }

    /// Result for one variant.
    pub fn get(&self, kind: IccType) -> &IccResult {
        &self.results[kind.index()]
    }

    /// All six results in canonical order.
    pub fn results(&self) -> &[IccResult; 6] {
        &self.results
    }

    /// Iterate over the results in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, IccResult> {
        self.results.iter()
    }

    /// The ANOVA decomposition the results were derived from.
    pub fn variance_components(&self) -> &VarianceComponents {
        &self.components
    }

    /// Options used for the analysis.
    pub fn options(&self) -> &IccOptions {
        &self.options
    }

    /// Significance level.
    pub fn alpha(&self) -> f64 {
        self.options.alpha
    }

    /// Hypothesized ICC under the null.
    pub fn rho0(&self) -> f64 {
        self.options.rho0
    }

    /// Confidence level of the intervals.
    pub fn confidence_level(&self) -> f64 {
        self.options.confidence_level()
    }

    /// Number of targets in the analyzed table.
    pub fn n_targets(&self) -> usize {
        self.components.n_targets
    }

    /// Number of judges in the analyzed table.
    pub fn n_judges(&self) -> usize {
        self.components.n_judges
    }
}

impl<'a> IntoIterator for &'a IccAnalysis {
    type Item = &'a IccResult;
    type IntoIter = std::slice::Iter<'a, IccResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl std::ops::Index<IccType> for IccAnalysis {
    type Output = IccResult;

    fn index(&self, kind: IccType) -> &Self::Output {
        self.get(kind)
    }
}
