//! ICC analysis options and configuration.

use thiserror::Error;

/// Configuration options for an ICC analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IccOptions {
    /// Significance level; intervals cover `1 - alpha` (default: 0.05).
    pub alpha: f64,
    /// ICC value under the null hypothesis of the F-tests (default: 0).
    ///
    /// Must lie in `(-1/(k - 1), 1)` for `k` judges; negative values are
    /// allowed since the ICC itself can be negative.
    pub rho0: f64,
}

impl Default for IccOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            rho0: 0.0,
        }
    }
}

/// Errors that can occur when validating ICC options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
    #[error("rho0 must be in (-1, 1), got {0}")]
    InvalidNullValue(f64),
    /// `1 + (k - 1) rho0` is not positive, so the null statistic is undefined.
    #[error("rho0 must exceed -1/(k - 1) for {n_judges} judges, got {rho0}")]
    NullValueBelowBound { rho0: f64, n_judges: usize },
}

impl IccOptions {
    /// Create a new builder for ICC options.
    pub fn builder() -> IccOptionsBuilder {
        IccOptionsBuilder::default()
    }

    /// Options with the given significance level and `rho0 = 0`.
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Default::default()
        }
    }

    /// Confidence level of the intervals, `1 - alpha`.
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(OptionsError::InvalidAlpha(self.alpha));
        }
        if !(self.rho0 > -1.0 && self.rho0 < 1.0) {
            return Err(OptionsError::InvalidNullValue(self.rho0));
        }
        Ok(())
    }

    /// Validate the options against a table with `n_judges` judges.
    ///
    /// Adds the lower bound `rho0 > -1/(k - 1)` to [`IccOptions::validate`].
    pub fn validate_for(&self, n_judges: usize) -> Result<(), OptionsError> {
        self.validate()?;
        let k = n_judges as f64;
        if 1.0 + (k - 1.0) * self.rho0 <= 0.0 {
            return Err(OptionsError::NullValueBelowBound {
                rho0: self.rho0,
                n_judges,
            });
        }
        Ok(())
    }
}

/// Builder for `IccOptions`.
#[derive(Debug, Clone, Default)]
pub struct IccOptionsBuilder {
    options: IccOptions,
}

impl IccOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.options.alpha = alpha;
        self
    }

    /// Set the significance level from a confidence level (`alpha = 1 - level`).
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.alpha = 1.0 - level;
        self
    }

    /// Set the hypothesized ICC value for the F-tests.
    pub fn rho0(mut self, rho0: f64) -> Self {
        self.options.rho0 = rho0;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<IccOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> IccOptions {
        self.options
    }
}
