//! The six ICC variants and their naming conventions.

use std::fmt;

/// ANOVA model underlying an ICC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IccModel {
    /// Each target rated by a different random set of judges.
    OneWayRandom,
    /// Judges are a random sample; judge effects count as disagreement.
    TwoWayRandom,
    /// Judges are fixed; only consistency between judges is measured.
    TwoWayMixed,
}

/// One of the six Shrout & Fleiss intraclass correlations.
///
/// The declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IccType {
    /// ICC(1,1): one-way random, single rater.
    Icc1,
    /// ICC(2,1): two-way random, absolute agreement, single rater.
    Icc2,
    /// ICC(3,1): two-way mixed, consistency, single rater.
    Icc3,
    /// ICC(1,k): one-way random, mean of k raters.
    Icc1k,
    /// ICC(2,k): two-way random, absolute agreement, mean of k raters.
    Icc2k,
    /// ICC(3,k): two-way mixed, consistency, mean of k raters.
    Icc3k,
}

impl IccType {
    /// All variants in canonical order.
    pub const ALL: [IccType; 6] = [
        IccType::Icc1,
        IccType::Icc2,
        IccType::Icc3,
        IccType::Icc1k,
        IccType::Icc2k,
        IccType::Icc3k,
    ];

    /// Short identifier (`ICC1`, `ICC2k`, ...).
    pub fn name(self) -> &'static str {
        match self {
            IccType::Icc1 => "ICC1",
            IccType::Icc2 => "ICC2",
            IccType::Icc3 => "ICC3",
            IccType::Icc1k => "ICC1k",
            IccType::Icc2k => "ICC2k",
            IccType::Icc3k => "ICC3k",
        }
    }

    /// Shrout & Fleiss label, e.g. `ICC(2,1)`.
    pub fn label(self) -> &'static str {
        match self {
            IccType::Icc1 => "ICC(1,1)",
            IccType::Icc2 => "ICC(2,1)",
            IccType::Icc3 => "ICC(3,1)",
            IccType::Icc1k => "ICC(1,k)",
            IccType::Icc2k => "ICC(2,k)",
            IccType::Icc3k => "ICC(3,k)",
        }
    }

    /// McGraw & Wong style description.
    pub fn descriptive_name(self) -> &'static str {
        match self {
            IccType::Icc1 => "Single raters absolute",
            IccType::Icc2 => "Single random raters",
            IccType::Icc3 => "Single fixed raters",
            IccType::Icc1k => "Average raters absolute",
            IccType::Icc2k => "Average random raters",
            IccType::Icc3k => "Average fixed raters",
        }
    }

    /// Underlying ANOVA model.
    pub fn model(self) -> IccModel {
        match self {
            IccType::Icc1 | IccType::Icc1k => IccModel::OneWayRandom,
            IccType::Icc2 | IccType::Icc2k => IccModel::TwoWayRandom,
            IccType::Icc3 | IccType::Icc3k => IccModel::TwoWayMixed,
        }
    }

    /// Whether the coefficient describes the mean of all k raters.
    pub fn is_average(self) -> bool {
        matches!(self, IccType::Icc1k | IccType::Icc2k | IccType::Icc3k)
    }

    /// The single-rater counterpart of an average-rater variant, and vice versa.
    pub fn counterpart(self) -> IccType {
        match self {
            IccType::Icc1 => IccType::Icc1k,
            IccType::Icc2 => IccType::Icc2k,
            IccType::Icc3 => IccType::Icc3k,
            IccType::Icc1k => IccType::Icc1,
            IccType::Icc2k => IccType::Icc2,
            IccType::Icc3k => IccType::Icc3,
        }
    }

    /// Position in [`IccType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IccType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
