//! Statistical inference (F-tests, p-values, interval helpers).

mod f_test;
mod satterthwaite;

pub use f_test::{f_quantile, ratio_bounds, upper_tail_p_value, FTest};
pub use satterthwaite::AgreementCoefficients;
