//! The estimators built on the numeric primitives.
//!
//! 1. **Robust Gaussian fitting** ([`robust`]): iterative binned curve fit
//!    with outlier trimming and a naive moment-based fallback
//! 2. **Binomial intervals** ([`binomial`]): exact Clopper-Pearson bounds
//!    and per-bin adapter statistics
//! 3. **Binning** ([`binning`]): grouping dependent values into fixed-width
//!    bins and applying a statistic per bin

pub mod binning;
pub mod binomial;
pub mod robust;

pub use binning::{binned_statistic, BinStatistic, BinnedStatistic};
pub use binomial::{clopper_pearson, ClopperPearsonLower, ClopperPearsonUpper, DEFAULT_ALPHA};
pub use robust::{
    binned_gaussian_fit, naive_gaussian_fit, robust_gaussian_fit, robust_mean, robust_std,
    robust_std_err, RobustMean, RobustStd, RobustStdErr,
};
