//! # binfit
//!
//! Robust per-bin statistics for noisy, outlier-contaminated measurements.
//!
//! This crate turns raw per-event measurements (a residual, a 0/1
//! efficiency flag) into per-bin summary statistics with uncertainties,
//! suitable for plotting with error bars:
//!
//! - **Robust Gaussian estimation**: an iterative, histogram-based Gaussian
//!   fit that rejects outliers across multiple passes and reports the
//!   (mean, std) parameter covariance, with a naive moment-based fallback
//!   when the fit is unreliable. The public accessors never fail: internal
//!   fit errors are absorbed by the fallback tier.
//! - **Exact binomial intervals**: Clopper-Pearson confidence bounds for
//!   binomial proportions, exposed both directly and as per-bin aggregation
//!   statistics (upper bound only, lower bound only).
//!
//! ## Quick start
//!
//! ```
//! use binfit::{clopper_pearson, robust_gaussian_fit, FitConfig};
//!
//! // Robust location/spread of a residual sample.
//! let residuals: Vec<f64> = (0..500).map(|i| ((i % 41) as f64 - 20.0) * 0.01).collect();
//! let fit = robust_gaussian_fit(&residuals, &FitConfig::default());
//! assert!(fit.std >= 0.0);
//!
//! // 1-sigma-equivalent bounds on an efficiency of 47/50.
//! let ci = clopper_pearson(47, 50, 0.32);
//! assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
//! ```
//!
//! ## Per-bin aggregation
//!
//! Statistics implement [`BinStatistic`] and plug into
//! [`binned_statistic`], which groups a dependent variable into fixed-width
//! bins of an independent variable:
//!
//! ```
//! use binfit::{binned_statistic, ClopperPearsonUpper};
//!
//! let eta = vec![-1.0, -0.5, 0.2, 0.4, 0.9];
//! let found = vec![1.0, 1.0, 0.0, 1.0, 1.0];
//! let upper = binned_statistic(&eta, &found, 4, (-2.0, 2.0), &ClopperPearsonUpper::default());
//! assert_eq!(upper.values.len(), 4);
//! ```
//!
//! Every operation is a pure function over in-memory data: no I/O, no
//! shared state, and results that are invariant under permutation of the
//! input sample.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod statistics;
pub mod types;

pub use analysis::binning::{binned_statistic, BinStatistic, BinnedStatistic};
pub use analysis::binomial::{
    clopper_pearson, ClopperPearsonLower, ClopperPearsonUpper, DEFAULT_ALPHA,
};
pub use analysis::robust::{
    binned_gaussian_fit, naive_gaussian_fit, robust_gaussian_fit, robust_mean, robust_std,
    robust_std_err, RobustMean, RobustStd, RobustStdErr,
};
pub use config::FitConfig;
pub use types::{ConfidenceInterval, FitError, FitMethod, GaussianFit, Matrix2, Vector2};
