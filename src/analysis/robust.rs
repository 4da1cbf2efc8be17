//! Robust Gaussian estimation with iterative outlier trimming.
//!
//! The primary tier histograms the working sample and fits a Gaussian
//! density curve to the bins, repeating for a fixed number of passes while
//! discarding points far from the current fit. It reports the parameter
//! covariance of the final curve fit. Any failure (too little data, a
//! degenerate histogram range, solver non-convergence) drops the estimator
//! to a naive tier that iterates plain moments with a median-centered trim
//! and reports a zero covariance.
//!
//! All public entry points are total: they never panic and never return an
//! error, trading estimate quality for availability.

use serde::{Deserialize, Serialize};

use crate::analysis::binning::BinStatistic;
use crate::config::FitConfig;
use crate::statistics::{fit_gaussian_pdf, mean, median, std, DensityHistogram};
use crate::types::{FitError, FitMethod, GaussianFit, Matrix2};

/// Fit a Gaussian to `data`, robustly against outlier contamination.
///
/// Empty input returns the degenerate all-zero result. Otherwise the binned
/// fit is attempted and, should it fail for any reason, the naive fallback
/// runs instead; the failure is logged at debug level and never surfaced.
///
/// Results are permutation invariant: the working sample is canonicalized
/// by sorting before any arithmetic.
///
/// # Example
///
/// ```
/// use binfit::{robust_gaussian_fit, FitConfig};
///
/// let sample: Vec<f64> = (0..200).map(|i| ((i % 21) as f64 - 10.0) * 0.1).collect();
/// let fit = robust_gaussian_fit(&sample, &FitConfig::default());
/// assert!(fit.std >= 0.0);
/// ```
pub fn robust_gaussian_fit(data: &[f64], config: &FitConfig) -> GaussianFit {
    // The builder methods enforce these invariants; catch configs built by
    // hand with struct literals before they mislead the tier selection.
    debug_assert!(
        config.validate().is_ok(),
        "invalid FitConfig: {}",
        config.validate().unwrap_err()
    );

    if data.is_empty() {
        return GaussianFit::degenerate();
    }

    match binned_gaussian_fit(data, config) {
        Ok(fit) => fit,
        Err(err) => {
            tracing::debug!(%err, "binned Gaussian fit failed, falling back to naive moments");
            naive_gaussian_fit(data, config)
        }
    }
}

/// The primary tier: iterative histogram + curve fit.
///
/// Each pass seeds a density histogram over `mean +/- range_width * std` of
/// the working sample, fits a Gaussian PDF to the (center, density) pairs,
/// then keeps only the points within `trim_width * std` of the fitted mean
/// for the next pass. The result carries the final pass's fit covariance.
///
/// # Errors
///
/// Any [`FitError`]; callers that must not fail should use
/// [`robust_gaussian_fit`], which converts errors into the naive fallback.
pub fn binned_gaussian_fit(data: &[f64], config: &FitConfig) -> Result<GaussianFit, FitError> {
    let mut working = canonicalized(data);
    let mut last: Option<(f64, f64, Matrix2)> = None;

    for _ in 0..config.passes {
        if working.len() < config.min_points {
            return Err(FitError::InsufficientData {
                available: working.len(),
                required: config.min_points,
            });
        }

        let seed_mean = mean(&working);
        let seed_std = std(&working);
        let range = (
            seed_mean - config.range_width * seed_std,
            seed_mean + config.range_width * seed_std,
        );
        let bins = config.bin_count(working.len());

        let hist = DensityHistogram::new(&working, range, bins)?;
        let (params, covariance) =
            fit_gaussian_pdf(hist.centers(), hist.densities(), seed_mean, seed_std)?;
        let (fit_mean, fit_std) = (params[0], params[1]);

        working.retain(|&x| (x - fit_mean).abs() < config.trim_width * fit_std);
        last = Some((fit_mean, fit_std, covariance));
    }

    // The loop ran at least once: configs are constructed with passes >= 1.
    let (fit_mean, fit_std, covariance) = last.ok_or(FitError::InsufficientData {
        available: data.len(),
        required: config.min_points,
    })?;

    Ok(GaussianFit {
        mean: fit_mean,
        std: fit_std,
        covariance,
        method: FitMethod::Binned,
    })
}

/// The fallback tier: iterative moments with a median-centered trim.
///
/// Each pass takes the plain mean and population std of the working sample,
/// then keeps only the points within `trim_width * std` of the working
/// sample's *median*. Trimming around the median rather than the mean is
/// deliberate: it anchors the cut on an estimate the outliers cannot drag.
/// No covariance is available from this path; it is reported as zero.
///
/// If a trim pass empties the working sample (possible when the spread is
/// zero), the remaining passes are skipped and the last estimate stands.
/// Empty input returns the degenerate all-zero result, tagged as such.
pub fn naive_gaussian_fit(data: &[f64], config: &FitConfig) -> GaussianFit {
    if data.is_empty() {
        return GaussianFit::degenerate();
    }

    let mut working = canonicalized(data);
    let mut estimate = (0.0, 0.0);

    for _ in 0..config.passes {
        if working.is_empty() {
            break;
        }
        estimate = (mean(&working), std(&working));
        let center = median(&working);
        let cut = config.trim_width * estimate.1;
        working.retain(|&x| (x - center).abs() < cut);
    }

    GaussianFit {
        mean: estimate.0,
        std: estimate.1,
        covariance: Matrix2::zeros(),
        method: FitMethod::Naive,
    }
}

/// Robust location estimate; re-runs the full fit.
pub fn robust_mean(data: &[f64], config: &FitConfig) -> f64 {
    robust_gaussian_fit(data, config).mean
}

/// Robust spread estimate; re-runs the full fit.
pub fn robust_std(data: &[f64], config: &FitConfig) -> f64 {
    robust_gaussian_fit(data, config).std
}

/// Standard error of the robust spread estimate; re-runs the full fit.
///
/// Zero whenever the naive fallback produced the estimate.
pub fn robust_std_err(data: &[f64], config: &FitConfig) -> f64 {
    robust_gaussian_fit(data, config).std_err_of_std()
}

/// Sorted copy of the input; makes every downstream reduction independent
/// of the caller's element order.
fn canonicalized(data: &[f64]) -> Vec<f64> {
    let mut working = data.to_vec();
    working.sort_unstable_by(|a, b| a.total_cmp(b));
    working
}

/// Per-bin statistic: robust location ([`robust_mean`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RobustMean {
    /// Fit configuration applied to each bin's values.
    pub config: FitConfig,
}

/// Per-bin statistic: robust spread ([`robust_std`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RobustStd {
    /// Fit configuration applied to each bin's values.
    pub config: FitConfig,
}

/// Per-bin statistic: standard error of the robust spread
/// ([`robust_std_err`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RobustStdErr {
    /// Fit configuration applied to each bin's values.
    pub config: FitConfig,
}

impl BinStatistic for RobustMean {
    fn evaluate(&self, values: &[f64]) -> f64 {
        robust_mean(values, &self.config)
    }
}

impl BinStatistic for RobustStd {
    fn evaluate(&self, values: &[f64]) -> f64 {
        robust_std(values, &self.config)
    }
}

impl BinStatistic for RobustStdErr {
    fn evaluate(&self, values: &[f64]) -> f64 {
        robust_std_err(values, &self.config)
    }
}
