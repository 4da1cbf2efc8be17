//! Result and error types shared across the crate.

use nalgebra::{SMatrix, SVector};
use serde::{Deserialize, Serialize};

/// 2x2 covariance matrix over the fitted (mean, std) parameters.
pub type Matrix2 = SMatrix<f64, 2, 2>;

/// 2-dimensional vector for the fitted (mean, std) parameters.
pub type Vector2 = SVector<f64, 2>;

/// Which estimation tier produced a [`GaussianFit`].
///
/// The robust estimator is two-tiered: a binned curve fit that reports a
/// parameter covariance, and a naive moment-based fallback that cannot.
/// Carrying the tier in the result makes the fallback policy observable
/// without inspecting the covariance for zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitMethod {
    /// Histogram-based nonlinear least-squares fit (full covariance).
    Binned,
    /// Iterative moment estimator (zero covariance).
    Naive,
    /// Empty input; all outputs are zero by definition.
    Degenerate,
}

/// Estimated Gaussian parameters with their uncertainty.
///
/// Produced by [`robust_gaussian_fit`](crate::analysis::robust::robust_gaussian_fit).
/// The covariance rows/columns are ordered (mean, std); it is zero when the
/// estimate came from the naive fallback or from an empty sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianFit {
    /// Estimated location of the central population.
    pub mean: f64,
    /// Estimated spread of the central population (always >= 0).
    pub std: f64,
    /// Covariance of the (mean, std) estimates.
    pub covariance: Matrix2,
    /// Which tier produced this estimate.
    pub method: FitMethod,
}

impl GaussianFit {
    /// The defined result for an empty sample: all zeros.
    pub fn degenerate() -> Self {
        Self {
            mean: 0.0,
            std: 0.0,
            covariance: Matrix2::zeros(),
            method: FitMethod::Degenerate,
        }
    }

    /// Standard error of the mean estimate (sqrt of the (mean, mean)
    /// covariance entry).
    pub fn std_err_of_mean(&self) -> f64 {
        self.covariance[(0, 0)].max(0.0).sqrt()
    }

    /// Standard error of the std estimate (sqrt of the (std, std)
    /// covariance entry).
    pub fn std_err_of_std(&self) -> f64 {
        self.covariance[(1, 1)].max(0.0).sqrt()
    }
}

/// Error returned when the binned Gaussian fit cannot produce an estimate.
///
/// These never escape the public accessors: every variant routes the
/// estimator to the naive fallback tier instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// The working sample is too small to histogram and fit.
    InsufficientData {
        /// Points available in the working sample.
        available: usize,
        /// Points required by the configuration.
        required: usize,
    },
    /// The histogram range collapsed or was not finite (e.g. zero spread).
    DegenerateRange,
    /// The nonlinear solver did not converge to a minimum.
    NonConvergence,
    /// The Jacobian at the solution was singular; no covariance exists.
    SingularJacobian,
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData {
                available,
                required,
            } => write!(
                f,
                "not enough data to fit a Gaussian ({available} points, need {required})"
            ),
            Self::DegenerateRange => write!(f, "histogram range is degenerate or not finite"),
            Self::NonConvergence => write!(f, "nonlinear least-squares fit did not converge"),
            Self::SingularJacobian => {
                write!(f, "Jacobian is singular, parameter covariance undefined")
            }
        }
    }
}

impl std::error::Error for FitError {}

/// Exact confidence bounds for a binomial proportion.
///
/// All three fields lie in [0, 1] and satisfy `lower <= estimate <= upper`.
/// At the boundary `estimate == 1` the three values collapse to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Point estimate `k / n`.
    pub estimate: f64,
    /// Upper confidence bound.
    pub upper: f64,
    /// Lower confidence bound.
    pub lower: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_fit_is_all_zero() {
        let fit = GaussianFit::degenerate();
        assert_eq!(fit.mean, 0.0);
        assert_eq!(fit.std, 0.0);
        assert_eq!(fit.covariance, Matrix2::zeros());
        assert_eq!(fit.method, FitMethod::Degenerate);
        assert_eq!(fit.std_err_of_std(), 0.0);
        assert_eq!(fit.std_err_of_mean(), 0.0);
    }

    #[test]
    fn test_std_err_reads_diagonal() {
        let fit = GaussianFit {
            mean: 1.0,
            std: 2.0,
            covariance: Matrix2::new(4.0, 0.1, 0.1, 9.0),
            method: FitMethod::Binned,
        };
        assert!((fit.std_err_of_mean() - 2.0).abs() < 1e-12);
        assert!((fit.std_err_of_std() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_error_display() {
        let err = FitError::InsufficientData {
            available: 4,
            required: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 points"), "message was: {msg}");
        assert!(msg.contains("need 10"), "message was: {msg}");
    }
}
