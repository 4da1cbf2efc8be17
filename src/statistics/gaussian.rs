//! Nonlinear least-squares fitting of a Gaussian density curve.
//!
//! Fits the two-parameter Gaussian PDF to (bin-center, density) pairs via
//! Levenberg-Marquardt with an analytic Jacobian, and reports the parameter
//! covariance `(J^T J)^-1 * s^2` with `s^2 = RSS / (m - 2)`, the standard
//! nonlinear-regression convention.

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use nalgebra::storage::Owned;
use nalgebra::{DVector, Dyn, OMatrix, U2};

use crate::types::{FitError, Matrix2, Vector2};

/// Gaussian probability density at `x` for the given `mean` and `std`.
pub fn gaussian_pdf(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * std::f64::consts::PI).sqrt())
}

/// Least-squares problem: Gaussian PDF vs. observed (center, density) pairs.
///
/// Parameters are ordered (mean, std). Evaluation is rejected (returns
/// `None`) whenever std is non-positive or either parameter is non-finite,
/// which keeps the solver on the physical branch of the model.
struct GaussianPdfProblem {
    xs: DVector<f64>,
    ys: DVector<f64>,
    params: Vector2,
}

impl GaussianPdfProblem {
    fn valid_params(&self) -> Option<(f64, f64)> {
        let (m, s) = (self.params[0], self.params[1]);
        if m.is_finite() && s.is_finite() && s > 0.0 {
            Some((m, s))
        } else {
            None
        }
    }
}

impl LeastSquaresProblem<f64, Dyn, U2> for GaussianPdfProblem {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, U2>;
    type ParameterStorage = Owned<f64, U2>;

    fn set_params(&mut self, params: &Vector2) {
        self.params = *params;
    }

    fn params(&self) -> Vector2 {
        self.params
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let (m, s) = self.valid_params()?;
        Some(DVector::from_fn(self.xs.len(), |i, _| {
            gaussian_pdf(self.xs[i], m, s) - self.ys[i]
        }))
    }

    fn jacobian(&self) -> Option<OMatrix<f64, Dyn, U2>> {
        let (m, s) = self.valid_params()?;
        Some(OMatrix::<f64, Dyn, U2>::from_fn(self.xs.len(), |i, j| {
            let d = self.xs[i] - m;
            let g = gaussian_pdf(self.xs[i], m, s);
            if j == 0 {
                // d(pdf)/d(mean)
                g * d / (s * s)
            } else {
                // d(pdf)/d(std)
                g * (d * d / (s * s * s) - 1.0 / s)
            }
        }))
    }
}

/// Fit a Gaussian PDF to (center, density) pairs.
///
/// `seed_mean` and `seed_std` start the solver; seeding with the raw sample
/// moments keeps the search near the bulk population. Returns the fitted
/// (mean, std) and their 2x2 covariance.
///
/// # Errors
///
/// [`FitError::NonConvergence`] if the solver fails to reach a minimum, and
/// [`FitError::SingularJacobian`] if no covariance exists at the solution
/// (singular normal equations or too few points for the residual variance).
///
/// # Panics
///
/// Panics if `centers` and `densities` differ in length.
pub fn fit_gaussian_pdf(
    centers: &[f64],
    densities: &[f64],
    seed_mean: f64,
    seed_std: f64,
) -> Result<(Vector2, Matrix2), FitError> {
    assert_eq!(
        centers.len(),
        densities.len(),
        "centers and densities must pair up"
    );

    let problem = GaussianPdfProblem {
        xs: DVector::from_column_slice(centers),
        ys: DVector::from_column_slice(densities),
        params: Vector2::new(seed_mean, seed_std),
    };

    let (problem, report) = LevenbergMarquardt::new().minimize(problem);
    if !report.termination.was_successful() {
        return Err(FitError::NonConvergence);
    }

    let params = problem.params();
    let residuals = problem.residuals().ok_or(FitError::NonConvergence)?;
    let jacobian = problem.jacobian().ok_or(FitError::SingularJacobian)?;

    let points = residuals.len();
    if points <= 2 {
        return Err(FitError::SingularJacobian);
    }

    let jtj: Matrix2 = jacobian.transpose() * &jacobian;
    let inverse = jtj.try_inverse().ok_or(FitError::SingularJacobian)?;
    let residual_variance = residuals.norm_squared() / (points - 2) as f64;
    let covariance = inverse * residual_variance;

    Ok((params, covariance))
}
