//! Numeric primitives for the estimators.
//!
//! This module provides the building blocks of the robust fit:
//! - Moment and order statistics (mean, population std, median)
//! - Density-normalized fixed-range histograms
//! - Nonlinear least-squares fitting of a Gaussian density curve

mod gaussian;
mod histogram;
mod moments;

pub use gaussian::{fit_gaussian_pdf, gaussian_pdf};
pub use histogram::DensityHistogram;
pub use moments::{mean, median, std};
