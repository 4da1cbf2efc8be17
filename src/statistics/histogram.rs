//! Density-normalized histograms over a fixed range.

use crate::types::FitError;

/// A fixed-range histogram with density normalization.
///
/// Bin heights are `count / (total * width)` where `total` is the number of
/// in-range points, so the heights integrate to 1 over the range and are
/// directly comparable to a probability density. Points outside the range
/// are dropped; the right edge of the last bin is inclusive so the range
/// maximum is not lost to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHistogram {
    centers: Vec<f64>,
    densities: Vec<f64>,
    width: f64,
}

impl DensityHistogram {
    /// Histogram `data` over `[range.0, range.1]` with `bins` equal-width bins.
    ///
    /// Returns [`FitError::DegenerateRange`] if the range is not finite, has
    /// non-positive width, or contains no points at all.
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn new(data: &[f64], range: (f64, f64), bins: usize) -> Result<Self, FitError> {
        assert!(bins > 0, "Histogram needs at least one bin");

        let (lo, hi) = range;
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            return Err(FitError::DegenerateRange);
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        let mut total = 0usize;

        for &x in data {
            if !(lo..=hi).contains(&x) {
                continue;
            }
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
            total += 1;
        }

        if total == 0 {
            return Err(FitError::DegenerateRange);
        }

        let norm = total as f64 * width;
        let densities = counts.iter().map(|&c| c as f64 / norm).collect();
        let centers = (0..bins)
            .map(|i| lo + (i as f64 + 0.5) * width)
            .collect();

        Ok(Self {
            centers,
            densities,
            width,
        })
    }

    /// Bin centers, in ascending order.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Density value of each bin.
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Width of each bin.
    pub fn width(&self) -> f64 {
        self.width
    }
}
