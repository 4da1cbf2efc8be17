//! Configuration for the robust Gaussian estimator.

use serde::{Deserialize, Serialize};

/// Tunables for [`robust_gaussian_fit`](crate::analysis::robust::robust_gaussian_fit).
///
/// The defaults reproduce the standard refitting scheme used for tracking
/// residuals: three trim/refit passes, a 3-sigma outlier cut, and a density
/// histogram spanning 10 sigma on each side of the seed mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// Number of trim/refit passes for both the binned fit and the naive
    /// fallback. Default: 3.
    pub passes: usize,

    /// Outlier cut in units of the current std estimate. Points farther than
    /// `trim_width * std` from the current center are dropped between passes.
    /// Default: 3.0.
    pub trim_width: f64,

    /// Minimum working-sample size required by the binned fit. Below this
    /// the fit reports insufficient data and the estimator falls back to the
    /// naive tier. Default: 10.
    pub min_points: usize,

    /// Histogram half-range in units of the seed std. The histogram spans
    /// `seed_mean +/- range_width * seed_std`. Default: 10.0.
    pub range_width: f64,

    /// Floor on the histogram bin count; the actual count is
    /// `max(min_bins, floor(sqrt(n)))` for a working sample of size n.
    /// Default: 10.
    pub min_bins: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            passes: 3,
            trim_width: 3.0,
            min_points: 10,
            range_width: 10.0,
            min_bins: 10,
        }
    }
}

impl FitConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trim/refit passes.
    pub fn passes(mut self, passes: usize) -> Self {
        assert!(passes > 0, "passes must be positive");
        self.passes = passes;
        self
    }

    /// Set the outlier cut width in sigma.
    pub fn trim_width(mut self, width: f64) -> Self {
        assert!(
            width.is_finite() && width > 0.0,
            "trim_width must be positive and finite"
        );
        self.trim_width = width;
        self
    }

    /// Set the minimum working-sample size for the binned fit.
    pub fn min_points(mut self, points: usize) -> Self {
        assert!(points > 2, "min_points must exceed the parameter count");
        self.min_points = points;
        self
    }

    /// Set the histogram half-range in sigma.
    pub fn range_width(mut self, width: f64) -> Self {
        assert!(
            width.is_finite() && width > 0.0,
            "range_width must be positive and finite"
        );
        self.range_width = width;
        self
    }

    /// Set the histogram bin-count floor.
    pub fn min_bins(mut self, bins: usize) -> Self {
        assert!(bins > 2, "min_bins must exceed the parameter count");
        self.min_bins = bins;
        self
    }

    /// Histogram bin count for a working sample of size `n`.
    pub fn bin_count(&self, n: usize) -> usize {
        self.min_bins.max((n as f64).sqrt().floor() as usize)
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), String> {
        if self.passes == 0 {
            return Err("passes must be positive".to_string());
        }
        if !self.trim_width.is_finite() || self.trim_width <= 0.0 {
            return Err("trim_width must be positive and finite".to_string());
        }
        if self.min_points <= 2 {
            return Err("min_points must exceed the parameter count".to_string());
        }
        if !self.range_width.is_finite() || self.range_width <= 0.0 {
            return Err("range_width must be positive and finite".to_string());
        }
        if self.min_bins <= 2 {
            return Err("min_bins must exceed the parameter count".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FitConfig::default();
        assert_eq!(config.passes, 3);
        assert_eq!(config.trim_width, 3.0);
        assert_eq!(config.min_points, 10);
        assert_eq!(config.range_width, 10.0);
        assert_eq!(config.min_bins, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = FitConfig::new()
            .passes(5)
            .trim_width(2.5)
            .min_points(20)
            .range_width(8.0)
            .min_bins(16);

        assert_eq!(config.passes, 5);
        assert_eq!(config.trim_width, 2.5);
        assert_eq!(config.min_points, 20);
        assert_eq!(config.range_width, 8.0);
        assert_eq!(config.min_bins, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bin_count_floor_and_sqrt() {
        let config = FitConfig::default();
        // Below the floor: sqrt(16) = 4 < 10.
        assert_eq!(config.bin_count(16), 10);
        // Above the floor: floor(sqrt(200)) = 14.
        assert_eq!(config.bin_count(200), 14);
        // Exactly at the boundary: sqrt(100) = 10.
        assert_eq!(config.bin_count(100), 10);
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let mut config = FitConfig::default();
        config.passes = 0;
        assert!(config.validate().is_err());

        let mut config = FitConfig::default();
        config.trim_width = -1.0;
        assert!(config.validate().is_err());

        let mut config = FitConfig::default();
        config.min_bins = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "passes must be positive")]
    fn test_zero_passes_panics() {
        FitConfig::new().passes(0);
    }

    #[test]
    #[should_panic(expected = "trim_width must be positive")]
    fn test_negative_trim_width_panics() {
        FitConfig::new().trim_width(-3.0);
    }
}
