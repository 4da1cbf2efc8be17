//! Exact Clopper-Pearson confidence bounds for binomial proportions.
//!
//! Clopper-Pearson intervals invert the Beta distribution's CDF and are the
//! conservative (guaranteed-coverage) choice for small trial counts, where
//! normal-approximation intervals undercover. The default significance
//! level of 0.32 gives roughly 1-sigma coverage in the Gaussian analogy,
//! which is the convention for efficiency error bars.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};

use crate::analysis::binning::BinStatistic;
use crate::types::ConfidenceInterval;

/// Default two-sided significance level: approximately 1-sigma coverage.
pub const DEFAULT_ALPHA: f64 = 0.32;

/// Exact Clopper-Pearson interval for `k` successes in `n` trials.
///
/// The bounds are Beta quantiles:
///
/// - upper: the `1 - alpha/2` quantile of `Beta(k + 1, n - k)`
/// - lower: the `alpha/2` quantile of `Beta(k, n - k + 1)`
///
/// Two boundaries need special handling. At `k == n` the upper-bound Beta
/// shape degenerates, and the interval collapses to `(1, 1, 1)` exactly. At
/// `k == 0` the lower-bound Beta shape degenerates and the lower bound is 0
/// by convention.
///
/// # Example
///
/// ```
/// use binfit::clopper_pearson;
///
/// let ci = clopper_pearson(7, 10, 0.32);
/// assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
/// ```
///
/// # Panics
///
/// Panics if `n == 0`, `k > n`, or `alpha` is outside (0, 1). Callers own
/// these preconditions; there is no fallback tier here.
pub fn clopper_pearson(k: u64, n: u64, alpha: f64) -> ConfidenceInterval {
    assert!(n > 0, "clopper_pearson requires at least one trial");
    assert!(k <= n, "successes cannot exceed trials (k={k}, n={n})");
    assert!(
        alpha > 0.0 && alpha < 1.0,
        "significance level must be in (0, 1)"
    );

    let estimate = k as f64 / n as f64;
    if estimate == 1.0 {
        return ConfidenceInterval {
            estimate: 1.0,
            upper: 1.0,
            lower: 1.0,
        };
    }

    let (k, n) = (k as f64, n as f64);

    // k < n here, so both shape parameters are positive.
    let upper = Beta::new(k + 1.0, n - k)
        .expect("upper-bound Beta shapes are positive for k < n")
        .inverse_cdf(1.0 - alpha / 2.0)
        .max(0.0);

    let lower = if k == 0.0 {
        0.0
    } else {
        Beta::new(k, n - k + 1.0)
            .expect("lower-bound Beta shapes are positive for k > 0")
            .inverse_cdf(alpha / 2.0)
            .min(1.0)
    };

    ConfidenceInterval {
        estimate,
        upper,
        lower,
    }
}

/// Successes and trials of a 0/1-valued sample.
fn successes_and_trials(values: &[f64]) -> (u64, u64) {
    let k = values.iter().sum::<f64>().round() as u64;
    (k, values.len() as u64)
}

/// Per-bin statistic: Clopper-Pearson *upper* bound of a 0/1-valued sample.
///
/// Holds the configured significance level so a generic binning routine can
/// treat "upper bound of the efficiency in this bin" like any other
/// reducible statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClopperPearsonUpper {
    /// Two-sided significance level.
    pub alpha: f64,
}

/// Per-bin statistic: Clopper-Pearson *lower* bound of a 0/1-valued sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClopperPearsonLower {
    /// Two-sided significance level.
    pub alpha: f64,
}

impl ClopperPearsonUpper {
    /// Upper-bound statistic at the given significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside (0, 1).
    pub fn new(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "significance level must be in (0, 1)"
        );
        Self { alpha }
    }
}

impl ClopperPearsonLower {
    /// Lower-bound statistic at the given significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside (0, 1).
    pub fn new(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "significance level must be in (0, 1)"
        );
        Self { alpha }
    }
}

impl Default for ClopperPearsonUpper {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Default for ClopperPearsonLower {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl BinStatistic for ClopperPearsonUpper {
    fn evaluate(&self, values: &[f64]) -> f64 {
        let (k, n) = successes_and_trials(values);
        clopper_pearson(k, n, self.alpha).upper
    }
}

impl BinStatistic for ClopperPearsonLower {
    fn evaluate(&self, values: &[f64]) -> f64 {
        let (k, n) = successes_and_trials(values);
        clopper_pearson(k, n, self.alpha).lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_success_collapses_to_one() {
        let ci = clopper_pearson(10, 10, DEFAULT_ALPHA);
        assert_eq!(ci.estimate, 1.0);
        assert_eq!(ci.upper, 1.0);
        assert_eq!(ci.lower, 1.0);
    }

    #[test]
    fn test_zero_successes_lower_bound_is_zero() {
        let ci = clopper_pearson(0, 10, DEFAULT_ALPHA);
        assert_eq!(ci.estimate, 0.0);
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper > 0.0 && ci.upper < 1.0);
    }

    #[test]
    fn test_bounds_are_complementary() {
        // Beta(a, b) quantile symmetry implies lower(k) = 1 - upper(n - k).
        let n = 20;
        for k in 1..n {
            let ci = clopper_pearson(k, n, DEFAULT_ALPHA);
            let mirrored = clopper_pearson(n - k, n, DEFAULT_ALPHA);
            assert!(
                (ci.lower - (1.0 - mirrored.upper)).abs() < 1e-7,
                "asymmetry at k={k}: lower={} mirrored upper={}",
                ci.lower,
                mirrored.upper
            );
        }
    }

    #[test]
    fn test_adapters_hold_alpha() {
        let upper = ClopperPearsonUpper::new(0.05);
        let lower = ClopperPearsonLower::new(0.05);
        assert_eq!(upper.alpha, 0.05);
        assert_eq!(lower.alpha, 0.05);
        assert_eq!(ClopperPearsonUpper::default().alpha, DEFAULT_ALPHA);
        assert_eq!(ClopperPearsonLower::default().alpha, DEFAULT_ALPHA);
    }

    #[test]
    fn test_adapters_reduce_indicator_samples() {
        let values = vec![1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0];
        let direct = clopper_pearson(7, 10, DEFAULT_ALPHA);
        let upper = ClopperPearsonUpper::default().evaluate(&values);
        let lower = ClopperPearsonLower::default().evaluate(&values);
        assert_eq!(upper, direct.upper);
        assert_eq!(lower, direct.lower);
    }

    #[test]
    #[should_panic(expected = "at least one trial")]
    fn test_zero_trials_panics() {
        clopper_pearson(0, 0, DEFAULT_ALPHA);
    }

    #[test]
    #[should_panic(expected = "successes cannot exceed trials")]
    fn test_excess_successes_panics() {
        clopper_pearson(11, 10, DEFAULT_ALPHA);
    }

    #[test]
    fn test_alpha_survives_serialization() {
        let stat = ClopperPearsonUpper::new(0.1);
        let json = serde_json::to_string(&stat).unwrap();
        let back: ClopperPearsonUpper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stat);
    }
}
