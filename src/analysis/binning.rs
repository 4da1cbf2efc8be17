//! Grouping dependent values into fixed-width bins of an independent
//! variable and applying a statistic per bin.
//!
//! This is the seam between the estimators and their callers: anything
//! implementing [`BinStatistic`] can be dropped into [`binned_statistic`],
//! so "robust spread of the residuals in this bin" composes the same way
//! as "upper confidence bound of the efficiency in this bin".

/// A statistic reducible over one bin's values.
pub trait BinStatistic {
    /// Reduce a bin's values to a single number.
    fn evaluate(&self, values: &[f64]) -> f64;
}

/// Per-bin results of [`binned_statistic`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedStatistic {
    /// One statistic value per bin; `NaN` for bins that received no points.
    pub values: Vec<f64>,
    /// The `bins + 1` bin edges, ascending.
    pub edges: Vec<f64>,
}

impl BinnedStatistic {
    /// Midpoint of each bin, for plotting against the values.
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1]))
            .collect()
    }
}

/// Group `y` by which fixed-width bin of `range` its `x` falls in, then
/// apply `statistic` to each bin's values.
///
/// Points with `x` outside the range are ignored; the right edge of the
/// last bin is inclusive. Empty bins yield `NaN` without invoking the
/// statistic, so statistics with an `n > 0` precondition (the binomial
/// bounds) stay safe.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length, `bins` is zero, or the range is
/// not finite with positive width.
pub fn binned_statistic<S>(
    x: &[f64],
    y: &[f64],
    bins: usize,
    range: (f64, f64),
    statistic: &S,
) -> BinnedStatistic
where
    S: BinStatistic + ?Sized,
{
    assert_eq!(x.len(), y.len(), "x and y must pair up");
    assert!(bins > 0, "binned_statistic needs at least one bin");
    let (lo, hi) = range;
    assert!(
        lo.is_finite() && hi.is_finite() && hi > lo,
        "bin range must be finite with positive width"
    );

    let width = (hi - lo) / bins as f64;
    let mut groups: Vec<Vec<f64>> = vec![Vec::new(); bins];

    for (&xi, &yi) in x.iter().zip(y) {
        if !(lo..=hi).contains(&xi) {
            continue;
        }
        let idx = (((xi - lo) / width) as usize).min(bins - 1);
        groups[idx].push(yi);
    }

    let values = groups
        .iter()
        .map(|group| {
            if group.is_empty() {
                f64::NAN
            } else {
                statistic.evaluate(group)
            }
        })
        .collect();

    let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();

    BinnedStatistic { values, edges }
}
