//! Moment and order statistics over raw samples.
//!
//! `std` is the population standard deviation (divides by n, not n - 1),
//! matching the seeding convention of the binned fit. `median` uses O(n)
//! selection rather than a full sort.

/// Arithmetic mean of a sample.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation of a sample (divides by n).
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn std(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute std of empty slice");
    let m = mean(data);
    let ss = data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    (ss / data.len() as f64).sqrt()
}

/// Median of a sample, averaging the two central elements for even sizes.
///
/// Uses `select_nth_unstable_by` for O(n) expected time; the input slice is
/// copied, so the caller's ordering is preserved.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute median of empty slice");

    let n = data.len();
    let mut working = data.to_vec();

    if n % 2 == 1 {
        let (_, &mut mid, _) = working.select_nth_unstable_by(n / 2, |a, b| a.total_cmp(b));
        mid
    } else {
        // Select the upper central element; everything left of it is <= it,
        // so the lower central element is the max of the left partition.
        let (left, &mut hi, _) = working.select_nth_unstable_by(n / 2, |a, b| a.total_cmp(b));
        let lo = left
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (lo + hi) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_simple() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert!((mean(&data) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_std_is_population() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std(&data) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_of_constant_data_is_zero() {
        // 3.7 is not exactly representable, so the mean carries rounding
        // noise; the spread must still vanish to within machine precision.
        let data = vec![3.7; 50];
        assert!(std(&data) < 1e-12, "std was {}", std(&data));
    }

    #[test]
    fn test_median_odd() {
        let data = vec![9.0, 1.0, 5.0, 3.0, 7.0];
        assert!((median(&data) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_averages_center() {
        let data = vec![4.0, 1.0, 3.0, 2.0];
        assert!((median(&data) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_median_with_ties() {
        let data = vec![1.0, 2.0, 2.0, 2.0, 8.0];
        assert!((median(&data) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_preserves_input_order() {
        let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let copy = data.clone();
        let _ = median(&data);
        assert_eq!(data, copy);
    }

    #[test]
    #[should_panic(expected = "Cannot compute median of empty slice")]
    fn test_median_empty_panics() {
        median(&[]);
    }
}
