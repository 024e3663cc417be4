//! Order statistics and summary helpers for working with data slices
//!
//! The selection helpers reorder their input in place (`select_nth_unstable`),
//! so callers pass a scratch buffer rather than the sample itself.

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// The `k`-th smallest value (0-based), or `None` when `k` is out of range
///
/// Runs in expected linear time. The slice is left partially reordered.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::kth_smallest;
///
/// let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(kth_smallest(&mut data, 1), Some(2.0));
/// assert_eq!(kth_smallest(&mut data, 5), None);
/// ```
pub fn kth_smallest(data: &mut [f64], k: usize) -> Option<f64> {
    if k >= data.len() {
        return None;
    }
    let (_, value, _) = data.select_nth_unstable_by(k, f64::total_cmp);
    Some(*value)
}

/// The `k`-th largest value (0-based), or `None` when `k` is out of range
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::kth_largest;
///
/// let mut data = vec![-5.0, -1.0, -4.0, 0.0];
/// assert_eq!(kth_largest(&mut data, 0), Some(0.0));
/// assert_eq!(kth_largest(&mut data, 2), Some(-4.0));
/// ```
pub fn kth_largest(data: &mut [f64], k: usize) -> Option<f64> {
    if k >= data.len() {
        return None;
    }
    let idx = data.len() - 1 - k;
    kth_smallest(data, idx)
}

/// Median of a slice, averaging the two middle values for even lengths
///
/// Returns NaN for an empty slice. The slice is left partially reordered.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::median_in_place;
///
/// assert_eq!(median_in_place(&mut [3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median_in_place(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median_in_place(data: &mut [f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return f64::NAN;
    }
    let mid = n / 2;
    let (lower, upper, _) = data.select_nth_unstable_by(mid, f64::total_cmp);
    let upper = *upper;
    if n % 2 == 1 {
        return upper;
    }
    // The lower middle is the largest element left of the pivot
    let lower = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lower + upper) / 2.0
}
