//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

pub const EPSILON: f64 = 1e-9;

/// Deterministic version of Rousseeuw's leverage example
///
/// 30 points close to `y = x + 2` on `x ∈ [1, 4]`, then 20 points clustered
/// around `(7, 2)`. Least squares comes out with slope ≈ −0.41.
pub fn leverage_cluster() -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(50);
    let mut y = Vec::with_capacity(50);
    for i in 0..30 {
        let xi = 1.0 + 3.0 * i as f64 / 29.0;
        x.push(xi);
        y.push(xi + 2.0 + 0.2 * (1.7 * i as f64 + 0.3).sin());
    }
    for i in 0..20 {
        x.push(7.0 + 0.5 * (2.3 * i as f64).cos());
        y.push(2.0 + 0.5 * (1.3 * i as f64 + 0.5).sin());
    }
    (x, y)
}

/// `x = 0, 1, .., n − 1` on `y = 1 + 0.5·x`, except that every index with
/// `i % 5 ∈ {1, 3}` lies on `y = 10 − 0.3·x` instead (40% contamination)
pub fn two_lines(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            if matches!(i % 5, 1 | 3) {
                10.0 - 0.3 * xi
            } else {
                1.0 + 0.5 * xi
            }
        })
        .collect();
    (x, y)
}

/// Sample sizes used by the crude/fast agreement checks
pub fn odd_sizes() -> Vec<usize> {
    vec![5, 7, 9, 11, 15, 21]
}

/// Even sample sizes, where the LMS intercept is not unique
pub fn even_sizes() -> Vec<usize> {
    vec![6, 8, 10, 12, 16, 20]
}
