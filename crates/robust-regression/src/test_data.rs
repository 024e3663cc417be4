//! Synthetic samples with a known ground-truth line
//!
//! Every generator is deterministic for a given seed, so tests and benches
//! can rely on the exact sample they get.

use crate::types::LineFit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal, Uniform};
use robust_core::{Error, Result};

/// Noise standard deviation around the true line
pub const LINE_NOISE: f64 = 0.2;

/// Ground truth of [`simple_line`] and the clean part of [`rousseeuw`]
pub const SIMPLE_LINE: LineFit = LineFit {
    intercept: 2.0,
    slope: 1.0,
};

fn gaussian(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

/// 30 points on `y = x + 2` with `x ~ U(1, 4)` and `N(0, 0.2)` noise in y
pub fn simple_line(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    push_line(&mut rng, 30)
}

fn push_line(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let uniform = Uniform::new(1.0, 4.0);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let xi = uniform.sample(rng);
        x.push(xi);
        y.push(SIMPLE_LINE.predict(xi) + gaussian(rng, 0.0, LINE_NOISE));
    }
    (x, y)
}

/// Rousseeuw's leverage example
///
/// [`simple_line`] followed by a cluster of 20 points with
/// `x ~ N(7, 0.5)`, `y ~ N(2, 0.5)`. The cluster sits far to the right of the
/// clean data and drags least squares to a negative slope.
pub fn rousseeuw(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut x, mut y) = push_line(&mut rng, 30);
    for _ in 0..20 {
        x.push(gaussian(&mut rng, 7.0, 0.5));
        y.push(gaussian(&mut rng, 2.0, 0.5));
    }
    (x, y)
}

/// `n` noise-free points on `y = a + b·x` at `x = 0, 1, .., n − 1`
pub fn collinear(a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let line = LineFit::new(a, b);
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.iter().map(|&xi| line.predict(xi)).collect();
    (x, y)
}

/// Two populations on different lines
///
/// `x ~ U(0, 10)` and y carries `N(0, 0.1)` noise. The first
/// `n − round(fraction·n)` points follow `l1`, the rest follow `l2`.
pub fn contaminated(
    l1: LineFit,
    l2: LineFit,
    n: usize,
    fraction: f64,
    seed: u64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::InvalidParameter(format!(
            "contamination fraction must be in [0, 1], got {fraction}"
        )));
    }

    let outliers = (fraction * n as f64).round() as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform = Uniform::new(0.0, 10.0);

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let line = if i < n - outliers { l1 } else { l2 };
        let xi = uniform.sample(&mut rng);
        x.push(xi);
        y.push(line.predict(xi) + gaussian(&mut rng, 0.0, 0.1));
    }
    Ok((x, y))
}
