//! Input checks shared by all estimators
//!
//! Order: shape, sample size, finiteness. Degeneracy is left to each
//! estimator since what counts as degenerate differs between them.

use robust_core::{Error, Result};

/// Validate a paired sample and return its size
pub fn validate_sample(x: &[f64], y: &[f64], minimum: usize) -> Result<usize> {
    if x.len() != y.len() {
        return Err(Error::shape_mismatch(x.len(), y.len()));
    }
    let n = x.len();
    if n < minimum {
        return Err(Error::InsufficientData {
            expected: minimum,
            actual: n,
        });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("x"));
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("y"));
    }
    Ok(n)
}

/// Whether every x-value equals the first one
pub fn all_equal(x: &[f64]) -> bool {
    match x.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}
