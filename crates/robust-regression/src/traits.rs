//! Core traits for line fitting

use crate::types::LineFit;
use robust_core::Result;

/// Intrinsic properties of a line estimator that don't depend on the sample
pub trait LineFitterProperties {
    /// Get the name of this estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Smallest sample the estimator accepts
    fn minimum_sample_size(&self) -> usize;
}

/// A straight-line estimator
///
/// Implementations are pure: the same `(x, y)` always yields the same
/// [`LineFit`], bit for bit, and nothing outlives the call.
pub trait LineFitter: LineFitterProperties {
    /// Fit `y = α + β·x` to the paired observations `(x[i], y[i])`
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LineFit>;
}
