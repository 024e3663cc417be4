//! Straight-line regression with ordinary and robust estimators
//!
//! Fits `y = α + β·x` to paired observations with one of three estimators:
//!
//! - [`LeastSquares`]: ordinary least squares, minimizes the sum of squared
//!   residuals. Optimal under Gaussian noise, but a single outlier can move
//!   it arbitrarily far.
//! - [`CrudeLms`]: least median of squares by exhaustive search over triples
//!   of observations. `O(n⁴)`, meant for small samples and cross-checking.
//! - [`FastLms`]: least median of squares by pairwise order statistics.
//!   `O(n²)` pairs, each scored with a linear-time selection.
//!
//! Both LMS estimators tolerate contamination of up to half the sample.
//!
//! # Examples
//!
//! ```rust
//! use robust_regression::{FastLms, LeastSquares, LineFitter};
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = [1.0, 3.0, 5.0, 7.0, 50.0, 11.0, 13.0];
//!
//! let lms = FastLms::new().fit(&x, &y).unwrap();
//! assert_eq!(lms.as_tuple(), (1.0, 2.0));
//!
//! let ols = LeastSquares::new().fit(&x, &y).unwrap();
//! assert!(ols.slope > 2.5);
//! ```
//!
//! ## Parallel search
//!
//! With the `parallel` feature the LMS searches accept a Rayon-backed engine.
//! Results are bit-identical to the sequential engine.
//!
//! ```rust,ignore
//! use robust_core::execution::parallel;
//! use robust_regression::CrudeLms;
//!
//! let fit = CrudeLms::with_engine(parallel()).fit_scored(&x, &y)?;
//! ```

mod candidate;
mod crude;
mod fast;
mod ols;
mod traits;
mod types;
mod validation;

#[cfg(feature = "test-utils")]
pub mod test_data;

pub use candidate::{BestCandidate, Candidate};
pub use crude::CrudeLms;
pub use fast::{FastLms, FastLmsParameters, UndefinedSlopePolicy};
pub use ols::{LeastSquares, OlsSolver};
pub use traits::{LineFitter, LineFitterProperties};
pub use types::{FitMethod, LineFit, ScoredFit};
pub use validation::validate_sample;

use robust_core::Result;

// Convenience constructors
pub fn least_squares() -> LeastSquares {
    LeastSquares::new()
}

pub fn lms_crude() -> CrudeLms {
    CrudeLms::new()
}

pub fn lms_fast() -> FastLms {
    FastLms::new()
}

/// Fit with the chosen method and default settings
pub fn fit(method: FitMethod, x: &[f64], y: &[f64]) -> Result<LineFit> {
    match method {
        FitMethod::LeastSquares => least_squares().fit(x, y),
        FitMethod::LmsCrude => lms_crude().fit(x, y),
        FitMethod::LmsFast => lms_fast().fit(x, y),
    }
}
