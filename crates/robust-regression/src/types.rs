//! Types for fitted lines and fit results

use robust_core::utils::median_in_place;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A straight line `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    /// Intercept (α)
    pub intercept: f64,
    /// Slope (β)
    pub slope: f64,
}

impl LineFit {
    /// Create a line from its intercept and slope
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// The line value at `x`
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residual `y - (α + β·x)` of a single observation
    #[inline]
    pub fn residual(&self, x: f64, y: f64) -> f64 {
        y - self.predict(x)
    }

    /// Residuals of every observation, paired by index
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(y)
            .map(|(&xi, &yi)| self.residual(xi, yi))
            .collect()
    }

    /// Median absolute residual over the sample (the LMS objective)
    ///
    /// Returns NaN for an empty sample.
    pub fn median_abs_residual(&self, x: &[f64], y: &[f64]) -> f64 {
        let mut abs: Vec<f64> = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| self.residual(xi, yi).abs())
            .collect();
        median_in_place(&mut abs)
    }

    /// The pair `(α, β)`
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.intercept, self.slope)
    }
}

impl From<(f64, f64)> for LineFit {
    fn from((intercept, slope): (f64, f64)) -> Self {
        Self::new(intercept, slope)
    }
}

impl fmt::Display for LineFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.6} + {:.6}·x", self.intercept, self.slope)
    }
}

/// A robust fit together with its objective value and search statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredFit {
    /// The winning line
    pub line: LineFit,
    /// Objective value of the winning candidate (lower is better)
    pub score: f64,
    /// Number of candidate lines that were scored
    pub evaluated: usize,
    /// Number of subsets skipped because their x-values coincide
    pub skipped: usize,
}

/// The estimators available in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitMethod {
    /// Ordinary least squares
    LeastSquares,
    /// Least median of squares, exhaustive triple search
    LmsCrude,
    /// Least median of squares, pairwise order-statistic search
    LmsFast,
}

impl FitMethod {
    /// Get the name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeastSquares => "Least Squares",
            Self::LmsCrude => "Least Median of Squares (crude)",
            Self::LmsFast => "Least Median of Squares",
        }
    }

    /// Whether the method resists outlying observations
    pub fn is_robust(&self) -> bool {
        !matches!(self, Self::LeastSquares)
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
