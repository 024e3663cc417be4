//! Ordinary least squares straight-line fit
//!
//! Minimizes `Σ (α + β·x[i] − y[i])²`. The minimizer is unique whenever the
//! x-values are not all identical. Two solvers are provided and agree to
//! rounding error:
//!
//! - [`OlsSolver::ClosedForm`]: centred sums, `β = Sxy / Sxx`, `α = ȳ − β·x̄`
//! - [`OlsSolver::NormalEquations`]: `XᵀX c = Xᵀy` on the `n × 2` design
//!   matrix, Cholesky with an SVD fallback

use crate::traits::{LineFitter, LineFitterProperties};
use crate::types::LineFit;
use crate::validation::{all_equal, validate_sample};
use nalgebra::{DMatrix, DVector};
use robust_core::utils::mean;
use robust_core::{Error, Result};
use tracing::{debug, instrument};

/// Solver used by [`LeastSquares`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OlsSolver {
    /// Closed-form solution from centred sums
    #[default]
    ClosedForm,
    /// Normal equations solved with nalgebra
    NormalEquations,
}

/// Ordinary least squares estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeastSquares {
    solver: OlsSolver,
}

impl LeastSquares {
    /// Create an estimator using the closed-form solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the solver
    pub fn with_solver(mut self, solver: OlsSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn solver(&self) -> OlsSolver {
        self.solver
    }

    fn closed_form(x: &[f64], y: &[f64]) -> Result<LineFit> {
        let x_mean = mean(x);
        let y_mean = mean(y);

        let (sxx, sxy) = x.iter().zip(y).fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });

        if sxx == 0.0 {
            return Err(Error::degenerate("least squares"));
        }

        let slope = sxy / sxx;
        Ok(LineFit::new(y_mean - slope * x_mean, slope))
    }

    fn normal_equations(x: &[f64], y: &[f64]) -> Result<LineFit> {
        let n = x.len();
        let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
        let rhs = DVector::from_column_slice(y);

        let xtx = design.transpose() * &design;
        let xty = design.transpose() * rhs;

        let coeffs = match xtx.clone().cholesky() {
            Some(chol) => chol.solve(&xty),
            None => {
                // Fallback to SVD for ill-conditioned systems
                let svd = xtx.svd(true, true);
                svd.solve(&xty, 1e-12).map_err(|e| {
                    Error::Computation(format!("Failed to solve normal equations: {e}"))
                })?
            }
        };

        if !coeffs.iter().all(|c| c.is_finite()) {
            return Err(Error::Computation(
                "Normal equations produced a non-finite solution".to_string(),
            ));
        }

        Ok(LineFit::new(coeffs[0], coeffs[1]))
    }
}

impl LineFitterProperties for LeastSquares {
    fn name(&self) -> &str {
        "Least Squares"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl LineFitter for LeastSquares {
    #[instrument(skip_all, fields(n = x.len(), solver = ?self.solver))]
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LineFit> {
        validate_sample(x, y, self.minimum_sample_size())?;
        if all_equal(x) {
            return Err(Error::degenerate("least squares"));
        }

        let line = match self.solver {
            OlsSolver::ClosedForm => Self::closed_form(x, y)?,
            OlsSolver::NormalEquations => Self::normal_equations(x, y)?,
        };

        debug!(intercept = line.intercept, slope = line.slope, "least squares fit");
        Ok(line)
    }
}
