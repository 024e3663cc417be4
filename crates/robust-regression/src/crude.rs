//! Least median of squares by exhaustive triple search
//!
//! The "crude" algorithm of Steele & Steiger (1986). For every triple of
//! observations, ordered by x, the candidate line is parallel to the chord
//! through the two outer points and passes midway between that chord and the
//! middle point. Each candidate is scored by the median absolute residual
//! over the whole sample, and the lowest score wins.
//!
//! `O(n³)` candidates at `O(n)` each: only practical for small samples. See
//! [`FastLms`](crate::FastLms) for the pairwise algorithm.
//!
//! J. M. Steele and W. L. Steiger, "Algorithms and complexity for least
//! median of squares regression", Discrete Applied Mathematics 14 (1986).

use crate::candidate::BestCandidate;
use crate::traits::{LineFitter, LineFitterProperties};
use crate::types::{LineFit, ScoredFit};
use crate::validation::validate_sample;
use robust_core::utils::median_in_place;
use robust_core::{Error, ExecutionEngine, Result, SequentialEngine};
use tracing::{debug, instrument};

/// Exhaustive-search LMS estimator
#[derive(Debug, Clone, Default)]
pub struct CrudeLms<E: ExecutionEngine = SequentialEngine> {
    engine: E,
}

impl CrudeLms<SequentialEngine> {
    /// Create a sequential estimator
    pub fn new() -> Self {
        Self::with_engine(SequentialEngine::new())
    }
}

impl<E: ExecutionEngine> CrudeLms<E> {
    /// Create an estimator that enumerates triples on the given engine
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Engine that runs the triple enumeration
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Fit and report the winning median absolute residual
    #[instrument(skip_all, fields(n = x.len()))]
    pub fn fit_scored(&self, x: &[f64], y: &[f64]) -> Result<ScoredFit> {
        let n = validate_sample(x, y, self.minimum_sample_size())?;

        let partials = self
            .engine
            .execute_batch(n, |first| search_from(x, y, first));
        let best = partials
            .into_iter()
            .fold(BestCandidate::new(), BestCandidate::merge);

        if best.evaluated() == 0 {
            return Err(Error::degenerate("least median of squares"));
        }

        let fit = best.into_scored().ok_or_else(|| {
            Error::Computation("no candidate line had a finite median residual".to_string())
        })?;

        debug!(
            intercept = fit.line.intercept,
            slope = fit.line.slope,
            score = fit.score,
            evaluated = fit.evaluated,
            skipped = fit.skipped,
            "crude LMS fit"
        );
        Ok(fit)
    }
}

/// Candidate line for a triple whose x-values are ordered `i ≤ j ≤ k`
#[inline]
fn triple_candidate(x: &[f64], y: &[f64], i: usize, j: usize, k: usize) -> LineFit {
    let slope = (y[i] - y[k]) / (x[i] - x[k]);
    let intercept = (y[j] + y[k] - slope * (x[j] + x[k])) / 2.0;
    LineFit::new(intercept, slope)
}

/// Sort three indices by x; equal x-values keep their input order
#[inline]
fn order_by_x(x: &[f64], i: usize, j: usize, k: usize) -> (usize, usize, usize) {
    let mut idx = [i, j, k];
    idx.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
    (idx[0], idx[1], idx[2])
}

/// All triples whose smallest original index is `first`, in ascending order
fn search_from(x: &[f64], y: &[f64], first: usize) -> BestCandidate {
    let n = x.len();
    let mut best = BestCandidate::new();
    let mut scratch = vec![0.0; n];

    for second in first + 1..n {
        for third in second + 1..n {
            let (i, j, k) = order_by_x(x, first, second, third);
            if x[i] == x[k] {
                best.skip();
                continue;
            }

            let line = triple_candidate(x, y, i, j, k);
            for (slot, (&xi, &yi)) in scratch.iter_mut().zip(x.iter().zip(y)) {
                *slot = line.residual(xi, yi).abs();
            }
            best.offer(median_in_place(&mut scratch), line);
        }
    }
    best
}

impl<E: ExecutionEngine> LineFitterProperties for CrudeLms<E> {
    fn name(&self) -> &str {
        "Least Median of Squares (crude)"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn minimum_sample_size(&self) -> usize {
        3
    }
}

impl<E: ExecutionEngine> LineFitter for CrudeLms<E> {
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LineFit> {
        self.fit_scored(x, y).map(|fit| fit.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exact_line() {
        let fit = CrudeLms::new().fit_scored(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
        assert_abs_diff_eq!(fit.line.intercept, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.line.slope, 2.0, epsilon = 1e-12);
        assert_eq!(fit.score, 0.0);
        assert_eq!(fit.evaluated, 1);
    }

    #[test]
    fn test_three_points_bisects_middle() {
        // Chord through (0,0) and (2,0); middle point (1,2) → line y = 1
        let fit = CrudeLms::new().fit(&[0.0, 1.0, 2.0], &[0.0, 2.0, 0.0]).unwrap();
        assert_abs_diff_eq!(fit.slope, 0.0);
        assert_abs_diff_eq!(fit.intercept, 1.0);
    }

    #[test]
    fn test_input_order_does_not_matter_for_triple_geometry() {
        let a = CrudeLms::new().fit(&[2.0, 0.0, 1.0], &[0.0, 0.0, 2.0]).unwrap();
        assert_abs_diff_eq!(a.slope, 0.0);
        assert_abs_diff_eq!(a.intercept, 1.0);
    }

    #[test]
    fn test_single_outlier_ignored() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [1.0, 3.0, 5.0, 7.0, 50.0, 11.0, 13.0];
        let fit = CrudeLms::new().fit(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_order_by_x_is_stable() {
        let x = [1.0, 1.0, 0.0];
        assert_eq!(order_by_x(&x, 0, 1, 2), (2, 0, 1));
        let x = [2.0, 2.0, 1.0];
        assert_eq!(order_by_x(&x, 0, 1, 2), (2, 0, 1));
        let x = [5.0, 5.0, 5.0];
        assert_eq!(order_by_x(&x, 0, 1, 2), (0, 1, 2));
    }

    #[test]
    fn test_degenerate_triples_skipped() {
        // Only triples containing index 3 have distinct outer x-values
        let x = [1.0, 1.0, 1.0, 2.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let fit = CrudeLms::new().fit_scored(&x, &y).unwrap();
        assert_eq!(fit.evaluated, 3);
        assert_eq!(fit.skipped, 1);
    }

    #[test]
    fn test_all_x_equal_is_degenerate() {
        let err = CrudeLms::new().fit(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }

    #[test]
    fn test_requires_three_points() {
        let err = CrudeLms::new().fit(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 3, actual: 2 }));
        let err = CrudeLms::new().fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { x_len: 3, y_len: 2 }));
    }

    #[test]
    fn test_candidate_count() {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let fit = CrudeLms::new().fit_scored(&x, &y).unwrap();
        assert_eq!(fit.evaluated, 56); // C(8, 3)
        assert_eq!(fit.skipped, 0);
    }
}
