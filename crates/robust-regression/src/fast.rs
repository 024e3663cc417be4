//! Least median of squares by pairwise order statistics
//!
//! Algorithm 2 of Steele & Steiger (1986). Every ordered pair `(r, s)` with
//! `x[r] != x[s]` fixes a slope `β`. Residuals are measured from the line of
//! that slope through the pivot `r`:
//!
//! ```text
//! z[i] = y[i] − y[r] − β·(x[i] − x[r])
//! ```
//!
//! The narrowest band of slope `β` that has `r` on one edge and covers half
//! the sample has its other edge at the `m`-th smallest positive residual or
//! the `m`-th largest non-positive one, `m = ⌊(n − 2)/2⌋`. The candidate line
//! runs down the middle of that band and is scored by the band width.
//!
//! `O(n²)` pairs with an `O(n)` selection each.

use crate::candidate::BestCandidate;
use crate::traits::{LineFitter, LineFitterProperties};
use crate::types::{LineFit, ScoredFit};
use crate::validation::{all_equal, validate_sample};
use robust_core::utils::{kth_largest, kth_smallest};
use robust_core::{Error, ExecutionEngine, Result, SequentialEngine};
use tracing::{debug, instrument, warn};

/// What to do with a pivot pair whose x-values coincide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndefinedSlopePolicy {
    /// Leave the pair out of the search
    #[default]
    Skip,
    /// Abort the fit with [`Error::UndefinedSlope`]
    Fail,
}

/// Parameters for [`FastLms`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastLmsParameters {
    /// Handling of pairs with `x[r] == x[s]`
    pub undefined_slope: UndefinedSlopePolicy,
}

/// Order-statistic LMS estimator
#[derive(Debug, Clone, Default)]
pub struct FastLms<E: ExecutionEngine = SequentialEngine> {
    parameters: FastLmsParameters,
    engine: E,
}

impl FastLms<SequentialEngine> {
    /// Create a sequential estimator with default parameters
    pub fn new() -> Self {
        Self::with_engine(SequentialEngine::new())
    }
}

impl<E: ExecutionEngine> FastLms<E> {
    /// Create an estimator that enumerates pivots on the given engine
    pub fn with_engine(engine: E) -> Self {
        Self {
            parameters: FastLmsParameters::default(),
            engine,
        }
    }

    /// Replace all parameters
    pub fn with_parameters(mut self, parameters: FastLmsParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Shorthand for setting only the undefined-slope policy
    pub fn with_undefined_slope(mut self, policy: UndefinedSlopePolicy) -> Self {
        self.parameters.undefined_slope = policy;
        self
    }

    /// Current parameters
    pub fn parameters(&self) -> &FastLmsParameters {
        &self.parameters
    }

    /// Engine that runs the pivot enumeration
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Fit and report the winning band width
    ///
    /// The score is the full width `|z_p|` of the narrowest half-sample band,
    /// so for a given line it is twice the median absolute residual reported
    /// by the crude search when `n` is odd.
    #[instrument(skip_all, fields(n = x.len(), policy = ?self.parameters.undefined_slope))]
    pub fn fit_scored(&self, x: &[f64], y: &[f64]) -> Result<ScoredFit> {
        let n = validate_sample(x, y, self.minimum_sample_size())?;
        if all_equal(x) {
            return Err(Error::degenerate("least median of squares"));
        }

        let policy = self.parameters.undefined_slope;
        let half = (n - 2) / 2;
        let partials = self
            .engine
            .execute_batch(n, |r| search_pivot(x, y, r, half, policy));

        // Reduce in pivot order so a Fail reports the first offending pair
        let mut best = BestCandidate::new();
        for partial in partials {
            best = best.merge(partial?);
        }

        if best.skipped() > 0 {
            warn!(
                skipped = best.skipped(),
                "skipped pivot pairs sharing an x-value"
            );
        }
        if best.evaluated() == 0 {
            return Err(Error::degenerate("least median of squares"));
        }

        let fit = best.into_scored().ok_or_else(|| {
            Error::Computation("no pivot pair produced a finite band width".to_string())
        })?;

        debug!(
            intercept = fit.line.intercept,
            slope = fit.line.slope,
            score = fit.score,
            evaluated = fit.evaluated,
            skipped = fit.skipped,
            "fast LMS fit"
        );
        Ok(fit)
    }
}

/// Every pair `(r, s)`, `s != r`, in ascending `s`
fn search_pivot(
    x: &[f64],
    y: &[f64],
    r: usize,
    half: usize,
    policy: UndefinedSlopePolicy,
) -> Result<BestCandidate> {
    let n = x.len();
    let mut best = BestCandidate::new();
    let mut z = vec![0.0; n];
    let mut positive = Vec::with_capacity(n);
    let mut negative = Vec::with_capacity(n);

    for s in 0..n {
        if s == r {
            continue;
        }
        if x[s] == x[r] {
            match policy {
                UndefinedSlopePolicy::Skip => {
                    best.skip();
                    continue;
                }
                UndefinedSlopePolicy::Fail => return Err(Error::UndefinedSlope { r, s }),
            }
        }

        let slope = (y[r] - y[s]) / (x[r] - x[s]);
        positive.clear();
        negative.clear();
        for i in 0..n {
            // The pivot pair lies on the chord
            if i == r || i == s {
                z[i] = 0.0;
                continue;
            }
            let zi = y[i] - y[r] - slope * (x[i] - x[r]);
            z[i] = zi;
            if zi > 0.0 {
                positive.push(zi);
            } else {
                negative.push(zi);
            }
        }

        let z_p = band_edge(&mut positive, &mut negative, half);
        let p = z.iter().position(|&v| v == z_p).unwrap_or(r);
        let intercept = (y[r] + y[p] - slope * (x[r] + x[p])) / 2.0;
        best.offer(z_p.abs(), LineFit::new(intercept, slope));
    }
    Ok(best)
}

/// Far edge of the narrowest band covering `half` residuals besides the
/// pivot pair
///
/// A side with fewer than `half` residuals cannot close the band. Since
/// `2·half ≤ n − 2` at least one side always can. The positive edge wins
/// only when it is strictly narrower.
fn band_edge(positive: &mut [f64], negative: &mut [f64], half: usize) -> f64 {
    if half == 0 {
        return 0.0;
    }
    let upper = kth_smallest(positive, half - 1);
    let lower = kth_largest(negative, half - 1);
    match (upper, lower) {
        (Some(u), Some(l)) if u.abs() < l.abs() => u,
        (_, Some(l)) => l,
        (Some(u), None) => u,
        (None, None) => 0.0,
    }
}

impl<E: ExecutionEngine> LineFitterProperties for FastLms<E> {
    fn name(&self) -> &str {
        "Least Median of Squares"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl<E: ExecutionEngine> LineFitter for FastLms<E> {
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LineFit> {
        self.fit_scored(x, y).map(|fit| fit.line)
    }
}
