//! Best-candidate accumulator for the LMS searches
//!
//! Both LMS estimators enumerate candidate lines and keep the one with the
//! lowest score. A candidate replaces the current best only when its score is
//! strictly lower, so the first candidate in enumeration order wins ties.
//! Partial accumulators built over consecutive index ranges are merged in
//! enumeration order, which keeps that rule intact under parallel execution.

use crate::types::{LineFit, ScoredFit};
use tracing::trace;

/// A scored candidate line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub score: f64,
    pub line: LineFit,
}

/// Running minimum over an enumeration of candidates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BestCandidate {
    best: Option<Candidate>,
    evaluated: usize,
    skipped: usize,
}

impl BestCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current best score, `+inf` before any candidate was accepted
    #[inline]
    pub fn score(&self) -> f64 {
        self.best.map_or(f64::INFINITY, |c| c.score)
    }

    /// Offer a candidate; returns whether it became the new best
    #[inline]
    pub fn offer(&mut self, score: f64, line: LineFit) -> bool {
        self.evaluated += 1;
        if score < self.score() {
            trace!(score, intercept = line.intercept, slope = line.slope, "new best candidate");
            self.best = Some(Candidate { score, line });
            true
        } else {
            false
        }
    }

    /// Record a subset that produced no candidate
    #[inline]
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Fold in an accumulator covering a later part of the enumeration
    pub fn merge(mut self, later: BestCandidate) -> Self {
        self.evaluated += later.evaluated;
        self.skipped += later.skipped;
        if let Some(candidate) = later.best {
            if candidate.score < self.score() {
                self.best = Some(candidate);
            }
        }
        self
    }

    pub fn best(&self) -> Option<Candidate> {
        self.best
    }

    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The winning fit, or `None` if no candidate was accepted
    pub fn into_scored(self) -> Option<ScoredFit> {
        self.best.map(|c| ScoredFit {
            line: c.line,
            score: c.score,
            evaluated: self.evaluated,
            skipped: self.skipped,
        })
    }
}
