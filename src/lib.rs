//! Robust straight-line fitting
//!
//! This crate bundles the workspace crates behind a single import:
//!
//! - [`robust_core`]: the shared error type and execution engines
//! - [`robust_regression`]: least squares and least median of squares
//!   estimators
//! - [`columns`]: a reader for column-oriented text data
//!
//! # Example
//!
//! ```rust
//! use robust_linefit::columns::{parse_xy, ColumnSpec};
//! use robust_linefit::prelude::*;
//!
//! let data = "x y\n0 1\n1 3\n2 5\n3 7\n4 50\n5 11\n6 13\n";
//! let sample = parse_xy(data, &ColumnSpec::default());
//!
//! let robust = sample.fit_with(&FastLms::new()).unwrap();
//! assert_eq!(robust.as_tuple(), (1.0, 2.0));
//! ```

pub mod columns;

pub use robust_core;
pub use robust_regression;

pub use columns::{read_xy, read_xy_path, ColumnSpec, Sample};
pub use robust_core::{Error, Result};
pub use robust_regression::{
    fit, CrudeLms, FastLms, FitMethod, LeastSquares, LineFit, LineFitter, ScoredFit,
};

pub mod prelude {
    pub use crate::columns::{ColumnSpec, Sample};
    pub use robust_core::prelude::*;
    pub use robust_regression::{
        CrudeLms, FastLms, FastLmsParameters, FitMethod, LeastSquares, LineFit, LineFitter,
        LineFitterProperties, OlsSolver, ScoredFit, UndefinedSlopePolicy,
    };
}
