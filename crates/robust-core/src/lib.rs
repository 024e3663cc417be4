//! Core types for robust line fitting
//!
//! This crate provides the pieces shared by every estimator in the
//! workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`utils`]: order statistics (`median_in_place`, `kth_smallest`, ...)
//! - [`execution`]: engines that run an estimator's outer enumeration either
//!   sequentially or on a Rayon pool (`parallel` feature)
//!
//! # Example
//!
//! ```rust
//! use robust_core::{execution::sequential, ExecutionEngine};
//! use robust_core::utils::median_in_place;
//!
//! let engine = sequential();
//! let medians = engine.execute_batch(3, |i| {
//!     let mut window = vec![i as f64, 10.0, -1.0];
//!     median_in_place(&mut window)
//! });
//! assert_eq!(medians, vec![0.0, 1.0, 2.0]);
//! ```

pub mod error;
pub mod execution;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::Result;
}
