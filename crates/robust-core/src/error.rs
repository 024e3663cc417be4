//! Error types for robust line fitting
//!
//! Provides a unified error type for all robust-linefit crates.

use thiserror::Error;

/// Core error type for fitting operations
#[derive(Error, Debug)]
pub enum Error {
    /// The x and y sequences have different lengths
    #[error("Shape mismatch: x has {x_len} values, y has {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The sample cannot determine a slope (e.g. all x-values identical)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// A pivot pair shares its x-value, so its chord slope is undefined
    #[error("Undefined slope: observations {r} and {s} share the same x-value")]
    UndefinedSlope { r: usize, s: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for x/y sequences of different lengths
    pub fn shape_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::ShapeMismatch { x_len, y_len }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a sample whose x-values are all identical
    pub fn degenerate(estimator: &str) -> Self {
        Self::DegenerateInput(format!(
            "all x-values are identical, {estimator} slope is undefined"
        ))
    }

    /// Whether this error describes the input sample rather than a failure
    /// of the computation itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. }
                | Self::InsufficientData { .. }
                | Self::DegenerateInput(_)
                | Self::UndefinedSlope { .. }
                | Self::InvalidInput(_)
        )
    }
}
