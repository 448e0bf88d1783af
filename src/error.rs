//! Error types for the strided mapping kernels
//!
//! Provides a unified error type for the descriptor-validation seam. The
//! kernels themselves are infallible: malformed traversal parameters are
//! caller precondition violations, caught (as panics) by checked indexing.

use thiserror::Error;

/// Core error type for traversal descriptor validation
#[derive(Error, Debug)]
pub enum Error {
    /// A traversal would touch an index outside the buffer
    #[error("Index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// Lock-step buffers disagree on length
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an out-of-bounds traversal position
    pub fn out_of_bounds(index: isize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create an error for lock-step buffers of unequal length
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }
}
