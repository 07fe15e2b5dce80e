//! Math error types

use thiserror::Error;

/// Errors returned by the fallible accessors and conversions
///
/// The indexing operators panic instead; these variants back the checked
/// `get`/`try_from` counterparts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Matrix element outside the 4x4 range
    #[error("matrix index ({row}, {col}) out of bounds for 4x4 matrix")]
    IndexOutOfBounds { row: usize, col: usize },

    /// Vector component outside the vector length
    #[error("component index {index} out of bounds for vector of length {len}")]
    ComponentOutOfBounds { index: usize, len: usize },

    /// Slice conversion with the wrong number of elements
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
