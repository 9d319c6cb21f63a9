//! Error types for the dense engine
//!
//! Every fallible operation reports one of four conditions. Failures are
//! detected at the offending call and perform no partial work; numerical
//! degeneracy ([`LinAlgError::SingularMatrix`]) is kept distinct from shape
//! and indexing mistakes so callers can branch on it.

use thiserror::Error;

/// Errors that can occur during dense linear algebra operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// Index outside the declared bounds on element get/set
    ///
    /// `axis` follows ndarray numbering: 0 for rows (or a vector's only
    /// axis), 1 for columns.
    #[error("index {index} out of range for axis {axis} of length {len}")]
    OutOfRange {
        axis: usize,
        index: usize,
        len: usize,
    },

    /// Operand shapes incompatible for the requested operation
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Inverse, determinant, or eigen extraction requested on a non-square matrix
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Pivot magnitude below tolerance during factorization
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, LinAlgError>;
