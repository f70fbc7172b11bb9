//! Error types for the solver engine
//!
//! All computation failures surface as a [`SolverError`] naming the offending
//! operation and the reason. Non-convergence of the iterative methods is not
//! an error; it is reported through the `converged` flag on the result types.

use thiserror::Error;

/// Errors that can occur while validating a request or running a solve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The coefficient matrix is not square
    #[error("coefficient matrix must be square (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The right-hand side length does not match the matrix order
    #[error("right-hand side length {rhs_len} does not match matrix order {order}")]
    DimensionMismatch { order: usize, rhs_len: usize },

    /// The matrix order is outside the supported range
    #[error("matrix order {order} is outside the supported range 2..=10")]
    UnsupportedOrder { order: usize },

    /// A request parameter is out of its valid range
    #[error("{name} must be positive (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A method name received from the caller does not match any strategy
    #[error("unknown method name {name:?}")]
    UnknownMethod { name: String },

    /// A required pivot or diagonal entry is zero or numerically negligible
    #[error("{op}: matrix is singular or nearly singular ({detail})")]
    SingularMatrix { op: &'static str, detail: String },

    /// Cholesky decomposition was attempted on a non-positive-definite matrix
    #[error("Cholesky decomposition: matrix is not positive-definite (diagonal residual at row {row} is not positive)")]
    NotPositiveDefinite { row: usize },
}

impl SolverError {
    /// Build a [`SolverError::SingularMatrix`] for a zero pivot at `row`
    pub(crate) fn zero_pivot(op: &'static str, row: usize) -> Self {
        SolverError::SingularMatrix {
            op,
            detail: format!("zero pivot at row {row}"),
        }
    }
}
