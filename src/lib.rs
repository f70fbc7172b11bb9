//! Linear-system solvers for classroom-scale engineering problems
//!
//! This crate provides the numerical core behind a linear-algebra analysis
//! tool: given a square coefficient matrix A and a right-hand side b, it
//! solves `A x = b` with a caller-selected strategy and reports the
//! intermediate work (factor matrices, elimination steps, iteration logs)
//! alongside the solution.
//!
//! # Features
//!
//! - **Decomposition methods**: Doolittle LU (no pivoting), Cholesky
//! - **Direct methods**: Gaussian elimination, Gauss-Jordan, Cramer's rule
//! - **Iterative methods**: Jacobi, Gauss-Seidel with tolerance and
//!   iteration budget
//! - **Shared primitives**: forward and back substitution
//! - **Uniform engine**: one [`solve`] entry point dispatching on a closed
//!   [`Method`] enum, returning a [`SolveResult`] with a diagnostic trace
//!
//! Matrix orders from 2 to 10 are supported; the intended use is
//! report-scale engineering systems, not large-scale numerical computing.
//!
//! # Example
//!
//! ```ignore
//! use matrixlab_solvers::{Method, SolveRequest, solve};
//! use ndarray::array;
//!
//! let a = array![[4.0, 1.0], [2.0, 3.0]];
//! let b = array![1.0, 2.0];
//!
//! let result = solve(&SolveRequest::new(a, b, Method::Lu))?;
//! assert!((result.x[0] - 0.1).abs() < 1e-10);
//! ```

pub mod direct;
pub mod engine;
pub mod error;
pub mod iterative;
pub mod trace;
pub mod triangular;

// Re-export the engine surface
pub use engine::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, MAX_ORDER, MIN_ORDER, Method, SolveRequest,
    SolveResult, solve,
};
pub use error::SolverError;
pub use trace::TraceEntry;

// Re-export the individual strategies
pub use direct::{
    CholeskyFactorization, CramerSolution, EliminationSolution, LuFactorization, cholesky_factorize,
    cholesky_solve, cramer_solve, determinant, gauss_eliminate, gauss_jordan, lu_factorize,
    lu_solve,
};
pub use iterative::{
    IterationRecord, RelaxationConfig, RelaxationSolution, gauss_seidel, jacobi,
};
pub use triangular::{back_substitution, forward_substitution};

/// Threshold below which a pivot or diagonal entry is treated as zero
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
