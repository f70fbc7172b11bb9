//! Direct solvers for linear systems
//!
//! - [`lu_factorize`]/[`lu_solve`]: Doolittle LU decomposition, no pivoting
//! - [`cholesky_factorize`]/[`cholesky_solve`]: Cholesky for SPD systems
//! - [`gauss_eliminate`]/[`gauss_jordan`]: augmented-matrix elimination with
//!   partial pivoting and a recorded step trace
//! - [`cramer_solve`]: Cramer's rule over elimination-based determinants
//! - [`determinant`]: pivoted-elimination determinant, shared with the engine

mod cholesky;
mod cramer;
mod gauss;
mod lu;

pub use cholesky::{CholeskyFactorization, cholesky_factorize, cholesky_solve};
pub use cramer::{CramerSolution, cramer_solve, determinant};
pub use gauss::{EliminationSolution, gauss_eliminate, gauss_jordan};
pub use lu::{LuFactorization, lu_factorize, lu_solve};
