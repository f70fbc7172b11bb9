//! Iterative (relaxation) solvers for linear systems
//!
//! - [`jacobi`]: simultaneous-update relaxation from the previous iterate
//! - [`gauss_seidel`]: sequential in-place relaxation, typically faster
//!
//! Both start from x⁰ = 0, stop when the max-norm of the change between
//! consecutive iterates drops below the configured tolerance, and report
//! `converged = false` with the last iterate when the iteration budget runs
//! out. Neither checks diagonal dominance up front: convergence is attempted
//! regardless and the outcome reported.

mod gauss_seidel;
mod jacobi;

pub use gauss_seidel::gauss_seidel;
pub use jacobi::jacobi;

use crate::PIVOT_TOLERANCE;
use crate::error::SolverError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Configuration shared by the relaxation methods
#[derive(Debug, Clone)]
pub struct RelaxationConfig {
    /// Stop when the max-norm change between iterates drops below this
    pub tolerance: f64,
    /// Hard upper bound on the number of sweeps
    pub max_iterations: usize,
    /// Print progress every N sweeps (0 = no output)
    pub print_interval: usize,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
            print_interval: 0,
        }
    }
}

/// One recorded sweep of a relaxation method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based sweep number
    pub sweep: usize,
    /// Iterate after this sweep
    pub x: Array1<f64>,
    /// Max-norm change against the previous iterate
    pub delta: f64,
}

/// Relaxation solver result
#[derive(Debug, Clone)]
pub struct RelaxationSolution {
    /// Final iterate (the solution when `converged` is true)
    pub x: Array1<f64>,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Max-norm change of the final sweep
    pub delta: f64,
    /// Whether the tolerance was met within the iteration budget
    pub converged: bool,
    /// Per-sweep iterates, in order
    pub history: Vec<IterationRecord>,
}

/// Reject a system whose diagonal contains a negligible entry
pub(crate) fn check_diagonal(a: &Array2<f64>, n: usize, op: &'static str) -> Result<(), SolverError> {
    assert_eq!(a.nrows(), n, "matrix order must match vector length");
    assert_eq!(a.ncols(), n, "matrix must be square");
    for i in 0..n {
        if a[[i, i]].abs() <= PIVOT_TOLERANCE {
            return Err(SolverError::SingularMatrix {
                op,
                detail: format!("zero diagonal entry at row {i}"),
            });
        }
    }
    Ok(())
}

/// Max-norm of the difference between two iterates
pub(crate) fn max_norm_diff(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(ai, bi)| (ai - bi).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_max_norm_diff() {
        let a = array![1.0, 5.0, 2.0];
        let b = array![1.5, 4.0, 2.0];
        assert_relative_eq!(max_norm_diff(&a, &b), 1.0, epsilon = 1e-15);
    }
}
