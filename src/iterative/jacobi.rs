//! Jacobi iteration
//!
//! Simultaneous-update relaxation: every component of the new iterate is
//! computed from the previous iterate only.

use super::{IterationRecord, RelaxationConfig, RelaxationSolution, check_diagonal, max_norm_diff};
use crate::error::SolverError;
use ndarray::{Array1, Array2};

const OP: &str = "Jacobi iteration";

/// Solve `A x = b` by Jacobi iteration
///
/// Fails up front with [`SolverError::SingularMatrix`] when any diagonal
/// entry of A is negligible; running out of the iteration budget is reported
/// through `converged = false`, not as an error.
pub fn jacobi(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &RelaxationConfig,
) -> Result<RelaxationSolution, SolverError> {
    let n = b.len();
    check_diagonal(a, n, OP)?;

    let mut x: Array1<f64> = Array1::zeros(n);
    let mut history = Vec::new();
    let mut delta = f64::INFINITY;

    for sweep in 1..=config.max_iterations {
        let mut x_new: Array1<f64> = Array1::zeros(n);
        for i in 0..n {
            let sigma: f64 = (0..n)
                .filter(|&j| j != i)
                .map(|j| a[[i, j]] * x[j])
                .sum();
            x_new[i] = (b[i] - sigma) / a[[i, i]];
        }

        delta = max_norm_diff(&x_new, &x);
        history.push(IterationRecord {
            sweep,
            x: x_new.clone(),
            delta,
        });

        if config.print_interval > 0 && sweep % config.print_interval == 0 {
            log::info!("Jacobi sweep {sweep}: delta = {delta:.6e}");
        }

        x = x_new;

        if delta < config.tolerance {
            return Ok(RelaxationSolution {
                x,
                iterations: sweep,
                delta,
                converged: true,
                history,
            });
        }
    }

    Ok(RelaxationSolution {
        x,
        iterations: config.max_iterations,
        delta,
        converged: false,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::lu_solve;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_jacobi_diagonally_dominant() {
        let a = array![[4.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 4.0]];
        let b = array![2.0, 4.0, 10.0];

        let config = RelaxationConfig {
            tolerance: 1e-10,
            max_iterations: 100,
            print_interval: 0,
        };

        let solution = jacobi(&a, &b, &config).expect("Jacobi should run");
        assert!(solution.converged, "Jacobi should converge for dominant A");
        assert!(solution.iterations <= 100);

        let reference = lu_solve(&a, &b).expect("LU solve should succeed");
        for i in 0..3 {
            assert_relative_eq!(solution.x[i], reference[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_jacobi_budget_exhaustion_is_not_an_error() {
        // Not diagonally dominant; Jacobi diverges here
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![1.0, 1.0];

        let config = RelaxationConfig {
            tolerance: 1e-12,
            max_iterations: 5,
            print_interval: 0,
        };

        let solution = jacobi(&a, &b, &config).expect("budget exhaustion is reported, not raised");
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 5);
        assert_eq!(solution.history.len(), 5);
    }

    #[test]
    fn test_jacobi_zero_diagonal() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![1.0, 1.0];

        let err = jacobi(&a, &b, &RelaxationConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::SingularMatrix { .. }));
    }

    #[test]
    fn test_jacobi_history_records_every_sweep() {
        let a = array![[10.0, 1.0], [1.0, 10.0]];
        let b = array![11.0, 11.0];

        let solution = jacobi(&a, &b, &RelaxationConfig::default()).expect("Jacobi should run");
        assert!(solution.converged);
        assert_eq!(solution.history.len(), solution.iterations);
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-3);
    }
}
