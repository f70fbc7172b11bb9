//! Triangular solve primitives
//!
//! Forward and back substitution, shared by the decomposition strategies.
//! Both fail with [`SolverError::SingularMatrix`] when a diagonal entry is
//! zero or within [`PIVOT_TOLERANCE`](crate::PIVOT_TOLERANCE) of zero.

use crate::PIVOT_TOLERANCE;
use crate::error::SolverError;
use ndarray::{Array1, Array2};

/// Solve `L y = b` for a lower-triangular `L` with non-negligible diagonal
pub fn forward_substitution(l: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
    let n = b.len();
    assert_eq!(l.nrows(), n, "matrix order must match vector length");
    assert_eq!(l.ncols(), n, "matrix must be square");

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let diag = l[[i, i]];
        if diag.abs() <= PIVOT_TOLERANCE {
            return Err(SolverError::zero_pivot("forward substitution", i));
        }
        let sum: f64 = (0..i).map(|j| l[[i, j]] * y[j]).sum();
        y[i] = (b[i] - sum) / diag;
    }
    Ok(y)
}

/// Solve `U x = y` for an upper-triangular `U` with non-negligible diagonal
pub fn back_substitution(u: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
    let n = y.len();
    assert_eq!(u.nrows(), n, "matrix order must match vector length");
    assert_eq!(u.ncols(), n, "matrix must be square");

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let diag = u[[i, i]];
        if diag.abs() <= PIVOT_TOLERANCE {
            return Err(SolverError::zero_pivot("back substitution", i));
        }
        let sum: f64 = ((i + 1)..n).map(|j| u[[i, j]] * x[j]).sum();
        x[i] = (y[i] - sum) / diag;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_substitution() {
        let l = array![[2.0, 0.0], [1.0, 3.0]];
        let b = array![4.0, 11.0];

        let y = forward_substitution(&l, &b).expect("forward substitution should succeed");

        assert_relative_eq!(y[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_back_substitution() {
        let u = array![[2.0, 1.0], [0.0, 4.0]];
        let y = array![5.0, 8.0];

        let x = back_substitution(&u, &y).expect("back substitution should succeed");

        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[0], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_diagonal_is_singular() {
        let l = array![[0.0, 0.0], [1.0, 1.0]];
        let b = array![1.0, 1.0];

        let err = forward_substitution(&l, &b).unwrap_err();
        assert!(matches!(err, SolverError::SingularMatrix { .. }));

        let u = array![[1.0, 1.0], [0.0, 0.0]];
        let err = back_substitution(&u, &b).unwrap_err();
        assert!(matches!(err, SolverError::SingularMatrix { .. }));
    }
}
