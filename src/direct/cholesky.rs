//! Cholesky decomposition
//!
//! Factors a symmetric positive-definite `A` as `A = L·Lᵀ` with L
//! lower-triangular. Only the lower triangle of the input is read; a matrix
//! that is not positive-definite is rejected with the distinct
//! [`SolverError::NotPositiveDefinite`] kind as soon as a diagonal residual
//! fails to stay positive.

use crate::error::SolverError;
use crate::triangular::{back_substitution, forward_substitution};
use crate::PIVOT_TOLERANCE;
use ndarray::{Array1, Array2};

/// Cholesky factorization result
#[derive(Debug, Clone)]
pub struct CholeskyFactorization {
    /// Lower-triangular factor with positive diagonal
    pub l: Array2<f64>,
}

impl CholeskyFactorization {
    /// Solve `A x = b` using the pre-computed factor
    ///
    /// Forward substitution on L, then back substitution on Lᵀ.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
        let y = forward_substitution(&self.l, b)?;
        back_substitution(&self.l.t().to_owned(), &y)
    }

    /// Reconstruct `L·Lᵀ`, which equals the original matrix up to rounding
    pub fn reconstruct(&self) -> Array2<f64> {
        self.l.dot(&self.l.t())
    }
}

/// Compute the Cholesky factorization of a symmetric positive-definite matrix
pub fn cholesky_factorize(a: &Array2<f64>) -> Result<CholeskyFactorization, SolverError> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "matrix must be square");

    let mut l: Array2<f64> = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[[i, k]] * l[[j, k]]).sum();
            if i == j {
                let residual = a[[i, i]] - sum;
                if residual <= PIVOT_TOLERANCE {
                    return Err(SolverError::NotPositiveDefinite { row: i });
                }
                l[[i, j]] = residual.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    Ok(CholeskyFactorization { l })
}

/// Solve `A x = b` by Cholesky decomposition
///
/// Convenience function combining factorization and solve.
pub fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
    cholesky_factorize(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::lu_solve;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_cholesky_spd() {
        let a = array![[4.0, 1.0], [1.0, 3.0]];
        let b = array![1.0, 2.0];

        let factors = cholesky_factorize(&a).expect("factorization should succeed");

        // L diagonal is positive
        assert!(factors.l[[0, 0]] > 0.0);
        assert!(factors.l[[1, 1]] > 0.0);

        let x = factors.solve(&b).expect("solve should succeed");
        let reference = lu_solve(&a, &b).expect("LU solve should succeed");

        assert_relative_eq!(x[0], reference[0], epsilon = 1e-10);
        assert_relative_eq!(x[1], reference[1], epsilon = 1e-10);
    }

    #[test]
    fn test_cholesky_reconstruct() {
        let a = array![[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]];

        let factors = cholesky_factorize(&a).expect("factorization should succeed");
        let llt = factors.reconstruct();

        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(llt[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cholesky_not_positive_definite() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![1.0, 1.0];

        let err = cholesky_solve(&a, &b).unwrap_err();
        assert_eq!(err, SolverError::NotPositiveDefinite { row: 1 });
    }

    #[test]
    fn test_cholesky_rejects_negative_leading_entry() {
        let a = array![[-4.0, 0.0], [0.0, 1.0]];

        let err = cholesky_factorize(&a).unwrap_err();
        assert_eq!(err, SolverError::NotPositiveDefinite { row: 0 });
    }
}
