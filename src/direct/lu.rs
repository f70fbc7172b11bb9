//! LU decomposition (Doolittle)
//!
//! Factors `A = L·U` with L unit lower-triangular and U upper-triangular,
//! without pivoting. The absence of row exchanges is a deliberate, documented
//! limitation of Doolittle's scheme as taught: a matrix whose leading pivot
//! vanishes (e.g. `[[0,1],[1,0]]`) is rejected as singular even when it is
//! invertible. Use [`gauss_eliminate`](crate::direct::gauss_eliminate) for a
//! pivoted direct solve.

use crate::error::SolverError;
use crate::triangular::{back_substitution, forward_substitution};
use crate::PIVOT_TOLERANCE;
use ndarray::{Array1, Array2};

const OP: &str = "LU decomposition";

/// LU factorization result
///
/// Both factors are stored explicitly so they can be reported back to the
/// caller as diagnostic output.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Unit lower-triangular factor (diagonal fixed to 1)
    pub l: Array2<f64>,
    /// Upper-triangular factor
    pub u: Array2<f64>,
}

impl LuFactorization {
    /// Solve `A x = b` using the pre-computed factors
    ///
    /// Forward substitution on L, then back substitution on U.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
        let y = forward_substitution(&self.l, b)?;
        back_substitution(&self.u, &y)
    }

    /// Determinant of the factored matrix: the product of U's diagonal
    pub fn det(&self) -> f64 {
        self.u.diag().product()
    }

    /// Reconstruct `L·U`, which equals the original matrix up to rounding
    pub fn reconstruct(&self) -> Array2<f64> {
        self.l.dot(&self.u)
    }
}

/// Compute the Doolittle LU factorization of a square matrix, no pivoting
///
/// Row i of U is computed before column i of L, each as the residual of the
/// corresponding entry of A against the already-known factors. Fails with
/// [`SolverError::SingularMatrix`] on a negligible pivot `U[i][i]`.
pub fn lu_factorize(a: &Array2<f64>) -> Result<LuFactorization, SolverError> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "matrix must be square");

    let mut l: Array2<f64> = Array2::eye(n);
    let mut u: Array2<f64> = Array2::zeros((n, n));

    for i in 0..n {
        for k in i..n {
            let sum: f64 = (0..i).map(|j| l[[i, j]] * u[[j, k]]).sum();
            u[[i, k]] = a[[i, k]] - sum;
        }

        let pivot = u[[i, i]];
        if pivot.abs() <= PIVOT_TOLERANCE {
            return Err(SolverError::zero_pivot(OP, i));
        }

        for k in (i + 1)..n {
            let sum: f64 = (0..i).map(|j| l[[k, j]] * u[[j, i]]).sum();
            l[[k, i]] = (a[[k, i]] - sum) / pivot;
        }
    }

    Ok(LuFactorization { l, u })
}

/// Solve `A x = b` by LU decomposition
///
/// Convenience function combining factorization and solve.
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
    lu_factorize(a)?.solve(b)
}
