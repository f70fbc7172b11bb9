//! Cramer's rule
//!
//! Computes `x[i] = det(A_i) / det(A)` where `A_i` is A with column i
//! replaced by b. Determinants are evaluated by elimination with partial
//! pivoting (sign tracked across row swaps) rather than cofactor expansion,
//! keeping the cost at O(n³) per determinant across the whole supported
//! order range.

use crate::error::SolverError;
use crate::PIVOT_TOLERANCE;
use ndarray::{Array1, Array2};

const OP: &str = "Cramer's rule";

/// Solution of a Cramer's-rule solve, with the determinants that produced it
#[derive(Debug, Clone)]
pub struct CramerSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Determinant of the coefficient matrix
    pub det: f64,
    /// Determinant of each column-replaced matrix `A_i`
    pub column_dets: Vec<f64>,
}

/// Solve `A x = b` by Cramer's rule
pub fn cramer_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<CramerSolution, SolverError> {
    let n = b.len();

    let det = determinant(a);
    if det.abs() <= PIVOT_TOLERANCE {
        return Err(SolverError::SingularMatrix {
            op: OP,
            detail: "determinant of the coefficient matrix is negligible".to_string(),
        });
    }

    let mut x = Array1::zeros(n);
    let mut column_dets = Vec::with_capacity(n);
    for i in 0..n {
        let mut a_i = a.clone();
        a_i.column_mut(i).assign(b);
        let det_i = determinant(&a_i);
        x[i] = det_i / det;
        column_dets.push(det_i);
    }

    Ok(CramerSolution { x, det, column_dets })
}

/// Determinant by elimination with partial pivoting
///
/// Returns 0.0 when a pivot column has no usable entry.
pub fn determinant(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    let mut m = a.clone();
    let mut det = 1.0;

    for col in 0..n {
        let mut max_val = m[[col, col]].abs();
        let mut max_row = col;
        for row in (col + 1)..n {
            let val = m[[row, col]].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val <= PIVOT_TOLERANCE {
            return 0.0;
        }

        if max_row != col {
            for j in 0..n {
                let tmp = m[[col, j]];
                m[[col, j]] = m[[max_row, j]];
                m[[max_row, j]] = tmp;
            }
            det = -det;
        }

        let pivot = m[[col, col]];
        det *= pivot;

        for row in (col + 1)..n {
            let factor = m[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in (col + 1)..n {
                m[[row, j]] -= factor * m[[col, j]];
            }
        }
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::lu_solve;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_determinant() {
        let a = array![[4.0, 1.0], [2.0, 3.0]];
        assert_relative_eq!(determinant(&a), 10.0, epsilon = 1e-12);

        // Row swap flips the sign exactly once
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        assert_relative_eq!(determinant(&a), -1.0, epsilon = 1e-12);

        let singular = array![[1.0, 2.0], [2.0, 4.0]];
        assert_relative_eq!(determinant(&singular), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cramer_2x2() {
        let a = array![[4.0, 1.0], [2.0, 3.0]];
        let b = array![1.0, 2.0];

        let solution = cramer_solve(&a, &b).expect("Cramer should succeed");

        assert_relative_eq!(solution.x[0], 0.1, epsilon = 1e-10);
        assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-10);
        assert_relative_eq!(solution.det, 10.0, epsilon = 1e-12);
        assert_eq!(solution.column_dets.len(), 2);
        assert_relative_eq!(solution.column_dets[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.column_dets[1], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cramer_matches_lu() {
        let a = array![[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let b = array![1.0, 2.0, 3.0];

        let solution = cramer_solve(&a, &b).expect("Cramer should succeed");
        let reference = lu_solve(&a, &b).expect("LU solve should succeed");

        for i in 0..3 {
            assert_relative_eq!(solution.x[i], reference[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cramer_singular() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![3.0, 6.0];

        let err = cramer_solve(&a, &b).unwrap_err();
        assert!(matches!(err, SolverError::SingularMatrix { .. }));
    }
}
