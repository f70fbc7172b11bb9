//! Gaussian elimination and Gauss-Jordan
//!
//! Both operate on the augmented matrix `[A|b]` with partial pivoting: the
//! largest-magnitude entry of the active column is promoted to the pivot row
//! before eliminating. Every row operation is recorded as a trace step, with
//! a snapshot of the augmented matrix after each eliminated column, so the
//! full reduction can be reported back to the caller.

use crate::error::SolverError;
use crate::trace::TraceEntry;
use crate::triangular::back_substitution;
use crate::PIVOT_TOLERANCE;
use ndarray::{s, Array1, Array2};

/// Solution of an elimination-based solve, with the recorded row operations
#[derive(Debug, Clone)]
pub struct EliminationSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Row operations and elimination snapshots, in order
    pub steps: Vec<TraceEntry>,
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting
///
/// Reduces `[A|b]` to upper-triangular form, then back-substitutes.
pub fn gauss_eliminate(a: &Array2<f64>, b: &Array1<f64>) -> Result<EliminationSolution, SolverError> {
    const OP: &str = "Gaussian elimination";
    let n = b.len();
    let mut aug = augment(a, b);
    let mut steps = Vec::new();

    for col in 0..n {
        pivot_and_eliminate_below(&mut aug, col, OP, &mut steps)?;
        steps.push(TraceEntry::matrix(
            format!("augmented matrix after column {col}"),
            aug.clone(),
        ));
    }

    let u = aug.slice(s![.., ..n]).to_owned();
    let y = aug.slice(s![.., n]).to_owned();
    let x = back_substitution(&u, &y)?;

    Ok(EliminationSolution { x, steps })
}

/// Solve `A x = b` by Gauss-Jordan elimination with partial pivoting
///
/// Reduces `[A|b]` all the way to `[I|x]`; no substitution step is needed.
pub fn gauss_jordan(a: &Array2<f64>, b: &Array1<f64>) -> Result<EliminationSolution, SolverError> {
    const OP: &str = "Gauss-Jordan elimination";
    let n = b.len();
    let mut aug = augment(a, b);
    let mut steps = Vec::new();

    for col in 0..n {
        pivot_and_eliminate_below(&mut aug, col, OP, &mut steps)?;

        // Normalize the pivot row, then clear above the diagonal as well
        let pivot = aug[[col, col]];
        for j in col..=n {
            aug[[col, j]] /= pivot;
        }
        steps.push(TraceEntry::step(format!("R{col} := R{col} / {pivot:.6}")));

        for row in 0..col {
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in col..=n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
            steps.push(TraceEntry::step(format!("R{row} := R{row} - {factor:.6}*R{col}")));
        }

        steps.push(TraceEntry::matrix(
            format!("augmented matrix after column {col}"),
            aug.clone(),
        ));
    }

    let x = aug.slice(s![.., n]).to_owned();
    Ok(EliminationSolution { x, steps })
}

/// Build the augmented matrix `[A|b]`
fn augment(a: &Array2<f64>, b: &Array1<f64>) -> Array2<f64> {
    let n = b.len();
    let mut aug: Array2<f64> = Array2::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(a);
    aug.slice_mut(s![.., n]).assign(b);
    aug
}

/// Select the partial pivot for `col`, swap it into place, eliminate below
fn pivot_and_eliminate_below(
    aug: &mut Array2<f64>,
    col: usize,
    op: &'static str,
    steps: &mut Vec<TraceEntry>,
) -> Result<(), SolverError> {
    let n = aug.nrows();

    let mut max_val = aug[[col, col]].abs();
    let mut max_row = col;
    for row in (col + 1)..n {
        let val = aug[[row, col]].abs();
        if val > max_val {
            max_val = val;
            max_row = row;
        }
    }

    if max_val <= PIVOT_TOLERANCE {
        return Err(SolverError::SingularMatrix {
            op,
            detail: format!("no usable pivot in column {col}"),
        });
    }

    if max_row != col {
        for j in 0..=n {
            let tmp = aug[[col, j]];
            aug[[col, j]] = aug[[max_row, j]];
            aug[[max_row, j]] = tmp;
        }
        steps.push(TraceEntry::step(format!(
            "R{col} <-> R{max_row} (pivot {:.6})",
            aug[[col, col]]
        )));
    }

    let pivot = aug[[col, col]];
    for row in (col + 1)..n {
        let factor = aug[[row, col]] / pivot;
        if factor == 0.0 {
            continue;
        }
        for j in col..=n {
            aug[[row, j]] -= factor * aug[[col, j]];
        }
        // Clear explicitly so the trace shows exact zeros below the pivot
        aug[[row, col]] = 0.0;
        steps.push(TraceEntry::step(format!("R{row} := R{row} - {factor:.6}*R{col}")));
    }

    Ok(())
}
