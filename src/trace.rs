//! Diagnostic trace records
//!
//! Every solve returns, alongside the solution vector, an ordered list of
//! [`TraceEntry`] records: factor matrices for the decomposition methods, row
//! operations and elimination snapshots for the direct methods, determinants
//! for Cramer's rule, and per-sweep iterates for the relaxation methods.
//! Each entry renders human-readably through `Display`; the presentation
//! layer is expected to show them verbatim.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One diagnostic record produced during a solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEntry {
    /// An intermediate or factor matrix (L, U, Cholesky L, elimination snapshot)
    Matrix {
        /// Human-readable label, e.g. `"L"` or `"augmented matrix after column 2"`
        label: String,
        matrix: Array2<f64>,
    },
    /// A single elimination step, e.g. a row swap or row update
    Step { description: String },
    /// A named scalar, e.g. a determinant
    Scalar { label: String, value: f64 },
    /// One sweep of an iterative method
    Iteration {
        /// 1-based sweep number
        sweep: usize,
        /// Iterate after this sweep
        x: Array1<f64>,
        /// Max-norm change against the previous iterate
        delta: f64,
    },
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Matrix { label, matrix } => write!(f, "{label}:\n{matrix}"),
            TraceEntry::Step { description } => write!(f, "{description}"),
            TraceEntry::Scalar { label, value } => write!(f, "{label} = {value}"),
            TraceEntry::Iteration { sweep, x, delta } => {
                write!(f, "sweep {sweep}: x = {x}, delta = {delta:.3e}")
            }
        }
    }
}

impl TraceEntry {
    /// Shorthand for a labeled matrix entry
    pub fn matrix(label: impl Into<String>, matrix: Array2<f64>) -> Self {
        TraceEntry::Matrix {
            label: label.into(),
            matrix,
        }
    }

    /// Shorthand for a step description
    pub fn step(description: impl Into<String>) -> Self {
        TraceEntry::Step {
            description: description.into(),
        }
    }

    /// Shorthand for a labeled scalar entry
    pub fn scalar(label: impl Into<String>, value: f64) -> Self {
        TraceEntry::Scalar {
            label: label.into(),
            value,
        }
    }
}
