//! Solver engine front door
//!
//! A caller builds a [`SolveRequest`] with the coefficient matrix, right-hand
//! side and one of the closed set of [`Method`]s, then calls [`solve`]. The
//! engine validates the request, dispatches to the matching strategy and
//! returns a uniform [`SolveResult`] carrying the solution vector, the
//! diagnostic trace, and the convergence report for the iterative methods.
//!
//! The engine holds no state between calls; every strategy works on private
//! copies of the request's arrays.

use crate::PIVOT_TOLERANCE;
use crate::direct::{
    cholesky_factorize, cramer_solve, determinant, gauss_eliminate, gauss_jordan, lu_factorize,
};
use crate::error::SolverError;
use crate::iterative::{RelaxationConfig, RelaxationSolution, gauss_seidel, jacobi};
use crate::trace::TraceEntry;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest supported matrix order
pub const MIN_ORDER: usize = 2;
/// Largest supported matrix order
pub const MAX_ORDER: usize = 10;

/// Default convergence tolerance for the iterative methods
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
/// Default iteration budget for the iterative methods
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// The closed set of solution strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Doolittle LU decomposition, no pivoting
    #[serde(rename = "LU")]
    Lu,
    /// Cholesky decomposition (symmetric positive-definite systems)
    Cholesky,
    /// Gaussian elimination with partial pivoting
    GaussElimination,
    /// Gauss-Jordan elimination with partial pivoting
    GaussJordan,
    /// Cramer's rule
    Cramer,
    /// Jacobi iteration
    Jacobi,
    /// Gauss-Seidel iteration
    GaussSeidel,
}

impl Method {
    /// All methods, in presentation order
    pub const ALL: [Method; 7] = [
        Method::Lu,
        Method::Cholesky,
        Method::GaussElimination,
        Method::GaussJordan,
        Method::Cramer,
        Method::Jacobi,
        Method::GaussSeidel,
    ];

    /// Wire name of the method, as exchanged with the presentation layer
    pub fn name(&self) -> &'static str {
        match self {
            Method::Lu => "LU",
            Method::Cholesky => "Cholesky",
            Method::GaussElimination => "GaussElimination",
            Method::GaussJordan => "GaussJordan",
            Method::Cramer => "Cramer",
            Method::Jacobi => "Jacobi",
            Method::GaussSeidel => "GaussSeidel",
        }
    }

    /// Whether the method iterates under a tolerance/budget
    pub fn is_iterative(&self) -> bool {
        matches!(self, Method::Jacobi | Method::GaussSeidel)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SolverError;

    /// Parse a wire name; unknown names are a construction-time error, never
    /// a silent fallthrough to a default method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SolverError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

/// One solve request: system, strategy, and iteration parameters
#[derive(Debug, Clone)]
pub struct SolveRequest {
    /// Coefficient matrix, square, order 2..=10
    pub a: Array2<f64>,
    /// Right-hand side, length matching the matrix order
    pub b: Array1<f64>,
    /// Selected strategy
    pub method: Method,
    /// Convergence tolerance (iterative methods)
    pub tolerance: f64,
    /// Iteration budget (iterative methods)
    pub max_iterations: usize,
}

impl SolveRequest {
    /// Build a request with the default tolerance and iteration budget
    pub fn new(a: Array2<f64>, b: Array1<f64>, method: Method) -> Self {
        Self {
            a,
            b,
            method,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the request, returning the system order
    pub fn validate(&self) -> Result<usize, SolverError> {
        let (rows, cols) = self.a.dim();
        if rows != cols {
            return Err(SolverError::NotSquare { rows, cols });
        }
        if !(MIN_ORDER..=MAX_ORDER).contains(&rows) {
            return Err(SolverError::UnsupportedOrder { order: rows });
        }
        if self.b.len() != rows {
            return Err(SolverError::DimensionMismatch {
                order: rows,
                rhs_len: self.b.len(),
            });
        }
        if !(self.tolerance > 0.0) {
            return Err(SolverError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidParameter {
                name: "max_iterations",
                value: 0.0,
            });
        }
        Ok(rows)
    }
}

/// Uniform solve result
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solution vector
    pub x: Array1<f64>,
    /// Diagnostic trace: factor matrices, row operations, iteration logs
    pub trace: Vec<TraceEntry>,
    /// Whether the iteration converged (iterative methods only)
    pub converged: Option<bool>,
    /// Number of sweeps performed (iterative methods only)
    pub iterations: Option<usize>,
}

impl SolveResult {
    fn direct(x: Array1<f64>, trace: Vec<TraceEntry>) -> Self {
        Self {
            x,
            trace,
            converged: None,
            iterations: None,
        }
    }

    fn relaxation(solution: RelaxationSolution) -> Self {
        let trace = solution
            .history
            .into_iter()
            .map(|record| TraceEntry::Iteration {
                sweep: record.sweep,
                x: record.x,
                delta: record.delta,
            })
            .collect();
        Self {
            x: solution.x,
            trace,
            converged: Some(solution.converged),
            iterations: Some(solution.iterations),
        }
    }
}

/// Solve `A x = b` with the strategy selected in the request
pub fn solve(request: &SolveRequest) -> Result<SolveResult, SolverError> {
    let order = request.validate()?;
    log::debug!("solving {order}x{order} system with {}", request.method);

    match request.method {
        Method::Lu => {
            let factors = lu_factorize(&request.a)?;
            let x = factors.solve(&request.b)?;
            let trace = vec![
                TraceEntry::matrix("L", factors.l),
                TraceEntry::matrix("U", factors.u),
            ];
            Ok(SolveResult::direct(x, trace))
        }
        Method::Cholesky => {
            let factors = cholesky_factorize(&request.a)?;
            let x = factors.solve(&request.b)?;
            let trace = vec![TraceEntry::matrix("L", factors.l)];
            Ok(SolveResult::direct(x, trace))
        }
        Method::GaussElimination => {
            let solution = gauss_eliminate(&request.a, &request.b)?;
            Ok(SolveResult::direct(solution.x, solution.steps))
        }
        Method::GaussJordan => {
            let solution = gauss_jordan(&request.a, &request.b)?;
            Ok(SolveResult::direct(solution.x, solution.steps))
        }
        Method::Cramer => {
            let solution = cramer_solve(&request.a, &request.b)?;
            let mut trace = vec![TraceEntry::scalar("det(A)", solution.det)];
            for (i, det_i) in solution.column_dets.iter().enumerate() {
                trace.push(TraceEntry::scalar(format!("det(A_{i})"), *det_i));
            }
            Ok(SolveResult::direct(solution.x, trace))
        }
        Method::Jacobi => {
            reject_singular(&request.a, "Jacobi iteration")?;
            let config = relaxation_config(request);
            let solution = jacobi(&request.a, &request.b, &config)?;
            Ok(SolveResult::relaxation(solution))
        }
        Method::GaussSeidel => {
            reject_singular(&request.a, "Gauss-Seidel iteration")?;
            let config = relaxation_config(request);
            let solution = gauss_seidel(&request.a, &request.b, &config)?;
            Ok(SolveResult::relaxation(solution))
        }
    }
}

/// Rank-deficient systems are out of scope for the engine. The relaxation
/// methods cannot detect one from their own update rule (the diagonal may be
/// fine while A is singular, and Gauss-Seidel can settle on an arbitrary
/// member of the solution family), so the engine rejects it up front.
fn reject_singular(a: &Array2<f64>, op: &'static str) -> Result<(), SolverError> {
    if determinant(a).abs() <= PIVOT_TOLERANCE {
        return Err(SolverError::SingularMatrix {
            op,
            detail: "determinant of the coefficient matrix is negligible".to_string(),
        });
    }
    Ok(())
}

fn relaxation_config(request: &SolveRequest) -> RelaxationConfig {
    RelaxationConfig {
        tolerance: request.tolerance,
        max_iterations: request.max_iterations,
        print_interval: 0,
    }
}
