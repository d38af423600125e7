//! # Clarabel Backend
//!
//! $$
//! \min \tfrac{1}{2}x^\top P x + q^\top x \quad \text{s.t.} \quad Ax + s = b,\ s \in \mathcal{K}
//! $$
//!
//! Maps a [`QpProblem`] onto Clarabel's conic form: the equality rows land in
//! the zero cone, the inequality rows in the nonnegative cone.

use clarabel::algebra::CscMatrix;
use clarabel::solver::DefaultSettingsBuilder;
use clarabel::solver::DefaultSolver;
use clarabel::solver::IPSolver;
use clarabel::solver::SolverStatus;
use clarabel::solver::SupportedConeT;
use ndarray::Array1;
use ndarray::Array2;

use super::QpSolver;
use super::SolveFailure;
use super::SolveOptions;
use crate::qp::QpProblem;

/// The real convex-QP backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClarabelQpSolver;

impl ClarabelQpSolver {
  pub fn new() -> Self {
    Self
  }
}

impl QpSolver for ClarabelQpSolver {
  fn solve(&self, problem: &QpProblem, options: &SolveOptions) -> Result<Array1<f64>, SolveFailure> {
    let n = problem.n();
    let n_eq = problem.a.nrows();
    let n_ineq = problem.g.nrows();

    let p = upper_triangle_csc(&problem.p);
    let a = stacked_csc(&problem.a, &problem.g);

    let q = problem.q.to_vec();
    let mut b = problem.b.to_vec();
    b.extend(problem.h.iter());

    let mut cones = Vec::new();
    if n_eq > 0 {
      cones.push(SupportedConeT::ZeroConeT(n_eq));
    }
    if n_ineq > 0 {
      cones.push(SupportedConeT::NonnegativeConeT(n_ineq));
    }

    let settings = DefaultSettingsBuilder::default()
      .verbose(options.verbose)
      .max_iter(options.max_iter)
      .time_limit(options.time_limit)
      .tol_gap_abs(options.tol_gap_abs)
      .tol_gap_rel(options.tol_gap_rel)
      .build()
      .map_err(|e| SolveFailure::Internal(format!("invalid solver settings: {e}")))?;

    let mut solver = DefaultSolver::new(&p, &q, &a, &b, &cones, settings);
    solver.solve();

    match solver.solution.status {
      SolverStatus::Solved => Ok(Array1::from(solver.solution.x[..n].to_vec())),
      SolverStatus::PrimalInfeasible => Err(SolveFailure::Infeasible),
      SolverStatus::DualInfeasible => Err(SolveFailure::Unbounded),
      SolverStatus::MaxTime => Err(SolveFailure::TimedOut),
      other => Err(SolveFailure::Internal(format!(
        "solver stopped with status {other:?}"
      ))),
    }
  }
}

/// Convert the upper triangle of a symmetric dense matrix to CSC.
///
/// Clarabel expects the quadratic term in upper-triangular form.
fn upper_triangle_csc(m: &Array2<f64>) -> CscMatrix<f64> {
  let n = m.ncols();
  let mut col_ptr = Vec::with_capacity(n + 1);
  let mut row_idx = Vec::new();
  let mut values = Vec::new();

  col_ptr.push(0);
  for j in 0..n {
    for i in 0..=j {
      if m[[i, j]] != 0.0 {
        row_idx.push(i);
        values.push(m[[i, j]]);
      }
    }
    col_ptr.push(row_idx.len());
  }

  CscMatrix::new(n, n, col_ptr, row_idx, values)
}

/// Stack two dense constraint blocks row-wise and convert to CSC.
fn stacked_csc(top: &Array2<f64>, bottom: &Array2<f64>) -> CscMatrix<f64> {
  let n = top.ncols();
  let rows = top.nrows() + bottom.nrows();
  let mut col_ptr = Vec::with_capacity(n + 1);
  let mut row_idx = Vec::new();
  let mut values = Vec::new();

  col_ptr.push(0);
  for j in 0..n {
    for i in 0..top.nrows() {
      if top[[i, j]] != 0.0 {
        row_idx.push(i);
        values.push(top[[i, j]]);
      }
    }
    for i in 0..bottom.nrows() {
      if bottom[[i, j]] != 0.0 {
        row_idx.push(top.nrows() + i);
        values.push(bottom[[i, j]]);
      }
    }
    col_ptr.push(row_idx.len());
  }

  CscMatrix::new(rows, n, col_ptr, row_idx, values)
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::*;
  use crate::qp::formulate;

  #[test]
  fn binding_target_splits_uncorrelated_equal_variances() {
    let mean = array![0.1, 0.2];
    let cov = array![[0.04, 0.0], [0.0, 0.04]];
    let problem = formulate(&mean, &cov, 0.15);

    let w = ClarabelQpSolver::new()
      .solve(&problem, &SolveOptions::default())
      .unwrap();

    assert!((w[0] - 0.5).abs() < 1e-6);
    assert!((w[1] - 0.5).abs() < 1e-6);
  }

  #[test]
  fn slack_target_recovers_inverse_variance_weights() {
    let mean = array![0.1, 0.2];
    let cov = array![[0.01, 0.0], [0.0, 0.04]];
    let problem = formulate(&mean, &cov, 0.05);

    let w = ClarabelQpSolver::new()
      .solve(&problem, &SolveOptions::default())
      .unwrap();

    assert!((w[0] - 0.8).abs() < 1e-6);
    assert!((w[1] - 0.2).abs() < 1e-6);
  }

  #[test]
  fn unreachable_target_is_infeasible() {
    let mean = array![0.1, 0.2];
    let cov = array![[0.04, 0.0], [0.0, 0.04]];
    let problem = formulate(&mean, &cov, 0.3);

    let failure = ClarabelQpSolver::new()
      .solve(&problem, &SolveOptions::default())
      .unwrap_err();

    assert_eq!(failure, SolveFailure::Infeasible);
  }

  #[test]
  fn upper_triangle_drops_lower_entries() {
    let m = array![[4.0, 1.0], [1.0, 9.0]];
    let csc = upper_triangle_csc(&m);

    assert_eq!(csc.colptr, vec![0, 1, 3]);
    assert_eq!(csc.rowval, vec![0, 0, 1]);
    assert_eq!(csc.nzval, vec![4.0, 1.0, 9.0]);
  }
}
