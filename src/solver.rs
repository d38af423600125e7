//! # QP Solver Capability
//!
//! $$
//! \text{QpProblem} \mapsto \mathbf{w}^\* \ \text{or failure}
//! $$
//!
//! The solver is an injected capability: anything satisfying [`QpSolver`] can
//! back frontier construction. [`ClarabelQpSolver`] is the real convex
//! backend; [`StubQpSolver`] is a deterministic fixture for tests. At a
//! degenerate optimum the returned weight vector is solver-determined, so
//! callers should only rely on realized risk/return there.

pub mod clarabel;
pub mod fixture;

use ndarray::Array1;
use thiserror::Error;

use crate::qp::QpProblem;

pub use self::clarabel::ClarabelQpSolver;
pub use self::fixture::StubQpSolver;

/// Recoverable per-target solve failures.
///
/// These are recorded as frontier gaps, never escalated, except that a run
/// in which every target fails with [`SolveFailure::Internal`] aborts as
/// [`crate::FrontierError::AllSolvesFailed`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolveFailure {
  /// No portfolio meets the target return.
  #[error("no feasible portfolio for this target")]
  Infeasible,
  /// The problem is unbounded below.
  #[error("problem is unbounded")]
  Unbounded,
  /// The solver exceeded its per-call time limit.
  #[error("solver exceeded its time limit")]
  TimedOut,
  /// The solver reported an unexpected failure.
  #[error("solver failure: {0}")]
  Internal(String),
}

/// Per-call solver configuration.
///
/// Progress output is a per-call flag rather than process-global solver
/// state, and each call carries its own time limit so a stalled degenerate
/// solve cannot block the rest of the grid.
#[derive(Clone, Debug)]
pub struct SolveOptions {
  /// Print solver progress output.
  pub verbose: bool,
  /// Maximum interior-point iterations.
  pub max_iter: u32,
  /// Time limit in seconds for one solve.
  pub time_limit: f64,
  /// Absolute duality-gap tolerance.
  pub tol_gap_abs: f64,
  /// Relative duality-gap tolerance.
  pub tol_gap_rel: f64,
}

impl Default for SolveOptions {
  fn default() -> Self {
    Self {
      verbose: false,
      max_iter: 200,
      time_limit: 10.0,
      tol_gap_abs: 1e-8,
      tol_gap_rel: 1e-8,
    }
  }
}

/// A convex QP solver usable from parallel frontier construction.
pub trait QpSolver: Sync {
  /// Solve one QP, returning the optimal weight vector or a failure.
  ///
  /// A returned vector satisfies the problem's constraints to the solver's
  /// numerical tolerance.
  fn solve(&self, problem: &QpProblem, options: &SolveOptions) -> Result<Array1<f64>, SolveFailure>;
}
