//! # Fixture Backend
//!
//! $$
//! \text{call}_k \mapsto \text{scripted outcome}_k
//! $$
//!
//! A deterministic [`QpSolver`] for exercising frontier construction and
//! formatting without a numerical backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use ndarray::Array1;

use super::QpSolver;
use super::SolveFailure;
use super::SolveOptions;
use crate::qp::QpProblem;

/// A scripted solver: replays a fixed weight vector or a per-call outcome
/// sequence, in call order.
#[derive(Debug, Default)]
pub struct StubQpSolver {
  fixed: Option<Vec<f64>>,
  script: Mutex<VecDeque<Result<Vec<f64>, SolveFailure>>>,
}

impl StubQpSolver {
  /// Return the same weight vector on every call.
  pub fn always(weights: Vec<f64>) -> Self {
    Self {
      fixed: Some(weights),
      script: Mutex::new(VecDeque::new()),
    }
  }

  /// Replay `outcomes` one call at a time; further calls report infeasible.
  pub fn scripted(outcomes: Vec<Result<Vec<f64>, SolveFailure>>) -> Self {
    Self {
      fixed: None,
      script: Mutex::new(outcomes.into()),
    }
  }
}

impl QpSolver for StubQpSolver {
  fn solve(&self, problem: &QpProblem, _options: &SolveOptions) -> Result<Array1<f64>, SolveFailure> {
    let weights = if let Some(w) = &self.fixed {
      w.clone()
    } else {
      self
        .script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(Err(SolveFailure::Infeasible))?
    };

    if weights.len() != problem.n() {
      return Err(SolveFailure::Internal(format!(
        "stub weight vector has length {}, problem has {} assets",
        weights.len(),
        problem.n()
      )));
    }

    Ok(Array1::from(weights))
  }
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::*;
  use crate::qp::formulate;

  #[test]
  fn script_replays_in_call_order_then_reports_infeasible() {
    let solver = StubQpSolver::scripted(vec![
      Ok(vec![1.0, 0.0]),
      Err(SolveFailure::TimedOut),
      Ok(vec![0.0, 1.0]),
    ]);
    let problem = formulate(&array![0.1, 0.2], &array![[0.04, 0.0], [0.0, 0.04]], 0.1);
    let options = SolveOptions::default();

    assert_eq!(solver.solve(&problem, &options).unwrap(), array![1.0, 0.0]);
    assert_eq!(
      solver.solve(&problem, &options).unwrap_err(),
      SolveFailure::TimedOut
    );
    assert_eq!(solver.solve(&problem, &options).unwrap(), array![0.0, 1.0]);
    assert_eq!(
      solver.solve(&problem, &options).unwrap_err(),
      SolveFailure::Infeasible
    );
  }

  #[test]
  fn wrong_length_script_is_an_internal_failure() {
    let solver = StubQpSolver::always(vec![1.0]);
    let problem = formulate(&array![0.1, 0.2], &array![[0.04, 0.0], [0.0, 0.04]], 0.1);

    assert!(matches!(
      solver.solve(&problem, &SolveOptions::default()),
      Err(SolveFailure::Internal(_))
    ));
  }
}
