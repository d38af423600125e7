//! # Frontier Construction
//!
//! $$
//! \mathcal{F} = \{(r_k, \mathbf{w}_k^\*, \mu^\top\mathbf{w}_k^\*, \sqrt{\mathbf{w}_k^{*\top}\Sigma\mathbf{w}_k^\*})\}
//! $$
//!
//! Drives a target grid through formulation and solving, collecting feasible
//! solutions into an ordered frontier. Infeasible or timed-out targets are
//! recorded as gaps and never abort the run; only data-level errors and the
//! all-solves-internally-failed case do.

use ndarray::Array1;
use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;
use tracing::info;

use crate::error::FrontierError;
use crate::error::Result;
use crate::grid::TargetGrid;
use crate::qp::formulate;
use crate::solver::QpSolver;
use crate::solver::SolveFailure;
use crate::solver::SolveOptions;

/// One feasible point of the frontier. Immutable once produced.
#[derive(Clone, Debug)]
pub struct FrontierPoint {
  /// The target return this solve had to meet or exceed.
  pub target: f64,
  /// Optimal portfolio weights, in asset-column order.
  pub weights: Array1<f64>,
  /// Realized portfolio return, `μ·w`.
  pub expected_return: f64,
  /// Realized portfolio risk, `√(wᵀΣw)`.
  pub volatility: f64,
}

/// The ordered frontier: feasible points by ascending target, plus the
/// number of grid points skipped as gaps.
#[derive(Clone, Debug, Default)]
pub struct EfficientFrontier {
  points: Vec<FrontierPoint>,
  skipped: usize,
}

impl EfficientFrontier {
  /// Feasible points in ascending-target order.
  pub fn points(&self) -> &[FrontierPoint] {
    &self.points
  }

  /// Count of targets skipped as infeasible, timed out or failed.
  pub fn skipped(&self) -> usize {
    self.skipped
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Realized risks, parallel to [`EfficientFrontier::expected_returns`].
  pub fn risks(&self) -> Vec<f64> {
    self.points.iter().map(|p| p.volatility).collect()
  }

  /// Realized returns, parallel to [`EfficientFrontier::risks`].
  pub fn expected_returns(&self) -> Vec<f64> {
    self.points.iter().map(|p| p.expected_return).collect()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, FrontierPoint> {
    self.points.iter()
  }
}

/// Builds an [`EfficientFrontier`] from immutable `(μ, Σ)` and an injected
/// solver.
#[derive(Clone, Debug)]
pub struct FrontierBuilder<'a, S: QpSolver> {
  mean: Array1<f64>,
  cov: Array2<f64>,
  solver: &'a S,
  options: SolveOptions,
}

impl<'a, S: QpSolver> FrontierBuilder<'a, S> {
  /// Construct a builder, validating that `μ` and `Σ` dimensions agree.
  pub fn new(mean: Array1<f64>, cov: Array2<f64>, solver: &'a S) -> Result<Self> {
    let n = mean.len();
    if n == 0 {
      return Err(FrontierError::DimensionMismatch(
        "mean vector has no assets".to_string(),
      ));
    }
    if cov.nrows() != n || cov.ncols() != n {
      return Err(FrontierError::DimensionMismatch(format!(
        "mean vector has {} assets, covariance is {}x{}",
        n,
        cov.nrows(),
        cov.ncols()
      )));
    }

    Ok(Self {
      mean,
      cov,
      solver,
      options: SolveOptions::default(),
    })
  }

  /// Replace the per-call solve options.
  pub fn with_solve_options(mut self, options: SolveOptions) -> Self {
    self.options = options;
    self
  }

  /// Build the frontier serially, one target at a time.
  pub fn build(&self, grid: &TargetGrid) -> Result<EfficientFrontier> {
    let outcomes = grid
      .iter()
      .map(|target| (target, self.solve_target(target)))
      .collect();
    self.assemble(outcomes)
  }

  /// Build the frontier with the grid fanned out over the rayon pool.
  ///
  /// Solves share only the read-only `(μ, Σ)`; results are merged back in
  /// target order.
  pub fn build_par(&self, grid: &TargetGrid) -> Result<EfficientFrontier> {
    let targets: Vec<f64> = grid.iter().collect();
    let outcomes = targets
      .into_par_iter()
      .map(|target| (target, self.solve_target(target)))
      .collect();
    self.assemble(outcomes)
  }

  fn solve_target(&self, target: f64) -> std::result::Result<FrontierPoint, SolveFailure> {
    let problem = formulate(&self.mean, &self.cov, target);
    let weights = self.solver.solve(&problem, &self.options)?;

    if weights.len() != self.mean.len() {
      return Err(SolveFailure::Internal(format!(
        "solver returned {} weights for {} assets",
        weights.len(),
        self.mean.len()
      )));
    }

    Ok(self.point(target, weights))
  }

  /// The single place realized return and risk are computed; every
  /// downstream view derives from the point built here.
  fn point(&self, target: f64, weights: Array1<f64>) -> FrontierPoint {
    let expected_return = self.mean.dot(&weights);
    let volatility = weights.dot(&self.cov.dot(&weights)).max(0.0).sqrt();

    FrontierPoint {
      target,
      weights,
      expected_return,
      volatility,
    }
  }

  fn assemble(
    &self,
    outcomes: Vec<(f64, std::result::Result<FrontierPoint, SolveFailure>)>,
  ) -> Result<EfficientFrontier> {
    let attempted = outcomes.len();
    let mut points = Vec::with_capacity(attempted);
    let mut skipped = 0;
    let mut internal = 0;
    let mut last = String::new();

    for (target, outcome) in outcomes {
      match outcome {
        Ok(point) => points.push(point),
        Err(failure) => {
          skipped += 1;
          if let SolveFailure::Internal(_) = &failure {
            internal += 1;
            last = failure.to_string();
          }
          debug!(target_return = target, failure = %failure, "skipping target");
        }
      }
    }

    if points.is_empty() && attempted > 0 && internal == attempted {
      return Err(FrontierError::AllSolvesFailed { attempted, last });
    }

    info!(points = points.len(), skipped, "frontier assembled");
    Ok(EfficientFrontier { points, skipped })
  }
}
