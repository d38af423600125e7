//! # Errors
//!
//! $$
//! T_{\text{usable}} \ge N + 1
//! $$
//!
//! Fatal error taxonomy for frontier construction. Per-target solve failures
//! are recoverable and live in [`crate::solver::SolveFailure`].

use thiserror::Error;

/// Fatal errors that abort frontier construction with no partial result.
#[derive(Debug, Error)]
pub enum FrontierError {
  /// Fewer usable return periods than assets + 1; the sample covariance
  /// would be singular or unstable.
  #[error("insufficient data: {usable} usable periods for {assets} assets, need at least {min}")]
  InsufficientData {
    usable: usize,
    assets: usize,
    min: usize,
  },

  /// Mean, covariance and asset-label dimensions disagree.
  #[error("dimension mismatch: {0}")]
  DimensionMismatch(String),

  /// The injected solver reported an internal failure for every grid point.
  /// Distinct from an empty frontier built over an all-infeasible grid.
  #[error("solver failed on all {attempted} targets, last failure: {last}")]
  AllSolvesFailed { attempted: usize, last: String },
}

/// Result type for frontier operations.
pub type Result<T> = std::result::Result<T, FrontierError>;
