//! # QP Formulation
//!
//! $$
//! \min_{\mathbf{w}} \tfrac{1}{2}\mathbf{w}^\top P \mathbf{w} + q^\top \mathbf{w}
//! \quad \text{s.t.} \quad G\mathbf{w} \le h,\ A\mathbf{w} = b
//! $$
//!
//! Builds the matrices of one convex QP per target return. The return
//! constraint is an inequality: the portfolio may exceed the target, which
//! keeps every target feasible whenever any portfolio reaches that return.

use ndarray::Array1;
use ndarray::Array2;

/// One convex quadratic program in standard inequality/equality form.
#[derive(Clone, Debug)]
pub struct QpProblem {
  /// Quadratic objective term, the covariance matrix.
  pub p: Array2<f64>,
  /// Linear objective term, zero for pure variance minimization.
  pub q: Array1<f64>,
  /// Inequality constraint matrix of `G w <= h`.
  pub g: Array2<f64>,
  /// Inequality right-hand side.
  pub h: Array1<f64>,
  /// Equality constraint matrix of `A w = b`.
  pub a: Array2<f64>,
  /// Equality right-hand side.
  pub b: Array1<f64>,
}

impl QpProblem {
  /// Number of decision variables (assets).
  pub fn n(&self) -> usize {
    self.p.ncols()
  }
}

/// Formulate the minimum-variance QP for one target return.
///
/// Encodes `min ½ wᵀΣw` subject to `μ·w ≥ r`, `w ≥ 0` and `Σᵢ wᵢ = 1`.
/// The inequalities are stacked as `G = [-μᵀ; -I]`, `h = [-r; 0]`.
/// Deterministic and stateless given `(mean, cov, target)`.
pub fn formulate(mean: &Array1<f64>, cov: &Array2<f64>, target: f64) -> QpProblem {
  let n = mean.len();

  let mut g = Array2::zeros((n + 1, n));
  for j in 0..n {
    g[[0, j]] = -mean[j];
    g[[j + 1, j]] = -1.0;
  }

  let mut h = Array1::zeros(n + 1);
  h[0] = -target;

  QpProblem {
    p: cov.clone(),
    q: Array1::zeros(n),
    g,
    h,
    a: Array2::ones((1, n)),
    b: Array1::ones(1),
  }
}
