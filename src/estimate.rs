//! # Moment Estimation
//!
//! $$
//! \hat\mu_j = \frac{1}{T}\sum_t r_{tj}, \qquad
//! \hat\Sigma_{jk} = \frac{1}{T-1}\sum_t (r_{tj}-\hat\mu_j)(r_{tk}-\hat\mu_k)
//! $$
//!
//! Mean vector and sample covariance matrix from a return matrix. Rows with
//! non-finite cells (period boundaries, gaps) are dropped before estimation.

use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;

use crate::error::FrontierError;
use crate::error::Result;
use crate::returns::ReturnMatrix;

/// Estimate the per-asset mean vector and sample covariance matrix.
///
/// The covariance uses the T−1 denominator. Fails when fewer than N+1 usable
/// periods remain after dropping non-finite rows.
pub fn mean_and_covariance(returns: &ReturnMatrix) -> Result<(Array1<f64>, Array2<f64>)> {
  let n = returns.n_assets();
  let data = returns.data();

  let usable: Vec<_> = data
    .axis_iter(Axis(0))
    .filter(|row| row.iter().all(|v| v.is_finite()))
    .collect();
  let t = usable.len();

  let min = n + 1;
  if t < min {
    return Err(FrontierError::InsufficientData {
      usable: t,
      assets: n,
      min,
    });
  }

  let mut mean = Array1::<f64>::zeros(n);
  for row in &usable {
    mean += row;
  }
  mean /= t as f64;

  let mut cov = Array2::<f64>::zeros((n, n));
  for row in &usable {
    let centered = row.to_owned() - &mean;
    for j in 0..n {
      for k in j..n {
        cov[[j, k]] += centered[j] * centered[k];
      }
    }
  }
  cov /= (t - 1) as f64;
  for j in 0..n {
    for k in 0..j {
      cov[[j, k]] = cov[[k, j]];
    }
  }

  Ok((mean, cov))
}
