//! # Random Portfolio Cloud
//!
//! $$
//! \mathbf{w} \sim \frac{\mathbf{u}}{\mathbf{1}^\top\mathbf{u}}, \quad \mathbf{u} \sim \mathcal{U}(0,1)^N
//! $$
//!
//! Uniform random simplex portfolios and their risk/return statistics, used
//! as the comparison cloud behind frontier plots. Decorative only: nothing
//! here feeds the optimization.

use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Uniform;

/// Risk/return pairs of randomly weighted portfolios, as parallel arrays.
#[derive(Clone, Debug, Default)]
pub struct PortfolioCloud {
  pub risks: Vec<f64>,
  pub returns: Vec<f64>,
}

impl PortfolioCloud {
  pub fn len(&self) -> usize {
    self.risks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.risks.is_empty()
  }
}

/// Draw one random long-only fully-invested weight vector.
pub fn random_weights<R: Rng>(n: usize, rng: &mut R) -> Array1<f64> {
  if n == 0 {
    return Array1::zeros(0);
  }

  let raw = Array1::random_using(n, Uniform::new(0.0, 1.0), rng);
  let total = raw.sum();
  if total < 1e-15 {
    Array1::from_elem(n, 1.0 / n as f64)
  } else {
    raw / total
  }
}

/// Sample `count` random portfolios and record their realized statistics.
pub fn random_portfolio_cloud<R: Rng>(
  mean: &Array1<f64>,
  cov: &Array2<f64>,
  count: usize,
  rng: &mut R,
) -> PortfolioCloud {
  let mut cloud = PortfolioCloud {
    risks: Vec::with_capacity(count),
    returns: Vec::with_capacity(count),
  };

  for _ in 0..count {
    let w = random_weights(mean.len(), rng);
    cloud.returns.push(mean.dot(&w));
    cloud.risks.push(w.dot(&cov.dot(&w)).max(0.0).sqrt());
  }

  cloud
}

#[cfg(test)]
mod tests {
  use ndarray::array;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  #[test]
  fn random_weights_lie_on_the_simplex() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
      let w = random_weights(5, &mut rng);
      assert!((w.sum() - 1.0).abs() < 1e-12);
      assert!(w.iter().all(|&v| v >= 0.0));
    }
  }

  #[test]
  fn cloud_has_one_pair_per_portfolio() {
    let mut rng = StdRng::seed_from_u64(2);
    let mean = array![0.08, 0.12];
    let cov = array![[0.04, 0.01], [0.01, 0.09]];

    let cloud = random_portfolio_cloud(&mean, &cov, 250, &mut rng);
    assert_eq!(cloud.len(), 250);
    assert_eq!(cloud.returns.len(), 250);
    assert!(cloud.risks.iter().all(|&r| r > 0.0));
  }
}
