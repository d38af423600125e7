//! # Return Matrix
//!
//! $$
//! r_t = \frac{P_t - P_{t-1}}{P_{t-1}} \cdot 100
//! $$
//!
//! Construction of the T×N percentage-return matrix and its asset-order
//! contract. The column order fixes the asset order for every downstream
//! consumer: weight vectors, frontier points and formatted records all index
//! assets positionally against this matrix.

use ndarray::Array2;

use crate::error::FrontierError;
use crate::error::Result;

/// Percentage-return observations for N assets over T periods.
///
/// Cells may be non-finite at period boundaries (the first differenced
/// period of a close-price series); estimation drops such rows, the matrix
/// itself keeps them.
#[derive(Clone, Debug)]
pub struct ReturnMatrix {
  assets: Vec<String>,
  data: Array2<f64>,
}

impl ReturnMatrix {
  /// Wrap a T×N return matrix with its asset labels.
  pub fn new(assets: Vec<String>, data: Array2<f64>) -> Result<Self> {
    if assets.len() != data.ncols() {
      return Err(FrontierError::DimensionMismatch(format!(
        "{} asset labels for a matrix with {} columns",
        assets.len(),
        data.ncols()
      )));
    }

    Ok(Self { assets, data })
  }

  /// Build a return matrix from one return series per asset.
  ///
  /// Series of unequal length are aligned to their common tail.
  pub fn from_series(assets: Vec<String>, series: &[Vec<f64>]) -> Result<Self> {
    if assets.len() != series.len() {
      return Err(FrontierError::DimensionMismatch(format!(
        "{} asset labels for {} return series",
        assets.len(),
        series.len()
      )));
    }

    let aligned = align_series(series);
    let t = aligned.first().map(|s| s.len()).unwrap_or(0);
    let n = aligned.len();

    let mut data = Array2::zeros((t, n));
    for (j, col) in aligned.iter().enumerate() {
      for (i, &r) in col.iter().enumerate() {
        data[[i, j]] = r;
      }
    }

    Self::new(assets, data)
  }

  /// Build a return matrix from one close-price series per asset.
  ///
  /// Returns are period-over-period percentage changes scaled by 100. The
  /// first row is the undifferenced boundary period and is left non-finite;
  /// estimation is responsible for dropping it.
  pub fn from_closes(assets: Vec<String>, closes: &[Vec<f64>]) -> Result<Self> {
    if assets.len() != closes.len() {
      return Err(FrontierError::DimensionMismatch(format!(
        "{} asset labels for {} close series",
        assets.len(),
        closes.len()
      )));
    }

    let aligned = align_series(closes);
    let t = aligned.first().map(|s| s.len()).unwrap_or(0);
    let n = aligned.len();

    let mut data = Array2::from_elem((t, n), f64::NAN);
    for (j, col) in aligned.iter().enumerate() {
      for i in 1..col.len() {
        if col[i - 1] > 0.0 && col[i] > 0.0 {
          data[[i, j]] = (col[i] - col[i - 1]) / col[i - 1] * 100.0;
        }
      }
    }

    Self::new(assets, data)
  }

  /// Asset labels in column order.
  pub fn assets(&self) -> &[String] {
    &self.assets
  }

  /// The raw T×N return matrix.
  pub fn data(&self) -> &Array2<f64> {
    &self.data
  }

  pub fn n_assets(&self) -> usize {
    self.data.ncols()
  }

  pub fn n_periods(&self) -> usize {
    self.data.nrows()
  }
}

/// Convert close prices to a percentage-return series.
pub fn percent_returns_series(closes: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(closes.len().saturating_sub(1));
  for i in 1..closes.len() {
    if closes[i - 1] > 0.0 && closes[i] > 0.0 {
      out.push((closes[i] - closes[i - 1]) / closes[i - 1] * 100.0);
    }
  }
  out
}

/// Align multiple series to common tail length.
pub fn align_series(all_series: &[Vec<f64>]) -> Vec<Vec<f64>> {
  let min_len = all_series.iter().map(|s| s.len()).min().unwrap_or(0);
  all_series
    .iter()
    .map(|s| s[s.len().saturating_sub(min_len)..].to_vec())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_closes_leaves_boundary_row_non_finite() {
    let closes = vec![vec![100.0, 110.0, 99.0], vec![50.0, 50.0, 55.0]];
    let rm = ReturnMatrix::from_closes(vec!["BTC".to_string(), "LTC".to_string()], &closes).unwrap();

    assert_eq!(rm.n_periods(), 3);
    assert_eq!(rm.n_assets(), 2);
    assert!(rm.data()[[0, 0]].is_nan());
    assert!(rm.data()[[0, 1]].is_nan());
    assert!((rm.data()[[1, 0]] - 10.0).abs() < 1e-12);
    assert!((rm.data()[[2, 0]] + 10.0).abs() < 1e-12);
    assert!((rm.data()[[2, 1]] - 10.0).abs() < 1e-12);
  }

  #[test]
  fn from_series_aligns_to_common_tail() {
    let series = vec![vec![1.0, 2.0, 3.0, 4.0], vec![7.0, 8.0]];
    let rm = ReturnMatrix::from_series(vec!["A".to_string(), "B".to_string()], &series).unwrap();

    assert_eq!(rm.n_periods(), 2);
    assert!((rm.data()[[0, 0]] - 3.0).abs() < 1e-12);
    assert!((rm.data()[[0, 1]] - 7.0).abs() < 1e-12);
  }

  #[test]
  fn label_count_must_match_columns() {
    let data = Array2::zeros((5, 3));
    let err = ReturnMatrix::new(vec!["A".to_string()], data);
    assert!(matches!(err, Err(FrontierError::DimensionMismatch(_))));
  }
}
