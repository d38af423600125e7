//! # Weight Records
//!
//! $$
//! \mathbf{w} \mapsto \{\text{asset}_j : w_j\}
//! $$
//!
//! Maps positional weight vectors onto asset identifiers using the
//! asset-order contract of the return matrix. The raw numeric record is the
//! single source: the fixed-precision display view is derived from it and
//! never recomputed, so persisted output cannot drift from the numeric
//! result.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::FrontierError;
use crate::error::Result;
use crate::frontier::EfficientFrontier;
use crate::frontier::FrontierPoint;

/// Full-precision view of one frontier point, keyed by asset.
#[derive(Clone, Debug)]
pub struct WeightRecord {
  pub target: f64,
  pub expected_return: f64,
  pub volatility: f64,
  /// `(asset, weight)` pairs in asset-column order.
  pub weights: Vec<(String, f64)>,
}

/// Fixed-precision view for display and persistence: targets to 4 decimal
/// places, weights to 3. Serializes to
/// `{ "Target": "...", "Weights": { "<asset>": "..." } }` with the weight
/// keys in asset-column order.
#[derive(Clone, Debug, Serialize)]
pub struct DisplayRecord {
  #[serde(rename = "Target")]
  pub target: String,
  #[serde(rename = "Weights")]
  pub weights: Map<String, Value>,
}

impl WeightRecord {
  /// Pair one frontier point's weights with their asset labels.
  pub fn from_point(point: &FrontierPoint, assets: &[String]) -> Result<Self> {
    if point.weights.len() != assets.len() {
      return Err(FrontierError::DimensionMismatch(format!(
        "{} weights for {} asset labels",
        point.weights.len(),
        assets.len()
      )));
    }

    Ok(Self {
      target: point.target,
      expected_return: point.expected_return,
      volatility: point.volatility,
      weights: assets
        .iter()
        .cloned()
        .zip(point.weights.iter().copied())
        .collect(),
    })
  }

  /// Derive the fixed-precision display view from this record.
  pub fn display(&self) -> DisplayRecord {
    let mut weights = Map::new();
    for (asset, weight) in &self.weights {
      weights.insert(asset.clone(), Value::String(format!("{weight:.3}")));
    }

    DisplayRecord {
      target: format!("{:.4}", self.target),
      weights,
    }
  }
}

/// Asset-keyed records for every point of a frontier, in frontier order.
pub fn weight_records(
  frontier: &EfficientFrontier,
  assets: &[String],
) -> Result<Vec<WeightRecord>> {
  frontier
    .points()
    .iter()
    .map(|point| WeightRecord::from_point(point, assets))
    .collect()
}

/// Serialize records through their display views as a JSON array.
pub fn records_to_json(records: &[WeightRecord]) -> serde_json::Result<String> {
  let displays: Vec<DisplayRecord> = records.iter().map(WeightRecord::display).collect();
  serde_json::to_string_pretty(&displays)
}

/// Run identifier for persistence callers: asset symbols joined with `_`.
pub fn run_id(assets: &[String]) -> String {
  assets.join("_")
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::*;

  fn point() -> FrontierPoint {
    FrontierPoint {
      target: 0.05128,
      weights: array![0.33333, 0.66667],
      expected_return: 0.0515,
      volatility: 0.21,
    }
  }

  fn labels() -> Vec<String> {
    vec!["BTC".to_string(), "LTC".to_string()]
  }

  #[test]
  fn display_round_trips_within_stated_precision() {
    let record = WeightRecord::from_point(&point(), &labels()).unwrap();
    let display = record.display();

    let target: f64 = display.target.parse().unwrap();
    assert!((target - record.target).abs() <= 5e-5);

    for (asset, raw) in &record.weights {
      let shown: f64 = display.weights[asset].as_str().unwrap().parse().unwrap();
      assert!((shown - raw).abs() <= 5e-4);
    }
  }

  #[test]
  fn weight_keys_follow_asset_order() {
    let record = WeightRecord::from_point(&point(), &labels()).unwrap();
    let display = record.display();

    let keys: Vec<&String> = display.weights.keys().collect();
    assert_eq!(keys, vec!["BTC", "LTC"]);

    let json = serde_json::to_string(&display).unwrap();
    assert!(json.find("BTC").unwrap() < json.find("LTC").unwrap());
  }

  #[test]
  fn serialized_shape_matches_persistence_contract() {
    let record = WeightRecord::from_point(&point(), &labels()).unwrap();
    let json = records_to_json(&[record]).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["Target"], "0.0513");
    assert_eq!(parsed[0]["Weights"]["BTC"], "0.333");
    assert_eq!(parsed[0]["Weights"]["LTC"], "0.667");
  }

  #[test]
  fn label_count_must_match_weights() {
    let err = WeightRecord::from_point(&point(), &["BTC".to_string()]);
    assert!(matches!(err, Err(FrontierError::DimensionMismatch(_))));
  }

  #[test]
  fn run_id_joins_symbols() {
    assert_eq!(run_id(&labels()), "BTC_LTC");
  }
}
