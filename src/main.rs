use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;
use rand_distr::Normal;

use frontier_rs::estimate::mean_and_covariance;
use frontier_rs::format::records_to_json;
use frontier_rs::format::run_id;
use frontier_rs::format::weight_records;
use frontier_rs::frontier::FrontierBuilder;
use frontier_rs::grid::TargetGrid;
use frontier_rs::returns::ReturnMatrix;
use frontier_rs::sampling::random_portfolio_cloud;
use frontier_rs::solver::ClarabelQpSolver;
use frontier_rs::visualization::frontier_plot;

/// Synthetic close series standing in for the exchange candle feed.
fn synthetic_closes(rng: &mut StdRng, start: f64, drift: f64, vol: f64, n: usize) -> Vec<f64> {
  let normal = Normal::new(drift, vol).unwrap();
  let mut closes = Vec::with_capacity(n);
  let mut price = start;
  closes.push(price);
  for _ in 1..n {
    price *= 1.0 + normal.sample(rng) / 100.0;
    closes.push(price);
  }
  closes
}

fn main() -> Result<()> {
  let assets = vec!["BTC".to_string(), "LTC".to_string(), "XRP".to_string()];

  let mut rng = StdRng::seed_from_u64(2020);
  let closes = vec![
    synthetic_closes(&mut rng, 9500.0, 0.06, 1.2, 360),
    synthetic_closes(&mut rng, 58.0, 0.09, 1.6, 360),
    synthetic_closes(&mut rng, 0.27, 0.03, 0.9, 360),
  ];

  let returns = ReturnMatrix::from_closes(assets, &closes)?;
  let (mean, cov) = mean_and_covariance(&returns)?;
  println!("Estimated per-period mean returns (%): {:?}", mean.to_vec());

  let r_lo = mean.iter().cloned().fold(f64::INFINITY, f64::min);
  let r_hi = mean.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
  let grid = TargetGrid::from_range(r_lo, r_hi, 100);

  let solver = ClarabelQpSolver::new();
  let builder = FrontierBuilder::new(mean.clone(), cov.clone(), &solver)?;
  let frontier = builder.build_par(&grid)?;
  println!(
    "Frontier: {} points, {} infeasible targets skipped",
    frontier.len(),
    frontier.skipped()
  );

  let records = weight_records(&frontier, returns.assets())?;
  let id = run_id(returns.assets());
  let json = records_to_json(&records)?;
  std::fs::write(format!("{id}.json"), &json)?;
  println!("Optimal weights for relevant returns written to {id}.json");

  let cloud = random_portfolio_cloud(&mean, &cov, 1000, &mut rng);
  let plot = frontier_plot(&frontier, Some(&cloud));
  plot.write_html(format!("{id}.html"));
  println!("Frontier chart written to {id}.html");

  Ok(())
}
