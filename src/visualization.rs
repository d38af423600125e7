//! # Visualization
//!
//! $$
//! (\sigma_k, \mu_k) \mapsto \text{risk/return scatter}
//! $$
//!
//! Plotly chart of the efficient frontier, optionally over a random
//! portfolio cloud. Collaborator-facing: the optimization core only hands
//! over the parallel risk/return arrays consumed here.

use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;

use crate::frontier::EfficientFrontier;
use crate::sampling::PortfolioCloud;

/// Build a risk/return scatter of the frontier, with the random cloud as a
/// marker backdrop when supplied.
pub fn frontier_plot(frontier: &EfficientFrontier, cloud: Option<&PortfolioCloud>) -> Plot {
  let mut plot = Plot::new();

  if let Some(cloud) = cloud {
    let backdrop = Scatter::new(cloud.risks.clone(), cloud.returns.clone())
      .mode(Mode::Markers)
      .name(format!("{} random portfolios", cloud.len()).as_str());
    plot.add_trace(backdrop);
  }

  let line = Scatter::new(frontier.risks(), frontier.expected_returns())
    .mode(Mode::LinesMarkers)
    .name("Efficient frontier");
  plot.add_trace(line);

  plot.set_layout(
    Layout::new()
      .title("Mean return vs standard deviation")
      .x_axis(Axis::new().title("std"))
      .y_axis(Axis::new().title("mean")),
  );

  plot
}
