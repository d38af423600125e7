//! # Mean-Variance Efficient Frontier
//!
//! $$
//! \min_{\mathbf{w}} \tfrac{1}{2}\mathbf{w}^\top \Sigma \mathbf{w}
//! \quad \text{s.t.} \quad \mu^\top \mathbf{w} \ge r,\ \mathbf{w} \ge 0,\ \mathbf{1}^\top \mathbf{w} = 1
//! $$
//!
//! `frontier-rs` turns historical return series into a mean-variance efficient
//! frontier: for a grid of target returns it solves the minimum-variance
//! long-only fully-invested portfolio meeting each target, and collects the
//! feasible solutions into an ordered frontier.
//!
//! ## Modules
//!
//! | Module            | Description                                                                 |
//! |-------------------|-----------------------------------------------------------------------------|
//! | [`returns`]       | Return-matrix construction from return or close-price series.               |
//! | [`estimate`]      | Mean vector and sample covariance estimation.                               |
//! | [`grid`]          | Ascending target-return grids.                                              |
//! | [`qp`]            | Quadratic-program formulation for one target.                               |
//! | [`solver`]        | The pluggable QP solver capability, with Clarabel and fixture backends.     |
//! | [`frontier`]      | Frontier construction over a target grid, serial or parallel.               |
//! | [`format`]        | Asset-keyed weight records with raw and display views.                      |
//! | [`sampling`]      | Random portfolio clouds for frontier comparison plots.                      |
//! | [`visualization`] | Plotly charts of the frontier against a random cloud.                       |
//! | [`error`]         | Fatal error taxonomy.                                                       |
//!
//! ## Parallelism
//!
//! [`frontier::FrontierBuilder::build_par`] fans the grid out over `rayon`;
//! the individual solves share only the read-only mean vector and covariance
//! matrix, and results are merged back in target order.

pub mod error;
pub mod estimate;
pub mod format;
pub mod frontier;
pub mod grid;
pub mod qp;
pub mod returns;
pub mod sampling;
pub mod solver;
pub mod visualization;

pub use error::FrontierError;
pub use error::Result;
pub use estimate::mean_and_covariance;
pub use format::DisplayRecord;
pub use format::WeightRecord;
pub use format::records_to_json;
pub use format::run_id;
pub use format::weight_records;
pub use frontier::EfficientFrontier;
pub use frontier::FrontierBuilder;
pub use frontier::FrontierPoint;
pub use grid::TargetGrid;
pub use qp::QpProblem;
pub use qp::formulate;
pub use returns::ReturnMatrix;
pub use sampling::PortfolioCloud;
pub use sampling::random_weights;
pub use solver::ClarabelQpSolver;
pub use solver::QpSolver;
pub use solver::SolveFailure;
pub use solver::SolveOptions;
pub use solver::StubQpSolver;
