//! Monte Carlo portfolio forecasting library
//!
//! This crate turns historical closing prices for a weighted multi-asset
//! portfolio into a probabilistic forecast of future value. It supports:
//! - Daily fractional returns from closing-price history
//! - A joint return model (mean vector + covariance matrix) fit on that
//!   history, sampled through its Cholesky factor so cross-asset
//!   correlation survives into the forecast
//! - Reproducible, seed-addressed simulation runs (parallel by default)
//! - Descriptive statistics with a 95% confidence interval over outcomes
//!
//! # Typical flow
//!
//! ```ignore
//! use mcforecast::config::SimulationConfig;
//! use mcforecast::distribution::DistributionModel;
//! use mcforecast::model::Portfolio;
//! use mcforecast::returns::portfolio_returns;
//! use mcforecast::stats::SummaryStatistics;
//!
//! let portfolio = Portfolio::new(assets, vec![0.4, 0.6])?;
//! let series = portfolio_returns(&portfolio)?;
//! let model = DistributionModel::from_returns(&series)?;
//!
//! let config = SimulationConfig::for_portfolio(&portfolio, 500, 252 * 30)?;
//! let ensemble = mcforecast::simulation::run(&config, &model)?;
//!
//! let stats = SummaryStatistics::from_ensemble(&ensemble)?;
//! let (low, high) = stats.dollar_range(10_000.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod distribution;
pub mod error;
pub mod progress;
pub mod render;
pub mod returns;
pub mod simulation;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DEFAULT_BASE_SEED, SimulationConfig};
pub use distribution::DistributionModel;
pub use error::{ComputationError, ConfigError, DataError, SimulationError};
pub use model::{Asset, Ensemble, Portfolio, PricePoint};
pub use progress::SimulationProgress;
pub use stats::SummaryStatistics;
