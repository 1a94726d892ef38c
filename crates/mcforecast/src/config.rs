//! Simulation configuration
//!
//! One validated, immutable `SimulationConfig` describes a forecast:
//! how many independent runs to draw, how many trading days each run
//! spans, and the portfolio weights applied to every sampled return
//! vector. The same `DistributionModel` can be reused across many
//! configs (different horizons, different weightings) because the
//! config carries no sampling state of its own.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Portfolio, validate_weights};

/// Base seed used when the caller does not supply one.
///
/// A fixed default keeps results reproducible run-to-run; callers that
/// want fresh randomness seed from entropy explicitly.
pub const DEFAULT_BASE_SEED: u64 = 42;

/// Immutable parameters for one Monte Carlo forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    num_simulations: usize,
    num_trading_days: usize,
    weights: Vec<f64>,
    base_seed: u64,
}

impl SimulationConfig {
    /// Validate and freeze a configuration.
    ///
    /// Weight count against the distribution model is checked by the
    /// engine at `run` time, since the config alone does not know how
    /// many assets the model was fit on.
    pub fn new(
        num_simulations: usize,
        num_trading_days: usize,
        weights: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if num_simulations == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        if num_trading_days == 0 {
            return Err(ConfigError::ZeroTradingDays);
        }
        validate_weights(&weights, weights.len())?;

        Ok(Self {
            num_simulations,
            num_trading_days,
            weights,
            base_seed: DEFAULT_BASE_SEED,
        })
    }

    /// Build a config that reuses a portfolio's weights.
    pub fn for_portfolio(
        portfolio: &Portfolio,
        num_simulations: usize,
        num_trading_days: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(
            num_simulations,
            num_trading_days,
            portfolio.weights().to_vec(),
        )
    }

    /// Replace the base seed, e.g. to decorrelate repeated forecasts.
    #[must_use]
    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    #[must_use]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    #[must_use]
    pub fn num_trading_days(&self) -> usize {
        self.num_trading_days
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[must_use]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}
