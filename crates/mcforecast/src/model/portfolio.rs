use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DataError};
use crate::model::Asset;

/// Tolerance for the weights-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A weighted collection of assets sharing one trading-day calendar.
///
/// Invariants enforced at construction:
/// - one non-negative weight per asset, summing to 1.0 within tolerance
/// - every asset's price series matches the first asset's dates exactly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    assets: Vec<Asset>,
    weights: Vec<f64>,
}

impl Portfolio {
    pub fn new(assets: Vec<Asset>, weights: Vec<f64>) -> Result<Self, PortfolioError> {
        validate_weights(&weights, assets.len())?;

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, asset) in assets.iter().enumerate() {
            if seen.insert(asset.ticker(), i).is_some() {
                return Err(DataError::DuplicateTicker {
                    ticker: asset.ticker().to_string(),
                }
                .into());
            }
        }

        if let Some((first, rest)) = assets.split_first() {
            for asset in rest {
                let aligned = asset.len() == first.len()
                    && asset
                        .prices()
                        .iter()
                        .zip(first.prices())
                        .all(|(a, b)| a.date == b.date);
                if !aligned {
                    return Err(DataError::MisalignedSeries {
                        ticker: asset.ticker().to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(Self { assets, weights })
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[must_use]
    pub fn num_assets(&self) -> usize {
        self.assets.len()
    }

    /// Look up an asset by ticker.
    #[must_use]
    pub fn asset(&self, ticker: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.ticker() == ticker)
    }
}

pub(crate) fn validate_weights(weights: &[f64], num_assets: usize) -> Result<(), ConfigError> {
    if weights.len() != num_assets {
        return Err(ConfigError::WeightCountMismatch {
            expected: num_assets,
            actual: weights.len(),
        });
    }
    for (index, &weight) in weights.iter().enumerate() {
        if weight < 0.0 {
            return Err(ConfigError::NegativeWeight { index, weight });
        }
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSum { sum });
    }
    Ok(())
}

/// Errors raised while assembling a portfolio: bad weights or bad data.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioError {
    Config(ConfigError),
    Data(DataError),
}

impl std::fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioError::Config(e) => write!(f, "{e}"),
            PortfolioError::Data(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PortfolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortfolioError::Config(e) => Some(e),
            PortfolioError::Data(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PortfolioError {
    fn from(e: ConfigError) -> Self {
        PortfolioError::Config(e)
    }
}

impl From<DataError> for PortfolioError {
    fn from(e: DataError) -> Self {
        PortfolioError::Data(e)
    }
}
