//! Daily fractional returns derived from closing-price series.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::model::{Asset, Portfolio};

/// One asset's daily fractional returns, aligned to its price series.
///
/// `returns[t]` covers the move from observation `t` to `t + 1`, so the
/// series is one element shorter than the price series it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub ticker: String,
    pub returns: Vec<f64>,
}

impl ReturnSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// Compute an asset's daily returns: `(p[t] - p[t-1]) / p[t-1]`.
///
/// Fails when the series has fewer than 2 observations or contains a
/// non-positive close (the return would be undefined).
pub fn daily_returns(asset: &Asset) -> Result<ReturnSeries, DataError> {
    let prices = asset.prices();
    if prices.len() < 2 {
        return Err(DataError::TooFewObservations {
            ticker: asset.ticker().to_string(),
            len: prices.len(),
        });
    }
    for (index, point) in prices.iter().enumerate() {
        if point.close <= 0.0 {
            return Err(DataError::NonPositivePrice {
                ticker: asset.ticker().to_string(),
                index,
                close: point.close,
            });
        }
    }

    let returns = prices
        .windows(2)
        .map(|pair| (pair[1].close - pair[0].close) / pair[0].close)
        .collect();

    Ok(ReturnSeries {
        ticker: asset.ticker().to_string(),
        returns,
    })
}

/// Compute return series for every asset in a portfolio, in asset order.
pub fn portfolio_returns(portfolio: &Portfolio) -> Result<Vec<ReturnSeries>, DataError> {
    portfolio.assets().iter().map(daily_returns).collect()
}
