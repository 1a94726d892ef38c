use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One daily closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

impl PricePoint {
    #[must_use]
    pub fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// A single asset's historical daily closing prices.
///
/// The series is owned by the caller and read-only to the engine.
/// Construction enforces strictly increasing dates (no duplicates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    ticker: String,
    prices: Vec<PricePoint>,
}

impl Asset {
    pub fn new(ticker: impl Into<String>, prices: Vec<PricePoint>) -> Result<Self, DataError> {
        let ticker = ticker.into();
        for (i, pair) in prices.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(DataError::UnorderedDates {
                    ticker,
                    index: i + 1,
                });
            }
        }
        Ok(Self { ticker, prices })
    }

    /// Build an asset from a shared trading-day calendar and a closes column.
    ///
    /// Convenient for test fixtures and for callers that already hold
    /// calendar-aligned data from a price feed.
    pub fn from_closes(
        ticker: impl Into<String>,
        dates: &[Date],
        closes: &[f64],
    ) -> Result<Self, DataError> {
        let prices = dates
            .iter()
            .zip(closes)
            .map(|(d, c)| PricePoint::new(*d, *c))
            .collect();
        Self::new(ticker, prices)
    }

    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    #[must_use]
    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }

    /// Number of daily observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
