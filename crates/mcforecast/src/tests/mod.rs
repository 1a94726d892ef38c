//! Integration tests for the forecasting pipeline
//!
//! Tests are organized by topic:
//! - `returns` - Price history to daily fractional returns
//! - `portfolio` - Portfolio and configuration validation
//! - `distribution` - Joint return model fitting and sampling
//! - `engine` - Simulation runs, reproducibility, cancellation
//! - `stats` - Summary statistics over outcome samples

mod portfolio;

use jiff::ToSpan;

use crate::model::Asset;

/// Build an asset with consecutive calendar dates starting 2020-01-01.
fn asset_from_closes(ticker: &str, closes: &[f64]) -> Asset {
    let start = jiff::civil::date(2020, 1, 1);
    let dates: Vec<jiff::civil::Date> = (0..closes.len())
        .map(|i| {
            start
                .checked_add((i as i64).days())
                .expect("date in range")
        })
        .collect();
    Asset::from_closes(ticker, &dates, closes).expect("valid test asset")
}
