//! Tests for portfolio and configuration validation
//!
//! These tests verify that:
//! - Weights failing the sum-to-one check are rejected eagerly
//! - Negative weights and count mismatches are rejected
//! - Misaligned calendars and duplicate tickers are rejected
//! - Degenerate run counts and horizons are rejected
//! - Configurations survive a serde round trip

use jiff::ToSpan;

use crate::config::{DEFAULT_BASE_SEED, SimulationConfig};
use crate::error::{ConfigError, DataError};
use crate::model::{Asset, Portfolio, PortfolioError, PricePoint};
use crate::tests::asset_from_closes;

fn two_assets() -> Vec<Asset> {
    vec![
        asset_from_closes("SPY", &[100.0, 101.0, 102.0]),
        asset_from_closes("AGG", &[50.0, 50.5, 50.0]),
    ]
}

#[test]
fn test_weights_must_sum_to_one() {
    let err = Portfolio::new(two_assets(), vec![0.4, 0.5]).unwrap_err();
    match err {
        PortfolioError::Config(ConfigError::WeightSum { sum }) => {
            assert!((sum - 0.9).abs() < 1e-12, "reported sum {sum}");
        }
        other => panic!("expected WeightSum, got {other:?}"),
    }
}

#[test]
fn test_weight_sum_tolerance_allows_rounding() {
    // One ulp-scale wobble away from 1.0 must pass.
    let portfolio = Portfolio::new(two_assets(), vec![0.4, 0.6000000001]);
    assert!(portfolio.is_ok());
}

#[test]
fn test_negative_weight_rejected() {
    let err = Portfolio::new(two_assets(), vec![1.5, -0.5]).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Config(ConfigError::NegativeWeight { index: 1, .. })
    ));
}

#[test]
fn test_weight_count_mismatch_rejected() {
    let err = Portfolio::new(two_assets(), vec![0.3, 0.3, 0.4]).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Config(ConfigError::WeightCountMismatch {
            expected: 2,
            actual: 3,
        })
    ));
}

#[test]
fn test_misaligned_calendars_rejected() {
    // Same length, different dates.
    let spy = asset_from_closes("SPY", &[100.0, 101.0, 102.0]);
    let shifted_start = jiff::civil::date(2021, 6, 1);
    let agg = Asset::new(
        "AGG",
        (0..3i64)
            .map(|i| {
                let date = shifted_start.checked_add(i.days()).unwrap();
                PricePoint::new(date, 50.0 + i as f64)
            })
            .collect(),
    )
    .unwrap();

    let err = Portfolio::new(vec![spy, agg], vec![0.5, 0.5]).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Data(DataError::MisalignedSeries { .. })
    ));
}

#[test]
fn test_duplicate_ticker_rejected() {
    let assets = vec![
        asset_from_closes("SPY", &[100.0, 101.0]),
        asset_from_closes("SPY", &[100.0, 102.0]),
    ];
    let err = Portfolio::new(assets, vec![0.5, 0.5]).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Data(DataError::DuplicateTicker { .. })
    ));
}

#[test]
fn test_unordered_dates_rejected_at_asset_construction() {
    let d = jiff::civil::date(2020, 1, 1);
    let prices = vec![
        PricePoint::new(d, 100.0),
        PricePoint::new(d, 101.0), // duplicate date
    ];
    assert!(matches!(
        Asset::new("SPY", prices),
        Err(DataError::UnorderedDates { index: 1, .. })
    ));
}

#[test]
fn test_config_rejects_degenerate_dimensions() {
    assert!(matches!(
        SimulationConfig::new(0, 252, vec![1.0]),
        Err(ConfigError::ZeroSimulations)
    ));
    assert!(matches!(
        SimulationConfig::new(100, 0, vec![1.0]),
        Err(ConfigError::ZeroTradingDays)
    ));
    assert!(matches!(
        SimulationConfig::new(100, 252, vec![0.4, 0.5]),
        Err(ConfigError::WeightSum { .. })
    ));
}

#[test]
fn test_config_from_portfolio_copies_weights() {
    let portfolio = Portfolio::new(two_assets(), vec![0.4, 0.6]).unwrap();
    let config = SimulationConfig::for_portfolio(&portfolio, 500, 252 * 30).unwrap();

    assert_eq!(config.num_simulations(), 500);
    assert_eq!(config.num_trading_days(), 7560);
    assert_eq!(config.weights(), portfolio.weights());
    assert_eq!(config.base_seed(), DEFAULT_BASE_SEED);
}

#[test]
fn test_config_serde_round_trip() {
    let config = SimulationConfig::new(200, 504, vec![0.25, 0.75])
        .unwrap()
        .with_base_seed(7);

    let json = serde_json::to_string(&config).unwrap();
    let restored: SimulationConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.num_simulations(), 200);
    assert_eq!(restored.num_trading_days(), 504);
    assert_eq!(restored.weights(), &[0.25, 0.75]);
    assert_eq!(restored.base_seed(), 7);
}
