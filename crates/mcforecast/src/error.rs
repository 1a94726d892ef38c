use std::fmt;

/// Errors raised while validating a portfolio or simulation configuration.
///
/// These are detected eagerly at construction, before any sampling happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Number of weights does not match the number of assets
    WeightCountMismatch { expected: usize, actual: usize },
    /// Weights do not sum to 1.0 within tolerance
    WeightSum { sum: f64 },
    /// A weight is negative
    NegativeWeight { index: usize, weight: f64 },
    /// `num_simulations` must be positive
    ZeroSimulations,
    /// `num_trading_days` must be positive
    ZeroTradingDays,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WeightCountMismatch { expected, actual } => {
                write!(f, "expected {expected} weights, got {actual}")
            }
            ConfigError::WeightSum { sum } => {
                write!(f, "portfolio weights sum to {sum}, expected 1.0")
            }
            ConfigError::NegativeWeight { index, weight } => {
                write!(f, "weight {index} is negative ({weight})")
            }
            ConfigError::ZeroSimulations => write!(f, "num_simulations must be positive"),
            ConfigError::ZeroTradingDays => write!(f, "num_trading_days must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised by insufficient or inconsistent historical price data.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Price series needs at least 2 observations to produce a return
    TooFewObservations { ticker: String, len: usize },
    /// A closing price is zero or negative; the daily return is undefined
    NonPositivePrice {
        ticker: String,
        index: usize,
        close: f64,
    },
    /// Observation dates are not strictly increasing
    UnorderedDates { ticker: String, index: usize },
    /// Price series are not aligned to the same trading-day calendar
    MisalignedSeries { ticker: String },
    /// Return series across assets have different lengths
    UnequalReturnLengths { expected: usize, actual: usize },
    /// Two assets in one portfolio share a ticker
    DuplicateTicker { ticker: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::TooFewObservations { ticker, len } => {
                write!(f, "{ticker}: {len} price observations, need at least 2")
            }
            DataError::NonPositivePrice {
                ticker,
                index,
                close,
            } => {
                write!(f, "{ticker}: non-positive close {close} at index {index}")
            }
            DataError::UnorderedDates { ticker, index } => {
                write!(
                    f,
                    "{ticker}: dates not strictly increasing at index {index}"
                )
            }
            DataError::MisalignedSeries { ticker } => {
                write!(f, "{ticker}: price series not aligned to portfolio calendar")
            }
            DataError::UnequalReturnLengths { expected, actual } => {
                write!(
                    f,
                    "return series length {actual} does not match expected {expected}"
                )
            }
            DataError::DuplicateTicker { ticker } => {
                write!(f, "duplicate ticker {ticker} in portfolio")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Numerical breakdown during simulation or statistics extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationError {
    /// Every simulated path produced a non-finite value
    AllRunsInvalid { attempted: usize },
    /// Statistics require at least one value
    EmptySample,
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputationError::AllRunsInvalid { attempted } => {
                write!(f, "all {attempted} simulation runs were invalid")
            }
            ComputationError::EmptySample => write!(f, "cannot summarize an empty sample"),
        }
    }
}

impl std::error::Error for ComputationError {}

/// Engine-level error union returned by `simulation::run`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Config(ConfigError),
    Computation(ComputationError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "{e}"),
            SimulationError::Computation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::Computation(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

impl From<ComputationError> for SimulationError {
    fn from(e: ComputationError) -> Self {
        SimulationError::Computation(e)
    }
}
