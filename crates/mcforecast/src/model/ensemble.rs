use serde::{Deserialize, Serialize};

/// The full collection of simulated cumulative-return paths from one
/// engine invocation.
///
/// Conceptually a matrix of `num_trading_days + 1` rows by one column per
/// valid run. Paths are stored column-wise since each run produces its own
/// path; rows are extracted on demand. Column order is fixed once built.
///
/// Values are cumulative-return multipliers on a unit investment
/// (1.0 = break-even); row 0 is always all 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ensemble {
    num_trading_days: usize,
    paths: Vec<Vec<f64>>,
    discarded: usize,
    incomplete: bool,
}

impl Ensemble {
    pub(crate) fn new(
        num_trading_days: usize,
        paths: Vec<Vec<f64>>,
        discarded: usize,
        incomplete: bool,
    ) -> Self {
        debug_assert!(paths.iter().all(|p| p.len() == num_trading_days + 1));
        Self {
            num_trading_days,
            paths,
            discarded,
            incomplete,
        }
    }

    /// Simulation horizon in trading days.
    #[must_use]
    pub fn num_trading_days(&self) -> usize {
        self.num_trading_days
    }

    /// Number of rows: one per simulated day plus the day-0 row.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_trading_days + 1
    }

    /// Number of valid paths (columns).
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Runs that produced a non-finite value and were excluded.
    ///
    /// Always inspect this alongside the statistics: an ensemble that
    /// discarded most of its runs technically succeeded but is not a
    /// trustworthy sample.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// True when the engine was cancelled before all runs completed.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.incomplete
    }

    /// All valid paths, each of length `num_trading_days + 1`.
    #[must_use]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Extract one row: the cumulative-return value of every path at `day`.
    ///
    /// Returns `None` when `day` is past the horizon.
    #[must_use]
    pub fn row(&self, day: usize) -> Option<Vec<f64>> {
        if day > self.num_trading_days {
            return None;
        }
        Some(self.paths.iter().map(|p| p[day]).collect())
    }

    /// The final day's cumulative-return values, one per valid path.
    #[must_use]
    pub fn final_row(&self) -> Vec<f64> {
        self.paths
            .iter()
            .map(|p| p[self.num_trading_days])
            .collect()
    }
}
