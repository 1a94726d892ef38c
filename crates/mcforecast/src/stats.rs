//! Descriptive statistics over simulated outcome samples.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ComputationError;
use crate::model::Ensemble;

/// Named summary of one outcome sample, usually the final row of an
/// ensemble (cumulative growth factors at the horizon).
///
/// The confidence bounds are the 2.5th and 97.5th percentiles, the
/// central 95% of simulated outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl SummaryStatistics {
    /// Summarize a sample of outcomes.
    ///
    /// The standard deviation uses the n-1 denominator and is 0.0 for a
    /// single-element sample.
    pub fn describe(sample: &[f64]) -> Result<Self, ComputationError> {
        if sample.is_empty() {
            return Err(ComputationError::EmptySample);
        }

        let count = sample.len();
        let mean = sample.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let var = sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        let mut sorted = sample.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        Ok(Self {
            count,
            mean,
            std,
            min: sorted[0],
            p25: percentile_sorted(&sorted, 25.0),
            p50: percentile_sorted(&sorted, 50.0),
            p75: percentile_sorted(&sorted, 75.0),
            max: sorted[count - 1],
            ci_lower: percentile_sorted(&sorted, 2.5),
            ci_upper: percentile_sorted(&sorted, 97.5),
        })
    }

    /// Summarize the growth factors at an ensemble's final trading day.
    pub fn from_ensemble(ensemble: &Ensemble) -> Result<Self, ComputationError> {
        Self::describe(&ensemble.final_row())
    }

    /// Scale the 95% confidence interval to a dollar amount invested at
    /// day 0, returning `(lower, upper)`.
    #[must_use]
    pub fn dollar_range(&self, initial_investment: f64) -> (f64, f64) {
        (
            self.ci_lower * initial_investment,
            self.ci_upper * initial_investment,
        )
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count      {}", self.count)?;
        writeln!(f, "mean       {:.6}", self.mean)?;
        writeln!(f, "std        {:.6}", self.std)?;
        writeln!(f, "min        {:.6}", self.min)?;
        writeln!(f, "25%        {:.6}", self.p25)?;
        writeln!(f, "50%        {:.6}", self.p50)?;
        writeln!(f, "75%        {:.6}", self.p75)?;
        writeln!(f, "max        {:.6}", self.max)?;
        writeln!(f, "ci lower   {:.6}", self.ci_lower)?;
        write!(f, "ci upper   {:.6}", self.ci_upper)
    }
}

/// Percentile of an ascending-sorted sample by linear interpolation
/// between the two nearest order statistics. `p` is in `[0, 100]`.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}
