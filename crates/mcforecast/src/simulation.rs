//! Monte Carlo engine: independent cumulative-return paths over a shared
//! distribution model.
//!
//! Each run owns its RNG, seeded from the config's base seed plus the run
//! index, so ensembles are bit-for-bit reproducible for a fixed config no
//! matter how many worker threads execute them. Runs only read shared,
//! immutable inputs; the final gather into the `Ensemble` is the sole
//! synchronization point.

use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::distribution::DistributionModel;
use crate::error::{ComputationError, ConfigError, SimulationError};
use crate::model::Ensemble;
use crate::progress::SimulationProgress;

/// Runs dispatched per rayon task; bounds scheduling overhead without
/// starving the pool on small simulations.
#[cfg(feature = "parallel")]
const MAX_BATCH_SIZE: usize = 100;

/// Simulate one cumulative-return path of `num_trading_days` steps.
///
/// `path[0]` is always 1.0 (growth of a unit investment). Each step draws
/// a correlated per-asset return vector, folds it into a single portfolio
/// return through the weights, and compounds. Returns `None` when
/// compounding produces a non-finite value; the engine discards such runs
/// instead of aborting the whole simulation.
pub fn simulate_path(
    model: &DistributionModel,
    weights: &[f64],
    num_trading_days: usize,
    seed: u64,
) -> Option<Vec<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut path = Vec::with_capacity(num_trading_days + 1);
    let mut value = 1.0;
    path.push(value);

    for _ in 0..num_trading_days {
        let sampled = model.sample_returns(&mut rng);
        let portfolio_return: f64 = weights.iter().zip(&sampled).map(|(w, r)| w * r).sum();
        value *= 1.0 + portfolio_return;
        if !value.is_finite() {
            return None;
        }
        path.push(value);
    }

    Some(path)
}

/// Execute all configured runs and gather them into an [`Ensemble`].
///
/// Fails with [`ComputationError::AllRunsInvalid`] only when every run is
/// discarded; a partially-thinned ensemble is returned otherwise, with the
/// discarded count preserved as a diagnostic.
pub fn run(
    config: &SimulationConfig,
    model: &DistributionModel,
) -> Result<Ensemble, SimulationError> {
    run_with_progress(config, model, &SimulationProgress::default())
}

/// [`run`], with progress reporting and cooperative cancellation.
///
/// Cancellation is observed between runs. Runs that already completed are
/// retained and the returned ensemble is flagged incomplete.
pub fn run_with_progress(
    config: &SimulationConfig,
    model: &DistributionModel,
    progress: &SimulationProgress,
) -> Result<Ensemble, SimulationError> {
    if config.weights().len() != model.num_assets() {
        return Err(ConfigError::WeightCountMismatch {
            expected: model.num_assets(),
            actual: config.weights().len(),
        }
        .into());
    }
    progress.reset(config.num_simulations());

    let outcomes = execute_runs(config, model, progress);

    let attempted = outcomes.len();
    let mut paths = Vec::with_capacity(attempted);
    let mut discarded = 0usize;
    for outcome in outcomes {
        match outcome {
            Some(path) => paths.push(path),
            None => discarded += 1,
        }
    }

    if paths.is_empty() && discarded > 0 {
        return Err(ComputationError::AllRunsInvalid {
            attempted: discarded,
        }
        .into());
    }

    let incomplete = progress.is_cancelled();
    if discarded > 0 {
        warn!(
            discarded,
            valid = paths.len(),
            "discarded non-finite simulation runs"
        );
    }
    debug!(
        runs = paths.len(),
        discarded,
        incomplete,
        horizon = config.num_trading_days(),
        "simulation complete"
    );

    Ok(Ensemble::new(
        config.num_trading_days(),
        paths,
        discarded,
        incomplete,
    ))
}

/// One entry per executed run: `Some(path)` or `None` for a discarded run.
/// Runs skipped due to cancellation produce no entry at all.
#[cfg(feature = "parallel")]
fn execute_runs(
    config: &SimulationConfig,
    model: &DistributionModel,
    progress: &SimulationProgress,
) -> Vec<Option<Vec<f64>>> {
    let num_simulations = config.num_simulations();
    let num_batches = num_simulations.div_ceil(MAX_BATCH_SIZE);

    (0..num_batches)
        .into_par_iter()
        .flat_map(|batch| {
            let start = batch * MAX_BATCH_SIZE;
            let end = ((batch + 1) * MAX_BATCH_SIZE).min(num_simulations);

            (start..end)
                .filter(|_| !progress.is_cancelled())
                .map(|run_index| {
                    let seed = config.base_seed().wrapping_add(run_index as u64);
                    let outcome = simulate_path(
                        model,
                        config.weights(),
                        config.num_trading_days(),
                        seed,
                    );
                    progress.increment();
                    outcome
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn execute_runs(
    config: &SimulationConfig,
    model: &DistributionModel,
    progress: &SimulationProgress,
) -> Vec<Option<Vec<f64>>> {
    let mut outcomes = Vec::with_capacity(config.num_simulations());
    for run_index in 0..config.num_simulations() {
        if progress.is_cancelled() {
            break;
        }
        let seed = config.base_seed().wrapping_add(run_index as u64);
        outcomes.push(simulate_path(
            model,
            config.weights(),
            config.num_trading_days(),
            seed,
        ));
        progress.increment();
    }
    outcomes
}
