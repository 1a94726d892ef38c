//! Criterion benchmarks for mcforecast
//!
//! Run with: cargo bench -p mcforecast

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mcforecast::config::SimulationConfig;
use mcforecast::distribution::DistributionModel;
use mcforecast::returns::ReturnSeries;
use mcforecast::simulation::{run, simulate_path};
use mcforecast::stats::SummaryStatistics;

fn create_two_asset_model() -> DistributionModel {
    // A year of plausible daily moves: a drifting equity leg and a
    // quieter bond leg that tracks it loosely.
    let equity: Vec<f64> = (0..252)
        .map(|t| 0.0004 + 0.01 * ((t * 7 % 13) as f64 - 6.0) / 6.0)
        .collect();
    let bond: Vec<f64> = equity
        .iter()
        .enumerate()
        .map(|(t, r)| 0.0001 + 0.2 * r + 0.002 * ((t * 3 % 11) as f64 - 5.0) / 5.0)
        .collect();

    DistributionModel::from_returns(&[
        ReturnSeries {
            ticker: "SPY".to_string(),
            returns: equity,
        },
        ReturnSeries {
            ticker: "AGG".to_string(),
            returns: bond,
        },
    ])
    .unwrap()
}

fn bench_single_path(c: &mut Criterion) {
    let model = create_two_asset_model();
    let weights = [0.6, 0.4];

    c.bench_function("single_path_30yr", |b| {
        b.iter(|| {
            simulate_path(
                black_box(&model),
                black_box(&weights),
                black_box(252 * 30),
                black_box(42),
            )
        })
    });
}

fn bench_ensemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble");
    let model = create_two_asset_model();

    for num_simulations in [100, 500, 1000].iter() {
        let config = SimulationConfig::new(*num_simulations, 252 * 10, vec![0.6, 0.4]).unwrap();

        group.bench_with_input(
            BenchmarkId::new("runs", num_simulations),
            num_simulations,
            |b, _| b.iter(|| run(black_box(&config), black_box(&model))),
        );
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let model = create_two_asset_model();
    let config = SimulationConfig::new(1000, 252, vec![0.6, 0.4]).unwrap();
    let ensemble = run(&config, &model).unwrap();
    let sample = ensemble.final_row();

    c.bench_function("summary_1000_outcomes", |b| {
        b.iter(|| SummaryStatistics::describe(black_box(&sample)))
    });
}

criterion_group!(benches, bench_single_path, bench_ensemble, bench_summary);
criterion_main!(benches);
