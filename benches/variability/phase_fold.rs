use criterion::{black_box, Criterion};
use nsc_variability::api::fold_options::{CycleRounding, FoldOptions};
use nsc_variability::timeseries::phase_fold::phase_fold_with_options;

/// Irregular survey-like cadence: a few visits per night with seasonal gaps.
fn generate_timestamps(count: usize) -> Vec<f64> {
    (0..count)
        .map(|x| {
            let night = (x / 3) as f64;
            let season_gap = ((x / 600) * 120) as f64;
            57000.0 + night * 1.7 + season_gap + (x % 3) as f64 * 0.021
        })
        .collect()
}

pub fn bench_phase_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_fold");

    for count in [1_000, 10_000, 100_000] {
        let timestamps = generate_timestamps(count);

        for rounding in [CycleRounding::TowardZero, CycleRounding::Floor] {
            let options = FoldOptions::new().with_rounding(rounding);
            group.bench_function(format!("{:?}_{}", rounding, count), |b| {
                b.iter(|| {
                    phase_fold_with_options(
                        black_box(&timestamps),
                        black_box(0.5731),
                        black_box(&options),
                    )
                })
            });
        }
    }

    group.finish();
}
