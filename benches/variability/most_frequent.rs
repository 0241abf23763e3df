use criterion::{black_box, Criterion};
use nsc_variability::statistics::most_frequent::{most_frequent_f64, most_frequent_with_count};

pub fn bench_most_frequent(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_frequent");
    let bands = ["u", "g", "r", "i", "z", "Y", "VR"];

    for count in [1_000, 100_000] {
        let filters: Vec<&str> = (0..count).map(|x| bands[(x * 7 + x / 3) % bands.len()]).collect();
        let magnitudes: Vec<f64> = (0..count)
            .map(|x| 17.0 + ((x * 31) % 200) as f64 * 0.01)
            .collect();

        group.bench_function(format!("filters_{}", count), |b| {
            b.iter(|| most_frequent_with_count(black_box(&filters)))
        });

        group.bench_function(format!("magnitudes_{}", count), |b| {
            b.iter(|| most_frequent_f64(black_box(&magnitudes)))
        });
    }

    group.finish();
}
