//! Criterion benchmarks for numerand_random sampling.
//!
//! Compares the dense and sparse distinct-integer strategies across range
//! sizes, and measures the single-draw helpers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numerand_random::sampling::{Sampler, SamplerConfig};
use numerand_random::source::SeededSource;

/// Benchmark both distinct strategies for a fixed sample size.
fn bench_distinct_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_integers_between");
    let count = 16;

    for range_len in [64_i64, 4_096, 65_536] {
        for (name, config) in [
            ("dense", SamplerConfig::always_dense()),
            ("sparse", SamplerConfig::always_sparse()),
        ] {
            let mut sampler = Sampler::with_config(SeededSource::from_seed(42), config);
            group.bench_with_input(
                BenchmarkId::new(name, range_len),
                &range_len,
                |b, &range_len| {
                    b.iter(|| {
                        sampler
                            .distinct_integers_between(0, black_box(range_len - 1), count)
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the single-draw helpers.
fn bench_single_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_draws");
    let mut sampler = Sampler::seeded(7);
    let items: Vec<u32> = (0..1_000).collect();

    group.bench_function("integer_between", |b| {
        b.iter(|| sampler.integer_between(black_box(-1_000), black_box(1_000)).unwrap());
    });
    group.bench_function("float_between", |b| {
        b.iter(|| sampler.float_between(black_box(0.0), black_box(100.0)).unwrap());
    });
    group.bench_function("pick_among", |b| {
        b.iter(|| *sampler.pick_among(black_box(&items)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_distinct_strategies, bench_single_draws);
criterion_main!(benches);
