use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cosmotime::cosmology::{params::CosmologyParams, Cosmology};
use cosmotime::units::CosmicAge;

/// Table construction cost (O(n) Simpson steps + two Hermite tables).
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosmology/new");
    for n in [100usize, 1_000, 10_000] {
        let params = CosmologyParams::builder().n(n).build().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| Cosmology::new(black_box(params.clone())).unwrap())
        });
    }
    group.finish();
}

/// Point queries on the default table: O(log n) bisection + one cubic.
fn bench_queries(c: &mut Criterion) {
    let cosmo = Cosmology::new(CosmologyParams::default()).unwrap();
    let today = cosmo.age_today();
    let mut rng = StdRng::seed_from_u64(0xC05_A0);
    let samples = 10_000usize;

    c.bench_function("cosmology/age_from_a", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to keep the RNG out of the timed section
                (0..samples)
                    .map(|_| rng.random_range(0.0..=1.0))
                    .collect::<Vec<f64>>()
            },
            |cases| {
                for a in cases {
                    black_box(cosmo.age_from_a(black_box(a)));
                }
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("cosmology/a_from_age", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| today * rng.random_range(0.0..=1.0))
                    .collect::<Vec<CosmicAge>>()
            },
            |cases| {
                for age in cases {
                    black_box(cosmo.a_from_age(black_box(age)));
                }
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("cosmology/age_from_z", |b| {
        b.iter(|| black_box(cosmo.age_from_z(black_box(6.0))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_construction, bench_queries
);
criterion_main!(benches);
