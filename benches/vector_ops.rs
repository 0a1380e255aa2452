// benches/vector_ops.rs
//! Benchmark: runtime-dimension vector arithmetic vs nalgebra `DVector`
//!
//! Both sides work on heap-allocated vectors whose length is only known at
//! run time, so the comparison isolates the cost of the type handle and the
//! checked operand path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::DVector;
use vecn::{get_vector_type, lerp, Registry};

const BATCH_SIZE: usize = 1_000;
const DIMENSIONS: [usize; 3] = [3, 16, 128];

/// Registry lookups: cache hit and a fresh registry per iteration.
fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.bench_function("global_hit_1000_batch", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH_SIZE {
                black_box(get_vector_type(black_box(16usize)).unwrap());
            }
        })
    });
    group.bench_function("private_registry_build", |bencher| {
        bencher.iter(|| black_box(Registry::new()))
    });
    group.finish();
}

/// Componentwise add + scale, ours vs nalgebra.
fn bench_plus_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("plus_times");
    for d in DIMENSIONS {
        let ty = get_vector_type(d).unwrap();
        let data: Vec<f64> = (0..d).map(|i| i as f64 * 0.5).collect();
        let a = ty.from_slice(&data).unwrap();
        let b = ty.splat(2.0);

        group.bench_with_input(BenchmarkId::new("vecn", d), &d, |bencher, _| {
            bencher.iter(|| {
                let mut out = a.clone();
                for _ in 0..BATCH_SIZE {
                    out = black_box(&a).plus(black_box(&b)).unwrap() * 0.5;
                }
                black_box(out)
            })
        });

        let na = DVector::from_vec(data.clone());
        let nb = DVector::from_element(d, 2.0);
        group.bench_with_input(BenchmarkId::new("nalgebra", d), &d, |bencher, _| {
            bencher.iter(|| {
                let mut out = na.clone();
                for _ in 0..BATCH_SIZE {
                    out = (black_box(&na) + black_box(&nb)) * 0.5;
                }
                black_box(out)
            })
        });
    }
    group.finish();
}

/// Dot product and normalisation.
fn bench_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric");
    for d in DIMENSIONS {
        let ty = get_vector_type(d).unwrap();
        let data: Vec<f64> = (1..=d).map(|i| i as f64).collect();
        let a = ty.from_slice(&data).unwrap();
        let na = DVector::from_vec(data);

        group.bench_with_input(BenchmarkId::new("vecn_dot", d), &d, |bencher, _| {
            bencher.iter(|| black_box(&a).dot(black_box(&a)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("nalgebra_dot", d), &d, |bencher, _| {
            bencher.iter(|| black_box(&na).dot(black_box(&na)))
        });
        group.bench_with_input(BenchmarkId::new("vecn_normalize", d), &d, |bencher, _| {
            bencher.iter(|| black_box(&a).normalize())
        });
        group.bench_with_input(BenchmarkId::new("nalgebra_normalize", d), &d, |bencher, _| {
            bencher.iter(|| black_box(&na).normalize())
        });
    }
    group.finish();
}

/// Linear interpolation between two vec3s.
fn bench_lerp(c: &mut Criterion) {
    let ty = get_vector_type(3).unwrap();
    let a = ty.splat(1.0);
    let b = ty.splat(2.0);
    c.bench_function("lerp vec3", |bencher| {
        bencher.iter(|| lerp(black_box(&a), black_box(&b), black_box(0.25)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_registry_lookup,
    bench_plus_times,
    bench_metric,
    bench_lerp
);
criterion_main!(benches);
