//! Benchmarks for the explicit finite-difference solver.

use bsfd_methods::{stable_spatial_steps, FiniteDifferenceSolver};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("fd_construct_500x100", |b| {
        b.iter(|| {
            FiniteDifferenceSolver::from_inputs(
                black_box(100.0),
                100.0,
                0.05,
                0.2,
                1.0,
                500,
                100,
            )
        })
    });
}

fn benchmark_explicit_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("fd_explicit_pass");

    for time_steps in [500usize, 2_000, 10_000] {
        let spatial_steps = stable_spatial_steps(time_steps, 1.0, 0.05, 0.2);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{time_steps}x{spatial_steps}")),
            &(time_steps, spatial_steps),
            |b, &(m, n)| {
                b.iter(|| {
                    let mut solver =
                        FiniteDifferenceSolver::from_inputs(100.0, 100.0, 0.05, 0.2, 1.0, m, n)
                            .unwrap();
                    black_box(solver.price())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_explicit_pass);
criterion_main!(benches);
