//! Criterion micro-benchmarks for the diffusion and reaction operators.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use silt_bench::{reference_profile, stress_profile, REFERENCE_PARTICLES};
use silt_dynamics::{DiffusionInner, DiffusionRelaxation, ReactionRelaxation, RungeKutta2};
use silt_material::{DiffusionModel, IsotropicDiffusion, ReactionModel};
use silt_test_utils::uniform_store;

fn phi_models() -> Vec<Arc<dyn DiffusionModel>> {
    vec![Arc::new(IsotropicDiffusion::new("phi", 0.1))]
}

/// Benchmark: one Euler diffusion step over the 10K-particle reference ring.
fn bench_diffusion_euler_10k(c: &mut Criterion) {
    let (mut store, relation) = reference_profile();
    let mut op = DiffusionInner::new(&store, phi_models()).unwrap();

    c.bench_function("diffusion_euler_10k", |b| {
        b.iter(|| {
            op.exec(&mut store, &relation, 0.01);
            black_box(&store);
        });
    });
}

/// Benchmark: one RK2 diffusion step over the 10K-particle reference ring.
fn bench_diffusion_rk2_10k(c: &mut Criterion) {
    let (mut store, relation) = reference_profile();
    let op = DiffusionInner::new(&store, phi_models()).unwrap();
    let mut rk2 = RungeKutta2::new(op, &store);

    c.bench_function("diffusion_rk2_10k", |b| {
        b.iter(|| {
            rk2.exec(&mut store, &relation, 0.01);
            black_box(&store);
        });
    });
}

/// Benchmark: one Euler diffusion step over the 100K-particle stress ring.
fn bench_diffusion_euler_100k(c: &mut Criterion) {
    let (mut store, relation) = stress_profile();
    let mut op = DiffusionInner::new(&store, phi_models()).unwrap();

    c.bench_function("diffusion_euler_100k", |b| {
        b.iter(|| {
            op.exec(&mut store, &relation, 0.01);
            black_box(&store);
        });
    });
}

/// Benchmark: forward + backward reaction sweeps over 10K particles with a
/// coupled two-species model.
fn bench_reaction_sweeps_10k(c: &mut Criterion) {
    let mut store = uniform_store(REFERENCE_PARTICLES, &[("a", 1.0), ("b", 0.5)]);
    let model: ReactionModel<2> = ReactionModel::builder()
        .species("a", |local| 0.2 * local[1], |local| 1.0 + local[1])
        .species("b", |local| 0.5 * local[0], |_| 0.8)
        .build()
        .unwrap();
    let op = ReactionRelaxation::new(&store, model).unwrap();

    c.bench_function("reaction_sweeps_10k", |b| {
        b.iter(|| {
            op.exec_forward(&mut store, 0.005);
            op.exec_backward(&mut store, 0.005);
            black_box(&store);
        });
    });
}

criterion_group!(
    benches,
    bench_diffusion_euler_10k,
    bench_diffusion_rk2_10k,
    bench_diffusion_euler_100k,
    bench_reaction_sweeps_10k
);
criterion_main!(benches);
