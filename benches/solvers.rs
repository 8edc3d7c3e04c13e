//! Benchmarks for the Knight's Tour solvers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use knights_tour::{
    compute::{BacktrackingSolver, CulturalSolver, TourSolver, cultural::GenomeRng},
    schema::{CulturalConfig, Square},
};

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");

    for size in [5, 8, 16, 32, 50] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, &size| {
                b.iter(|| BacktrackingSolver::new(size).run(black_box(0), black_box(0)));
            },
        );
    }

    group.finish();
}

fn bench_cultural_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("cultural_100_generations");
    group.sample_size(10);

    for pop_size in [50, 150, 300] {
        let config = CulturalConfig {
            population_size: pop_size,
            max_generations: 100,
            random_seed: Some(42),
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("pop_{}", pop_size)),
            &config,
            |b, config| {
                b.iter(|| CulturalSolver::with_config(8, config.clone()).run(0, 0));
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = GenomeRng::new(7);
    let genome = rng.random_genome(64);

    c.bench_function("decode_8x8", |b| {
        b.iter(|| black_box(&genome).decode(Square::new(0, 0), 8));
    });
}

criterion_group!(
    benches,
    bench_backtracking,
    bench_cultural_generations,
    bench_decode
);
criterion_main!(benches);
