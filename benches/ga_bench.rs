//! Criterion benchmarks for the GA engine.
//!
//! Uses the One-Max problem so the measurement is pure engine overhead:
//! evaluation is a bit count and contributes almost nothing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onemax_ga::ga::{Chromosome, GaConfig, GaEngine, Individual, RouletteWheel};
use onemax_ga::onemax::OneMax;

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");

    for &length in &[32usize, 128, 512] {
        group.bench_with_input(
            BenchmarkId::new("onemax_50gen", length),
            &length,
            |b, &length| {
                b.iter(|| {
                    let config = GaConfig::new(100, length)
                        .with_crossover_probability(0.7)
                        .with_mutation_rate(0.01)
                        .with_elitism_count(2)
                        .with_seed(42);
                    let mut engine =
                        GaEngine::new(OneMax::new(length), config).expect("valid config");
                    black_box(engine.run(50))
                });
            },
        );
    }

    group.finish();
}

fn bench_wheel_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette_wheel");

    for &pop_size in &[100usize, 1000] {
        let population: Vec<Individual<u32>> = (0..pop_size)
            .map(|i| Individual {
                chromosome: Chromosome::new(vec![true]),
                fitness: (i % 17) as u32,
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("build", pop_size),
            &population,
            |b, population| {
                b.iter(|| black_box(RouletteWheel::build(population)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_run, bench_wheel_build);
criterion_main!(benches);
