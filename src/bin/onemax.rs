//! One-Max demo: evolve a 40-bit all-ones chromosome and report timing.

use onemax_ga::ga::{GaConfig, GaEngine};
use onemax_ga::onemax::OneMax;
use std::time::Instant;

fn main() {
    let chromosome_length = 40;
    let config = GaConfig::new(200, chromosome_length)
        .with_crossover_probability(0.7)
        .with_mutation_rate(0.07)
        .with_elitism_count(2);

    let start = Instant::now();
    let mut engine = match GaEngine::new(OneMax::new(chromosome_length), config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let result = engine.run(150);
    let elapsed = start.elapsed();

    println!("GA solution time: {:.1?}", elapsed);
    println!("Best solution: {}", result.best_chromosome);
    println!("Fitness: {}", result.best_fitness);
}
