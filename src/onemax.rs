//! The One-Max problem.
//!
//! Maximize the count of set bits in a fixed-length bit vector. Trivial as
//! an optimization target, but it exercises every part of the engine and its
//! global optimum (the all-ones chromosome, fitness L) is known in advance.

use crate::ga::{Chromosome, Problem};
use rand::Rng;

/// One-Max over chromosomes of a fixed length.
///
/// # Examples
///
/// ```
/// use onemax_ga::ga::{GaConfig, GaEngine};
/// use onemax_ga::onemax::OneMax;
///
/// let config = GaConfig::new(50, 20)
///     .with_crossover_probability(0.7)
///     .with_mutation_rate(0.05)
///     .with_elitism_count(2)
///     .with_seed(42);
/// let mut engine = GaEngine::new(OneMax::new(20), config).unwrap();
/// let result = engine.run(100);
/// assert!(result.best_fitness >= 15);
/// ```
#[derive(Debug, Clone)]
pub struct OneMax {
    length: usize,
}

impl OneMax {
    /// Creates a One-Max instance over `length`-bit chromosomes.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// The chromosome length of this instance.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Problem for OneMax {
    type Fitness = u32;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(self.length, rng)
    }

    fn evaluate(&self, chromosome: &Chromosome) -> u32 {
        chromosome.count_ones()
    }
}
