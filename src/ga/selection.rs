//! Fitness-proportionate (roulette wheel) selection.
//!
//! Selection probability is proportional to each individual's share of the
//! population's total fitness. The wheel is rebuilt from the current
//! population at every selection event; the cumulative probability table is
//! never persisted across events.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::Rng;

/// A fitness-proportionate sampling wheel over one population snapshot.
///
/// Built from the fitness scores of a population, the wheel draws parent
/// indices with replacement: a uniform value u ~ U[0, 1) maps to the first
/// individual whose cumulative probability entry is ≥ u.
///
/// # Degenerate populations
///
/// When the total fitness is zero, proportional weighting is undefined; the
/// wheel falls back to uniform sampling rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use onemax_ga::ga::{Chromosome, Individual, RouletteWheel};
///
/// let population: Vec<Individual<u32>> = (0u32..4)
///     .map(|i| Individual {
///         chromosome: Chromosome::new(vec![true]),
///         fitness: i,
///     })
///     .collect();
///
/// let wheel = RouletteWheel::build(&population);
/// assert_eq!(wheel.cumulative().unwrap().last(), Some(&1.0));
/// ```
#[derive(Debug, Clone)]
pub enum RouletteWheel {
    /// Cumulative probability table, aligned 1:1 with population order.
    ///
    /// Entries are monotonically non-decreasing and the final entry is
    /// exactly 1.0 (clamped to absorb floating-point drift).
    Weighted(Vec<f64>),

    /// Uniform fallback over `n` individuals (zero total fitness).
    Uniform(usize),
}

impl RouletteWheel {
    /// Builds a wheel from the population's cached fitness scores.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn build<F: Fitness>(population: &[Individual<F>]) -> Self {
        assert!(
            !population.is_empty(),
            "cannot build a wheel over an empty population"
        );

        let total: f64 = population.iter().map(|ind| ind.fitness.to_f64()).sum();
        if total <= 0.0 {
            return RouletteWheel::Uniform(population.len());
        }

        let mut cumulative = Vec::with_capacity(population.len());
        let mut acc = 0.0;
        for ind in population {
            acc += ind.fitness.to_f64() / total;
            cumulative.push(acc);
        }
        // Force the terminal entry to exactly 1.0 so every u in [0, 1)
        // lands inside the table.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        RouletteWheel::Weighted(cumulative)
    }

    /// Draws one parent index.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        match self {
            RouletteWheel::Weighted(cumulative) => {
                let u = rng.random_range(0.0..1.0);
                cumulative.partition_point(|&c| c < u)
            }
            RouletteWheel::Uniform(n) => rng.random_range(0..*n),
        }
    }

    /// Draws a parent pair with replacement.
    ///
    /// The same individual may be selected as both parents; the crossover
    /// operator then recombines a chromosome with itself, which is harmless.
    pub fn spin_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        (self.spin(rng), self.spin(rng))
    }

    /// The cumulative probability table, if this wheel is weighted.
    pub fn cumulative(&self) -> Option<&[f64]> {
        match self {
            RouletteWheel::Weighted(c) => Some(c),
            RouletteWheel::Uniform(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Chromosome;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[u32]) -> Vec<Individual<u32>> {
        fitnesses
            .iter()
            .map(|&f| Individual {
                chromosome: Chromosome::new(vec![]),
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_table_is_cumulative_and_terminates_at_one() {
        let pop = make_population(&[1, 2, 3, 4]);
        let wheel = RouletteWheel::build(&pop);
        let table = wheel.cumulative().expect("non-degenerate population");

        assert_eq!(table.len(), 4);
        for window in table.windows(2) {
            assert!(window[0] <= window[1], "table must be non-decreasing");
        }
        assert_eq!(*table.last().unwrap(), 1.0);
        assert!((table[0] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_fitness_falls_back_to_uniform() {
        let pop = make_population(&[0, 0, 0]);
        let wheel = RouletteWheel::build(&pop);
        assert!(matches!(wheel, RouletteWheel::Uniform(3)));

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 3];
        let n = 9000;
        for _ in 0..n {
            counts[wheel.spin(&mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2500, "expected roughly uniform draws, got {counts:?}");
        }
    }

    #[test]
    fn test_spin_favors_high_fitness() {
        let pop = make_population(&[1, 50, 1, 8]);
        let wheel = RouletteWheel::build(&pop);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[wheel.spin(&mut rng)] += 1;
        }
        // Index 1 holds 50/60 of the mass and should dominate.
        assert!(
            counts[1] > 7000,
            "expected fittest to draw >70% of spins, got {counts:?}"
        );
        assert!(counts[1] > counts[0] && counts[1] > counts[2] && counts[1] > counts[3]);
    }

    #[test]
    fn test_zero_fitness_individual_is_effectively_never_drawn() {
        let pop = make_population(&[0, 10]);
        let wheel = RouletteWheel::build(&pop);
        let mut rng = StdRng::seed_from_u64(42);

        let mut zero_draws = 0u32;
        for _ in 0..10000 {
            if wheel.spin(&mut rng) == 0 {
                zero_draws += 1;
            }
        }
        // A zero-width slot is hit only when u lands exactly on 0.0.
        assert!(zero_draws <= 1, "zero-fitness slot drawn {zero_draws} times");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let wheel = RouletteWheel::build(&pop);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(wheel.spin(&mut rng), 0);
        assert_eq!(wheel.spin_pair(&mut rng), (0, 0));
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let pop = make_population(&[5, 5, 5, 5]);
        let wheel = RouletteWheel::build(&pop);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[wheel.spin(&mut rng)] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "cannot build a wheel over an empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual<u32>> = vec![];
        RouletteWheel::build(&pop);
    }

    proptest! {
        #[test]
        fn prop_table_non_decreasing_with_exact_terminal(
            fitnesses in prop::collection::vec(0u32..1000, 1..50)
        ) {
            let pop = make_population(&fitnesses);
            let wheel = RouletteWheel::build(&pop);

            match wheel.cumulative() {
                Some(table) => {
                    prop_assert_eq!(table.len(), fitnesses.len());
                    for window in table.windows(2) {
                        prop_assert!(window[0] <= window[1]);
                    }
                    prop_assert_eq!(*table.last().unwrap(), 1.0);
                }
                None => {
                    // Uniform fallback only ever fires on a zero total.
                    prop_assert!(fitnesses.iter().all(|&f| f == 0));
                }
            }
        }

        #[test]
        fn prop_spin_index_always_in_bounds(
            fitnesses in prop::collection::vec(0u32..1000, 1..50),
            seed in any::<u64>()
        ) {
            let pop = make_population(&fitnesses);
            let wheel = RouletteWheel::build(&pop);
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..100 {
                prop_assert!(wheel.spin(&mut rng) < fitnesses.len());
            }
        }
    }
}
