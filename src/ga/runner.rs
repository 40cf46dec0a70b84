//! The generational loop.
//!
//! [`GaEngine`] owns the population and drives one generation at a time:
//! selection → crossover → mutation → elitist replacement. Running for a
//! fixed number of generations yields a [`GaResult`].

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, one_point_crossover};
use super::selection::RouletteWheel;
use super::types::{Chromosome, Fitness, Individual, Problem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<F: Fitness> {
    /// The best chromosome in the final population (first maximum).
    pub best_chromosome: Chromosome,

    /// Fitness of the best chromosome.
    pub best_fitness: F,

    /// Total number of generations executed by the engine so far.
    pub generations: usize,

    /// Best fitness in the population after initialization and after each
    /// generation. With at least one elite this sequence is non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop over a [`Problem`].
///
/// The engine is constructed with a validated configuration and a seedable
/// random generator, initializes its population up front, and then advances
/// one generation per iteration of [`run`](GaEngine::run). The population
/// size and every chromosome's length are invariant at generation
/// boundaries.
///
/// # Usage
///
/// ```
/// use onemax_ga::ga::{GaConfig, GaEngine};
/// use onemax_ga::onemax::OneMax;
///
/// let config = GaConfig::new(30, 16).with_seed(42);
/// let mut engine = GaEngine::new(OneMax::new(16), config).unwrap();
/// let result = engine.run(50);
/// assert_eq!(result.best_chromosome.len(), 16);
/// ```
#[derive(Debug)]
pub struct GaEngine<P: Problem, R: Rng = StdRng> {
    problem: P,
    config: GaConfig,
    rng: R,
    population: Vec<Individual<P::Fitness>>,
    generation: usize,
    fitness_history: Vec<f64>,
}

impl<P: Problem> GaEngine<P, StdRng> {
    /// Creates an engine seeded from [`GaConfig::seed`].
    ///
    /// `None` seeds from entropy. Identical seed and configuration yield an
    /// identical sequence of populations.
    ///
    /// # Errors
    /// Returns `Err` if the configuration is invalid or the problem produces
    /// chromosomes of the wrong length.
    pub fn new(problem: P, config: GaConfig) -> Result<Self, String> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(problem, config, StdRng::seed_from_u64(seed))
    }
}

impl<P: Problem, R: Rng> GaEngine<P, R> {
    /// Creates an engine with an injected random generator.
    ///
    /// All randomness — initialization, selection, crossover, mutation — is
    /// drawn from this single generator, in a fixed order.
    ///
    /// # Errors
    /// Returns `Err` if the configuration is invalid or the problem produces
    /// chromosomes of the wrong length.
    pub fn with_rng(problem: P, config: GaConfig, mut rng: R) -> Result<Self, String> {
        config.validate()?;

        let mut population: Vec<Individual<P::Fitness>> = (0..config.population_size)
            .map(|_| Individual::unevaluated(problem.create_individual(&mut rng)))
            .collect();

        for ind in &population {
            if ind.chromosome.len() != config.chromosome_length {
                return Err(format!(
                    "problem produced a chromosome of length {}, expected {}",
                    ind.chromosome.len(),
                    config.chromosome_length
                ));
            }
        }

        evaluate_population(&problem, &mut population, config.parallel);

        let initial_best = find_best(&population).fitness.to_f64();
        Ok(Self {
            problem,
            config,
            rng,
            population,
            generation: 0,
            fitness_history: vec![initial_best],
        })
    }

    /// Runs `max_generations` further generations and reports the best
    /// individual of the resulting population.
    ///
    /// With `max_generations == 0` this returns the best of the current
    /// population unchanged. The engine keeps its state between calls, so
    /// `run(a)` followed by `run(b)` is equivalent to `run(a + b)`.
    pub fn run(&mut self, max_generations: usize) -> GaResult<P::Fitness> {
        for _ in 0..max_generations {
            self.step();
        }

        let best = find_best(&self.population);
        GaResult {
            best_chromosome: best.chromosome.clone(),
            best_fitness: best.fitness,
            generations: self.generation,
            fitness_history: self.fitness_history.clone(),
        }
    }

    /// Advances the engine by one generation.
    fn step(&mut self) {
        let pop_size = self.config.population_size;
        let elite_count = self.config.elitism_count;

        // The pairwise loop may overshoot by one; the surplus is trimmed
        // before the elite append.
        let mut next_gen: Vec<Individual<P::Fitness>> = Vec::with_capacity(pop_size + 1);
        while next_gen.len() < pop_size {
            let wheel = RouletteWheel::build(&self.population);
            let (i, j) = wheel.spin_pair(&mut self.rng);

            let (c1, c2) = one_point_crossover(
                &self.population[i].chromosome,
                &self.population[j].chromosome,
                self.config.crossover_probability,
                &mut self.rng,
            );
            let c1 = bit_flip_mutation(&c1, self.config.mutation_rate, &mut self.rng);
            let c2 = bit_flip_mutation(&c2, self.config.mutation_rate, &mut self.rng);

            next_gen.push(Individual::unevaluated(c1));
            next_gen.push(Individual::unevaluated(c2));
        }
        next_gen.truncate(pop_size - elite_count);

        evaluate_population(&self.problem, &mut next_gen, self.config.parallel);

        // Elites come from the outgoing population, carried over by value.
        next_gen.extend(elites(&self.population, elite_count));
        debug_assert_eq!(next_gen.len(), pop_size);

        self.population = next_gen;
        self.generation += 1;

        let best = find_best(&self.population);
        self.fitness_history.push(best.fitness.to_f64());
        self.problem.on_generation(self.generation, best.fitness);
    }

    /// The current population.
    pub fn population(&self) -> &[Individual<P::Fitness>] {
        &self.population
    }

    /// Number of generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness after initialization and after each generation.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Evaluate all individuals, serially or via rayon.
///
/// Selection weights are derived only after this completes, so parallel
/// evaluation cannot reorder the evolutionary trajectory.
fn evaluate_population<P: Problem>(
    problem: &P,
    population: &mut [Individual<P::Fitness>],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            ind.fitness = problem.evaluate(&ind.chromosome);
        });
    } else {
        for ind in population.iter_mut() {
            ind.fitness = problem.evaluate(&ind.chromosome);
        }
    }
}

/// The first individual with maximum fitness (ties keep population order).
fn find_best<F: Fitness>(population: &[Individual<F>]) -> &Individual<F> {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness > best.fitness {
            best = ind;
        }
    }
    best
}

/// Top `count` individuals by fitness, descending, ties in population order.
fn elites<F: Fitness>(population: &[Individual<F>], count: usize) -> Vec<Individual<F>> {
    let mut ranked: Vec<&Individual<F>> = population.iter().collect();
    // Stable sort keeps the original order among equal scores.
    ranked.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.into_iter().take(count).cloned().collect()
}
