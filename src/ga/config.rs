//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm engine.
///
/// Controls population size, chromosome length, operator rates, elitism,
/// parallelism, and the random seed. The record is immutable once the
/// engine is constructed.
///
/// # Builder Pattern
///
/// ```
/// use onemax_ga::ga::GaConfig;
///
/// let config = GaConfig::new(200, 40)
///     .with_crossover_probability(0.7)
///     .with_mutation_rate(0.07)
///     .with_elitism_count(2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals maintained each generation.
    ///
    /// The population size is constant at every generation boundary.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Fixed bit-vector length of every chromosome.
    pub chromosome_length: usize,

    /// Probability a crossover event is applied to a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, the parents pass through unchanged.
    pub crossover_probability: f64,

    /// Per-gene independent bit-flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of top individuals preserved unchanged each generation.
    ///
    /// Must not exceed `population_size`. With at least one elite, the best
    /// fitness in the population is non-decreasing across generations.
    pub elitism_count: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Evaluation order does not affect the evolutionary trajectory: fitness
    /// totals are aggregated only after the whole generation is scored.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Identical seed and configuration yield an
    /// identical sequence of populations.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration with the given population size and
    /// chromosome length, and conservative operator defaults.
    pub fn new(population_size: usize, chromosome_length: usize) -> Self {
        Self {
            population_size,
            chromosome_length,
            crossover_probability: 0.9,
            mutation_rate: 0.01,
            elitism_count: 1,
            parallel: false,
            seed: None,
        }
    }

    /// Sets the crossover probability, clamped to [0, 1].
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elite individuals carried over each generation.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.chromosome_length == 0 {
            return Err("chromosome_length must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err("crossover_probability must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if self.elitism_count > self.population_size {
            return Err("elitism_count must not exceed population_size".into());
        }
        Ok(())
    }
}
