//! Generic evolutionary-search engine with a One-Max instantiation.
//!
//! Provides a small, reusable genetic algorithm skeleton over fixed-length
//! bit-vector chromosomes. The evolutionary mechanics — fitness-proportionate
//! (roulette wheel) selection, one-point crossover, independent bit-flip
//! mutation, and truncation-based elitism — are generic; a concrete problem
//! plugs in by implementing [`ga::Problem`], which specifies how to create
//! and evaluate individuals.
//!
//! # Modules
//!
//! - [`ga`]: The engine — configuration, traits, operators, and the
//!   generational loop.
//! - [`onemax`]: The One-Max problem (maximize the count of set bits),
//!   the canonical sanity benchmark for GA machinery.
//!
//! # Example
//!
//! ```
//! use onemax_ga::ga::{GaConfig, GaEngine};
//! use onemax_ga::onemax::OneMax;
//!
//! let config = GaConfig::new(50, 20)
//!     .with_crossover_probability(0.7)
//!     .with_mutation_rate(0.05)
//!     .with_elitism_count(2)
//!     .with_seed(42);
//!
//! let mut engine = GaEngine::new(OneMax::new(20), config).unwrap();
//! let result = engine.run(100);
//! assert!(result.best_fitness <= 20);
//! ```

pub mod ga;
pub mod onemax;
