//! Genetic Algorithm engine.
//!
//! A generic evolutionary loop over fixed-length bit-vector chromosomes.
//! Users define their problem by implementing [`Problem`], which specifies
//! how to create random individuals and how to score them.
//!
//! # Core Traits
//!
//! - [`Fitness`]: A non-negative, ordered score (higher is better)
//! - [`Problem`]: Problem definition — initialization and evaluation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, operator rates, seed)
//! - [`GaEngine`]: Owns the population and executes the generational loop
//! - [`GaResult`]: Final best individual with statistics
//!
//! # Submodules
//!
//! - [`selection`]: Fitness-proportionate (roulette wheel) sampling
//! - [`operators`]: One-point crossover and independent bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaEngine, GaResult};
pub use selection::RouletteWheel;
pub use types::{Chromosome, Fitness, Individual, Problem};
