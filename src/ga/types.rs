//! Core type and trait definitions for the GA engine.
//!
//! [`Chromosome`] is the fixed representation — a fixed-length bit vector —
//! while [`Problem`] and [`Fitness`] define the contract between the generic
//! engine and a domain-specific instantiation.

use rand::Rng;
use std::fmt;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable. Higher fitness
/// is considered better (maximization), and values must be non-negative:
/// they are used directly as selection weights by the roulette wheel.
///
/// Built-in implementations exist for `u32`, `u64`, and `usize`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + fmt::Debug + 'static {
    /// Returns the zero score.
    ///
    /// Used as the placeholder for not-yet-evaluated individuals and as the
    /// degenerate total in selection.
    fn zero() -> Self;

    /// Converts the fitness to `f64` for selection weights and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for u32 {
    fn zero() -> Self {
        0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u64 {
    fn zero() -> Self {
        0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for usize {
    fn zero() -> Self {
        0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A fixed-length bit-vector candidate solution.
///
/// Chromosomes are immutable values: the genetic operators return new
/// chromosomes rather than mutating shared ones, so a parent and its
/// offspring never alias. Every chromosome produced by the engine has
/// exactly the configured length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from a bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a random chromosome of length `len`, each bit fair-coin.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let bits = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The gene at position `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// The underlying bit slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Count of set bits — the One-Max score.
    pub fn count_ones(&self) -> u32 {
        self.bits.iter().filter(|&&b| b).count() as u32
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for Chromosome {
    /// Renders the chromosome as a digit list, e.g. `[1, 0, 1, 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &b) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(b))?;
        }
        write!(f, "]")
    }
}

/// A chromosome paired with its cached fitness.
///
/// The engine evaluates offspring once per generation and stores the score
/// here, so selection and elitism never re-invoke [`Problem::evaluate`].
#[derive(Debug, Clone)]
pub struct Individual<F: Fitness> {
    /// The candidate solution.
    pub chromosome: Chromosome,

    /// Cached score, written by the engine after evaluation.
    pub fitness: F,
}

impl<F: Fitness> Individual<F> {
    /// Wraps a chromosome with a zero placeholder fitness.
    pub(crate) fn unevaluated(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: F::zero(),
        }
    }
}

/// Defines a GA optimization problem over bit-vector chromosomes.
///
/// This is the trait users implement to plug domain-specific logic into the
/// generic engine:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to score a chromosome
///
/// The genetic operators themselves (selection, crossover, mutation,
/// elitism) are representation-level and stay inside the engine.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel using rayon.
pub trait Problem: Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Creates a random chromosome.
    ///
    /// Called during population initialization. Must produce a chromosome of
    /// exactly [`GaConfig::chromosome_length`](super::GaConfig) genes; the
    /// engine rejects the problem at construction otherwise.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome;

    /// Evaluates a chromosome and returns its fitness.
    ///
    /// Must be pure and deterministic for identical input, and non-negative.
    /// The engine may call this in parallel across the population.
    fn evaluate(&self, chromosome: &Chromosome) -> Self::Fitness;

    /// Called at the end of each generation with the current best fitness.
    ///
    /// Useful for logging or external progress reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}
