//! # Individual
//!
//! An `Individual` is one candidate sub-solution of a single species: a
//! fixed-length vector of real genes plus the fitness it last received.
//!
//! Cloning an individual duplicates its genes, so a copy taken for elitism or
//! as a tournament winner can be mutated without touching the original.

/// A candidate sub-vector together with its fitness.
///
/// Fitness starts at `f64::NEG_INFINITY`, which marks an individual that has
/// not been evaluated yet and ranks below every evaluated one. Larger fitness
/// is always better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genes: Vec<f64>,
    pub fitness: f64,
}

impl Individual {
    /// Creates an unevaluated individual from the given genes.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates an individual with a known fitness.
    pub fn with_fitness(genes: Vec<f64>, fitness: f64) -> Self {
        Self { genes, fitness }
    }

    /// Number of genes.
    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    /// Whether a fitness value has been assigned.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != f64::NEG_INFINITY
    }
}
