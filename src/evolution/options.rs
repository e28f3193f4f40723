//! # CoevolutionOptions
//!
//! The `CoevolutionOptions` struct represents the configuration of a cooperative
//! coevolution run: the shape of the search space, how it is split into species,
//! and the parameters of the genetic algorithm each species runs.
//!
//! ## Example
//!
//! ```rust
//! use ccea::evolution::options::CoevolutionOptions;
//!
//! // Create a new CoevolutionOptions instance with custom parameters
//! let custom_options = CoevolutionOptions::builder()
//!     .dimensions(10)
//!     .bounds(-5.12, 5.12)
//!     .num_species(2)
//!     .population_size(20)
//!     .generations(20)
//!     .seed(42)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new CoevolutionOptions instance with default parameters
//! let default_options = CoevolutionOptions::default();
//! assert_eq!(default_options.get_num_species(), 4);
//! ```
//!
//! ## Fields
//!
//! - `dimensions`: Length of the full solution vector.
//! - `bounds`: `(min, max)` applied to every gene of every species.
//! - `num_species`: Number of contiguous blocks the solution is split into.
//! - `population_size`: Individuals per species.
//! - `generations`: Number of generational rounds; zero evaluates the initial
//!   populations only.
//! - `mutation_rate`: Per-gene mutation probability.
//! - `crossover_rate`: Per-pair crossover probability.
//! - `collaboration_size`: 1 pairs every evaluation with the other species' best
//!   individuals, larger values sample that many random collaborators.
//! - `log_interval`: Emit a progress line every this many generations; zero
//!   disables progress lines.
//! - `seed`: Seed of the shared random source, or `None` for system entropy.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoevolutionOptions {
    dimensions: usize,
    bounds: (f64, f64),
    num_species: usize,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    collaboration_size: usize,
    log_interval: usize,
    seed: Option<u64>,
}

impl CoevolutionOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dimensions: usize,
        bounds: (f64, f64),
        num_species: usize,
        population_size: usize,
        generations: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        collaboration_size: usize,
    ) -> Self {
        Self {
            dimensions,
            bounds,
            num_species,
            population_size,
            generations,
            mutation_rate,
            crossover_rate,
            collaboration_size,
            log_interval: 10,
            seed: None,
        }
    }

    /// Checks every parameter and reports the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - `dimensions`, `num_species`, `population_size` or `collaboration_size` is zero
    /// - `num_species` exceeds `dimensions`
    /// - `bounds` are not finite or `min >= max`
    /// - a rate lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(GeneticError::Configuration(
                "Dimensions cannot be zero".to_string(),
            ));
        }
        if self.num_species == 0 {
            return Err(GeneticError::Configuration(
                "Number of species cannot be zero".to_string(),
            ));
        }
        if self.num_species > self.dimensions {
            return Err(GeneticError::Configuration(format!(
                "Number of species ({}) exceeds dimensions ({})",
                self.num_species, self.dimensions
            )));
        }
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        let (low, high) = self.bounds;
        if !(low.is_finite() && high.is_finite()) || low >= high || !(high - low).is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Bounds must be finite with min < max and a finite width, got ({}, {})",
                low, high
            )));
        }
        for (name, rate) in [
            ("Mutation", self.mutation_rate),
            ("Crossover", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} rate must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }
        if self.collaboration_size == 0 {
            return Err(GeneticError::Configuration(
                "Collaboration size cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn get_bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn get_num_species(&self) -> usize {
        self.num_species
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_collaboration_size(&self) -> usize {
        self.collaboration_size
    }

    pub fn get_log_interval(&self) -> usize {
        self.log_interval
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_dimensions(&mut self, dimensions: usize) {
        self.dimensions = dimensions;
    }

    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.bounds = (min, max);
    }

    pub fn set_num_species(&mut self, num_species: usize) {
        self.num_species = num_species;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_generations(&mut self, generations: usize) {
        self.generations = generations;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_collaboration_size(&mut self, collaboration_size: usize) {
        self.collaboration_size = collaboration_size;
    }

    pub fn set_log_interval(&mut self, log_interval: usize) {
        self.log_interval = log_interval;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Returns a builder for creating a `CoevolutionOptions` instance.
    ///
    /// Unset fields fall back to the values of [`CoevolutionOptions::default`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccea::evolution::options::CoevolutionOptions;
    ///
    /// let options = CoevolutionOptions::builder()
    ///     .dimensions(12)
    ///     .num_species(3)
    ///     .collaboration_size(3)
    ///     .build();
    /// assert_eq!(options.get_population_size(), 50);
    /// ```
    pub fn builder() -> CoevolutionOptionsBuilder {
        CoevolutionOptionsBuilder::default()
    }
}

impl Default for CoevolutionOptions {
    fn default() -> Self {
        Self {
            dimensions: 30,
            bounds: (-5.12, 5.12),
            num_species: 4,
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            collaboration_size: 1,
            log_interval: 10,
            seed: None,
        }
    }
}

/// Builder for `CoevolutionOptions`.
///
/// Provides a fluent interface for constructing `CoevolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct CoevolutionOptionsBuilder {
    dimensions: Option<usize>,
    bounds: Option<(f64, f64)>,
    num_species: Option<usize>,
    population_size: Option<usize>,
    generations: Option<usize>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    collaboration_size: Option<usize>,
    log_interval: Option<usize>,
    seed: Option<u64>,
}

impl CoevolutionOptionsBuilder {
    pub fn dimensions(mut self, value: usize) -> Self {
        self.dimensions = Some(value);
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub fn num_species(mut self, value: usize) -> Self {
        self.num_species = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn collaboration_size(mut self, value: usize) -> Self {
        self.collaboration_size = Some(value);
        self
    }

    pub fn log_interval(mut self, value: usize) -> Self {
        self.log_interval = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `CoevolutionOptions` instance. Validation happens when the
    /// options are handed to the optimizer.
    pub fn build(self) -> CoevolutionOptions {
        let defaults = CoevolutionOptions::default();
        CoevolutionOptions {
            dimensions: self.dimensions.unwrap_or(defaults.dimensions),
            bounds: self.bounds.unwrap_or(defaults.bounds),
            num_species: self.num_species.unwrap_or(defaults.num_species),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            collaboration_size: self
                .collaboration_size
                .unwrap_or(defaults.collaboration_size),
            log_interval: self.log_interval.unwrap_or(defaults.log_interval),
            seed: self.seed.or(defaults.seed),
        }
    }
}
