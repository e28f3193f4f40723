//! # Population
//!
//! A `Population` is the fixed-size set of individuals evolved for one
//! species. Every gene of every individual is kept inside the population's
//! `bounds`.

use crate::{
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct Population {
    size: usize,
    dimension: usize,
    bounds: (f64, f64),
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `size` individuals with `dimension` genes each,
    /// drawn uniformly from `bounds`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `size` is zero or the bounds
    /// are not an ordered pair of finite numbers
    /// with a finite width.
    pub fn new(
        size: usize,
        dimension: usize,
        bounds: (f64, f64),
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        let (low, high) = bounds;
        if !(low.is_finite() && high.is_finite()) || low >= high || !(high - low).is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Bounds must be finite with min < max and a finite width, got ({}, {})",
                low, high
            )));
        }

        let mut population = Self {
            size,
            dimension,
            bounds,
            individuals: Vec::with_capacity(size),
        };
        population.initialize(rng);
        Ok(population)
    }

    /// Refills the population with `size` fresh, unevaluated individuals.
    pub fn initialize(&mut self, rng: &mut RandomNumberGenerator) {
        let (low, high) = self.bounds;
        let dimension = self.dimension;
        self.individuals = (0..self.size)
            .map(|_| Individual::new((0..dimension).map(|_| rng.uniform(low, high)).collect()))
            .collect();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Returns the individual with the highest fitness.
    ///
    /// Ties go to the individual encountered first.
    pub fn best(&self) -> Result<&Individual> {
        self.individuals
            .iter()
            .reduce(|best, candidate| {
                if candidate.fitness > best.fitness {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Returns the position of the individual with the lowest fitness.
    ///
    /// Ties go to the individual encountered first.
    pub fn worst_index(&self) -> Result<usize> {
        worst_position(&self.individuals).ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Returns one individual chosen uniformly at random.
    pub fn random_individual(&self, rng: &mut RandomNumberGenerator) -> Result<&Individual> {
        if self.individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(&self.individuals[rng.index(self.individuals.len())])
    }

    /// Installs a new generation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the generation does not hold
    /// exactly `size` individuals.
    pub fn replace(&mut self, generation: Vec<Individual>) -> Result<()> {
        if generation.len() != self.size {
            return Err(GeneticError::Configuration(format!(
                "Generation length ({}) doesn't match population size ({})",
                generation.len(),
                self.size
            )));
        }
        self.individuals = generation;
        Ok(())
    }
}

/// Position of the lowest-fitness individual, first one on ties.
pub(crate) fn worst_position(individuals: &[Individual]) -> Option<usize> {
    individuals
        .iter()
        .enumerate()
        .reduce(|worst, candidate| {
            if candidate.1.fitness < worst.1.fitness {
                candidate
            } else {
                worst
            }
        })
        .map(|(idx, _)| idx)
}
