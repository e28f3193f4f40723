//! # CooperativeCoevolution
//!
//! Optimizes a full solution vector by splitting it into species, each evolved
//! by its own [`GeneticAlgorithm`]. An individual of one species is only ever
//! scored as part of a complete solution, with the other species' blocks filled
//! in by collaborators drawn from their current populations.
//!
//! ## Example
//!
//! ```rust
//! use ccea::evolution::{CoevolutionOptions, CooperativeCoevolution};
//!
//! let options = CoevolutionOptions::builder()
//!     .dimensions(6)
//!     .num_species(2)
//!     .population_size(10)
//!     .generations(5)
//!     .seed(1)
//!     .build();
//!
//! let neg_sphere = |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>();
//! let mut ccea = CooperativeCoevolution::new(neg_sphere, options).unwrap();
//! let best = ccea.run().unwrap();
//!
//! assert_eq!(best.solution.len(), 6);
//! assert_eq!(ccea.best_fitness_history().len(), 5);
//! ```

use std::borrow::Borrow;
use std::cell::Cell;

use tracing::{debug, info};

use super::{challenge::Challenge, options::CoevolutionOptions, species::SpeciesLayout};
use crate::{
    error::{GeneticError, Result},
    genetic::GeneticAlgorithm,
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
};

/// A complete solution vector and its fitness.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct EvolutionResult {
    /// The full-length solution.
    pub solution: Vec<f64>,
    /// The fitness of the solution.
    pub score: f64,
}

/// Everything cooperative evaluation reads: the objective, the species layout
/// and all populations. Kept apart from the random source and the genetic
/// algorithms so one species can breed while the others are read.
#[derive(Debug)]
struct Ecosystem<C> {
    challenge: C,
    layout: SpeciesLayout,
    populations: Vec<Population>,
    collaboration_size: usize,
    evaluations: Cell<usize>,
}

impl<C: Challenge> Ecosystem<C> {
    /// Scores a full solution, counting the call.
    fn score(&self, solution: &[f64]) -> Result<f64> {
        let score = self.challenge.score(solution);
        self.evaluations.set(self.evaluations.get() + 1);

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }
        Ok(score)
    }

    fn check_species(&self, species: usize) -> Result<()> {
        if species >= self.populations.len() {
            return Err(GeneticError::Configuration(format!(
                "Species index {} out of range for {} species",
                species,
                self.populations.len()
            )));
        }
        Ok(())
    }

    /// Picks collaborators from every species other than `species`, in
    /// species order: the current best when `collaboration_size` is 1,
    /// otherwise `collaboration_size` random draws with replacement.
    fn choose_collaborators(
        &self,
        species: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Vec<&Individual>>> {
        self.check_species(species)?;

        let mut sets = Vec::with_capacity(self.populations.len().saturating_sub(1));
        for (index, population) in self.populations.iter().enumerate() {
            if index == species {
                continue;
            }
            let set = if self.collaboration_size == 1 {
                vec![population.best()?]
            } else {
                (0..self.collaboration_size)
                    .map(|_| population.random_individual(rng))
                    .collect::<Result<Vec<_>>>()?
            };
            sets.push(set);
        }
        Ok(sets)
    }

    /// Builds the full solution around `individual` and scores it.
    ///
    /// `collaborators` holds one set per other species, in species order.
    /// When absent, fresh collaborators are chosen for this call.
    fn evaluate_individual<T>(
        &self,
        species: usize,
        individual: &Individual,
        collaborators: Option<&[Vec<T>]>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<f64>
    where
        T: Borrow<Individual>,
    {
        match collaborators {
            Some(collaborators) => self.evaluate_with(species, individual, collaborators, rng),
            None => {
                let chosen = self.choose_collaborators(species, rng)?;
                self.evaluate_with(species, individual, &chosen, rng)
            }
        }
    }

    fn evaluate_with<T>(
        &self,
        species: usize,
        individual: &Individual,
        collaborators: &[Vec<T>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<f64>
    where
        T: Borrow<Individual>,
    {
        self.check_species(species)?;
        let others = self.populations.len() - 1;
        if collaborators.len() != others {
            return Err(GeneticError::Configuration(format!(
                "Expected {} collaborator sets, got {}",
                others,
                collaborators.len()
            )));
        }

        let mut solution = vec![0.0; self.layout.dimensions()];
        self.layout.place(&mut solution, species, &individual.genes)?;

        let other_species = (0..self.populations.len()).filter(|&index| index != species);
        for (index, set) in other_species.zip(collaborators) {
            if set.is_empty() {
                return Err(GeneticError::EmptyPopulation);
            }
            let partner = if self.collaboration_size == 1 {
                &set[0]
            } else {
                &set[rng.index(set.len())]
            };
            let partner = <T as Borrow<Individual>>::borrow(partner);
            self.layout.place(&mut solution, index, &partner.genes)?;
        }

        self.score(&solution)
    }

    fn best_solution(&self) -> Result<EvolutionResult> {
        let mut solution = vec![0.0; self.layout.dimensions()];
        for (species, population) in self.populations.iter().enumerate() {
            self.layout
                .place(&mut solution, species, &population.best()?.genes)?;
        }

        let score = self.score(&solution)?;
        Ok(EvolutionResult { solution, score })
    }
}

/// Cooperative coevolutionary optimizer.
///
/// Maximizes `challenge` over `[min, max]^dimensions`. A single random source,
/// seeded from the options when a seed is given, drives every stochastic
/// decision, so seeded runs are reproducible.
#[derive(Debug)]
pub struct CooperativeCoevolution<C: Challenge> {
    options: CoevolutionOptions,
    ecosystem: Ecosystem<C>,
    algorithms: Vec<GeneticAlgorithm>,
    rng: RandomNumberGenerator,
    best_fitness_history: Vec<f64>,
    best_solution_history: Vec<Vec<f64>>,
}

impl<C: Challenge> CooperativeCoevolution<C> {
    /// Validates `options` and creates one randomly initialized population and
    /// one genetic algorithm per species.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid.
    pub fn new(challenge: C, options: CoevolutionOptions) -> Result<Self> {
        let rng = match options.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };
        Self::with_rng(challenge, options, rng)
    }

    /// Like [`CooperativeCoevolution::new`], drawing from the given random
    /// source instead of one built from the options' seed.
    pub fn with_rng(
        challenge: C,
        options: CoevolutionOptions,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let layout = SpeciesLayout::new(options.get_dimensions(), options.get_num_species());
        let populations = layout
            .block_sizes()
            .into_iter()
            .map(|dimension| {
                Population::new(
                    options.get_population_size(),
                    dimension,
                    options.get_bounds(),
                    &mut rng,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let algorithms = (0..layout.num_species())
            .map(|_| {
                GeneticAlgorithm::new(options.get_mutation_rate(), options.get_crossover_rate())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ecosystem: Ecosystem {
                challenge,
                layout,
                populations,
                collaboration_size: options.get_collaboration_size(),
                evaluations: Cell::new(0),
            },
            options,
            algorithms,
            rng,
            best_fitness_history: Vec::new(),
            best_solution_history: Vec::new(),
        })
    }

    pub fn options(&self) -> &CoevolutionOptions {
        &self.options
    }

    pub fn layout(&self) -> &SpeciesLayout {
        &self.ecosystem.layout
    }

    /// Block size of each species.
    pub fn split_dimensions(&self) -> Vec<usize> {
        self.ecosystem.layout.block_sizes()
    }

    pub fn populations(&self) -> &[Population] {
        &self.ecosystem.populations
    }

    pub fn challenge(&self) -> &C {
        &self.ecosystem.challenge
    }

    /// Number of times the challenge has been scored so far.
    pub fn evaluations(&self) -> usize {
        self.ecosystem.evaluations.get()
    }

    /// Best-of-generation fitness, one entry per completed generation.
    pub fn best_fitness_history(&self) -> &[f64] {
        &self.best_fitness_history
    }

    /// Best-of-generation solution, one entry per completed generation.
    pub fn best_solution_history(&self) -> &[Vec<f64>] {
        &self.best_solution_history
    }

    /// Draws a collaborator set for every species other than `species`.
    ///
    /// The sets are copies, in species order, ready to pass to
    /// [`CooperativeCoevolution::evaluate_individual`].
    pub fn choose_collaborators(&mut self, species: usize) -> Result<Vec<Vec<Individual>>> {
        let sets = self
            .ecosystem
            .choose_collaborators(species, &mut self.rng)?;
        Ok(sets
            .into_iter()
            .map(|set| set.into_iter().cloned().collect())
            .collect())
    }

    /// Scores `individual` as a member of `species`.
    ///
    /// With `collaborators` absent, a fresh collaborator set is drawn for this
    /// call alone. The returned value is the raw challenge score of the
    /// assembled solution.
    ///
    /// # Errors
    ///
    /// Fails if `species` is out of range, the genes or collaborators don't
    /// fit the layout, or the challenge returns a non-finite score.
    pub fn evaluate_individual(
        &mut self,
        species: usize,
        individual: &Individual,
        collaborators: Option<&[Vec<Individual>]>,
    ) -> Result<f64> {
        self.ecosystem
            .evaluate_individual(species, individual, collaborators, &mut self.rng)
    }

    /// Scores every individual of `species`, each against its own freshly
    /// drawn collaborators.
    pub fn evaluate_population(&mut self, species: usize) -> Result<()> {
        self.ecosystem.check_species(species)?;

        let ecosystem = &self.ecosystem;
        let rng = &mut self.rng;
        let scores = ecosystem.populations[species]
            .individuals()
            .iter()
            .map(|individual| {
                ecosystem.evaluate_individual::<&Individual>(species, individual, None, rng)
            })
            .collect::<Result<Vec<_>>>()?;

        for (individual, score) in self.ecosystem.populations[species]
            .individuals_mut()
            .iter_mut()
            .zip(scores)
        {
            individual.fitness = score;
        }
        Ok(())
    }

    /// Advances one species by a generation. Its offspring are scored against
    /// the other species' populations as they stand now.
    pub fn evolve_species(&mut self, species: usize) -> Result<()> {
        self.ecosystem.check_species(species)?;

        let ecosystem = &self.ecosystem;
        let generation = self.algorithms[species].next_generation(
            &ecosystem.populations[species],
            &mut self.rng,
            |individual, rng| {
                ecosystem.evaluate_individual::<&Individual>(species, individual, None, rng)
            },
        )?;
        self.ecosystem.populations[species].replace(generation)?;

        debug!(
            species,
            best_fitness = self.ecosystem.populations[species].best()?.fitness,
            "species evolved"
        );
        Ok(())
    }

    /// Assembles the best individual of every species into one solution and
    /// scores it.
    pub fn best_solution(&self) -> Result<EvolutionResult> {
        self.ecosystem.best_solution()
    }

    /// Runs the optimizer.
    ///
    /// Evaluates every population once, then for each generation evolves the
    /// species in order `0..num_species` and records the best composite
    /// solution. Species later in the order cooperate with the already
    /// updated populations of earlier ones. Returns the final best solution.
    ///
    /// With zero generations the histories stay empty and the result is the
    /// best solution of the initial populations.
    ///
    /// # Errors
    ///
    /// Stops at the first evaluation failure and returns it.
    pub fn run(&mut self) -> Result<EvolutionResult> {
        let generations = self.options.get_generations();
        let log_interval = self.options.get_log_interval();

        info!(
            dimensions = self.ecosystem.layout.dimensions(),
            species = self.ecosystem.layout.num_species(),
            blocks = ?self.ecosystem.layout.block_sizes(),
            population_size = self.options.get_population_size(),
            generations,
            collaboration_size = self.ecosystem.collaboration_size,
            "starting cooperative coevolution"
        );

        for species in 0..self.ecosystem.layout.num_species() {
            self.evaluate_population(species)?;
        }

        for generation in 0..generations {
            for species in 0..self.ecosystem.layout.num_species() {
                self.evolve_species(species)?;
            }

            let best = self.best_solution()?;
            if log_interval > 0 && (generation + 1) % log_interval == 0 {
                info!(
                    generation = generation + 1,
                    generations,
                    best_fitness = best.score,
                    "generation complete"
                );
            }
            self.best_fitness_history.push(best.score);
            self.best_solution_history.push(best.solution);
        }

        let best = self.best_solution()?;
        info!(
            best_fitness = best.score,
            evaluations = self.evaluations(),
            "cooperative coevolution finished"
        );
        Ok(best)
    }
}
