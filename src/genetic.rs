//! # GeneticAlgorithm
//!
//! Advances a single [`Population`] by one generation: tournament selection,
//! pairwise breeding, evaluation through a caller-supplied function, and
//! elitism. The evaluation function is the only link to the outside world,
//! which is how the cooperative optimizer couples otherwise independent
//! species.
//!
//! ## Example
//!
//! ```rust
//! use ccea::genetic::GeneticAlgorithm;
//! use ccea::population::Population;
//! use ccea::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let mut population = Population::new(10, 3, (-1.0, 1.0), &mut rng).unwrap();
//! let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();
//!
//! let sphere = |genes: &[f64]| -genes.iter().map(|g| g * g).sum::<f64>();
//! ga.evolve(&mut population, &mut rng, |individual, _| Ok(sphere(&individual.genes)))
//!     .unwrap();
//!
//! assert_eq!(population.individuals().len(), 10);
//! ```

use crate::{
    breeding::{ArithmeticBreeding, BreedStrategy},
    error::{GeneticError, Result},
    individual::Individual,
    population::{worst_position, Population},
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

/// Generational genetic algorithm over real-valued individuals.
///
/// The algorithm holds only its operators; the population it advances is
/// passed in, so one population can be read by other species while this one
/// breeds.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<S = TournamentSelection, B = ArithmeticBreeding>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    selection: S,
    breeding: B,
}

impl GeneticAlgorithm {
    /// Creates a genetic algorithm with tournament selection and arithmetic
    /// breeding at the given operator rates.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a rate lies outside `[0, 1]`.
    pub fn new(mutation_rate: f64, crossover_rate: f64) -> Result<Self> {
        Ok(Self {
            selection: TournamentSelection::default(),
            breeding: ArithmeticBreeding::new(crossover_rate, mutation_rate)?,
        })
    }
}

impl<S, B> GeneticAlgorithm<S, B>
where
    S: SelectionStrategy,
    B: BreedStrategy,
{
    pub fn with_strategies(selection: S, breeding: B) -> Self {
        Self {
            selection,
            breeding,
        }
    }

    pub fn selection_strategy(&self) -> &S {
        &self.selection
    }

    pub fn breed_strategy(&self) -> &B {
        &self.breeding
    }

    /// Selects `size` parents from the population as independent copies.
    pub fn selection(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        self.selection
            .select(population.individuals(), population.size(), rng)
    }

    /// Builds and scores the generation that follows `population`, without
    /// installing it.
    ///
    /// `evaluate` is called once per offspring, in order. After scoring, the
    /// weakest offspring is overwritten with a copy of the previous
    /// generation's best when that best is strictly fitter, so the best
    /// fitness of a population never decreases.
    ///
    /// # Errors
    ///
    /// Propagates failures from selection, breeding and `evaluate`, and
    /// returns `GeneticError::FitnessCalculation` when `evaluate` yields a
    /// non-finite score.
    pub fn next_generation<F>(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
        mut evaluate: F,
    ) -> Result<Vec<Individual>>
    where
        F: FnMut(&Individual, &mut RandomNumberGenerator) -> Result<f64>,
    {
        let best_old = population.best()?.clone();

        let selected = self.selection(population, rng)?;
        let mut offspring =
            self.breeding
                .breed(&selected, population.bounds(), population.size(), rng)?;

        for child in offspring.iter_mut() {
            let score = evaluate(child, rng)?;
            if !score.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }
            child.fitness = score;
        }

        if let Some(worst) = worst_position(&offspring) {
            if best_old.fitness > offspring[worst].fitness {
                offspring[worst] = best_old;
            }
        }

        Ok(offspring)
    }

    /// Advances `population` by one generation in place.
    pub fn evolve<F>(
        &self,
        population: &mut Population,
        rng: &mut RandomNumberGenerator,
        evaluate: F,
    ) -> Result<()>
    where
        F: FnMut(&Individual, &mut RandomNumberGenerator) -> Result<f64>,
    {
        let generation = self.next_generation(population, rng, evaluate)?;
        population.replace(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (f64, f64) = (-5.12, 5.12);

    fn neg_sphere(individual: &Individual, _: &mut RandomNumberGenerator) -> Result<f64> {
        Ok(-individual.genes.iter().map(|g| g * g).sum::<f64>())
    }

    fn evaluated_population(size: usize, seed: u64) -> (Population, RandomNumberGenerator) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mut population = Population::new(size, 4, BOUNDS, &mut rng).unwrap();
        for individual in population.individuals_mut() {
            individual.fitness = neg_sphere(individual, &mut rng).unwrap();
        }
        (population, rng)
    }

    #[test]
    fn test_invalid_rates() {
        assert!(GeneticAlgorithm::new(1.2, 0.5).is_err());
        assert!(GeneticAlgorithm::new(0.1, -0.5).is_err());
    }

    #[test]
    fn test_with_strategies_uses_given_selection() {
        let (population, mut rng) = evaluated_population(6, 8);
        let ga = GeneticAlgorithm::with_strategies(
            TournamentSelection::new(6).unwrap(),
            ArithmeticBreeding::new(0.8, 0.1).unwrap(),
        );
        assert_eq!(ga.selection_strategy().tournament_size(6), 6);
        assert_eq!(ga.breed_strategy().crossover_rate(), 0.8);

        // A tournament over the whole population always picks its best.
        let best = population.best().unwrap().clone();
        let selected = ga.selection(&population, &mut rng).unwrap();
        assert_eq!(selected.len(), 6);
        assert!(selected.iter().all(|individual| *individual == best));
    }

    #[test]
    fn test_selection_size() {
        let (population, mut rng) = evaluated_population(9, 1);
        let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();
        assert_eq!(ga.selection(&population, &mut rng).unwrap().len(), 9);
    }

    #[test]
    fn test_population_size_preserved() {
        for size in [1, 2, 3, 7, 10, 21] {
            let (mut population, mut rng) = evaluated_population(size, size as u64);
            let ga = GeneticAlgorithm::new(0.2, 0.8).unwrap();
            for _ in 0..5 {
                ga.evolve(&mut population, &mut rng, neg_sphere).unwrap();
                assert_eq!(population.individuals().len(), size);
            }
        }
    }

    #[test]
    fn test_evaluate_called_once_per_individual() {
        let (mut population, mut rng) = evaluated_population(11, 2);
        let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();
        let mut calls = 0;

        ga.evolve(&mut population, &mut rng, |individual, rng| {
            calls += 1;
            neg_sphere(individual, rng)
        })
        .unwrap();

        assert_eq!(calls, 11);
        assert!(population.individuals().iter().all(Individual::is_evaluated));
    }

    #[test]
    fn test_elitism_keeps_best() {
        let (mut population, mut rng) = evaluated_population(20, 3);
        let ga = GeneticAlgorithm::new(0.5, 1.0).unwrap();

        let mut previous = population.best().unwrap().fitness;
        for _ in 0..30 {
            ga.evolve(&mut population, &mut rng, neg_sphere).unwrap();
            let current = population.best().unwrap().fitness;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_elitism_replaces_worst_with_previous_best() {
        let (mut population, mut rng) = evaluated_population(6, 4);
        let best_before = population.best().unwrap().clone();
        let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();

        // Every offspring scores below the previous best, so the elite must survive.
        ga.evolve(&mut population, &mut rng, |_, _| Ok(-1.0e9)).unwrap();

        let survivors: Vec<_> = population
            .individuals()
            .iter()
            .filter(|i| i.fitness == best_before.fitness)
            .collect();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].genes, best_before.genes);
        assert_eq!(population.worst_index().unwrap(), 1);
    }

    #[test]
    fn test_genes_stay_within_bounds() {
        let (mut population, mut rng) = evaluated_population(12, 5);
        let ga = GeneticAlgorithm::new(1.0, 1.0).unwrap();
        for _ in 0..20 {
            ga.evolve(&mut population, &mut rng, neg_sphere).unwrap();
            for individual in population.individuals() {
                assert!(individual
                    .genes
                    .iter()
                    .all(|g| (BOUNDS.0..=BOUNDS.1).contains(g)));
            }
        }
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let (mut population, mut rng) = evaluated_population(4, 6);
        let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();
        let before = population.individuals().to_vec();

        let result = ga.evolve(&mut population, &mut rng, |_, _| Ok(f64::NAN));

        assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
        assert_eq!(population.individuals(), before.as_slice());
    }

    #[test]
    fn test_evaluate_error_propagates() {
        let (mut population, mut rng) = evaluated_population(4, 7);
        let ga = GeneticAlgorithm::new(0.1, 0.8).unwrap();

        let result = ga.evolve(&mut population, &mut rng, |_, _| {
            Err(GeneticError::FitnessCalculation("objective failed".to_string()))
        });

        assert!(result.is_err());
    }
}
