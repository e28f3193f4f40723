use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies choose the parents of the next generation from the
/// current one, based on the fitness stored on each individual. Selected
/// individuals are returned as independent copies.
///
/// # Examples
///
/// ```
/// use ccea::individual::Individual;
/// use ccea::rng::RandomNumberGenerator;
/// use ccea::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Individual::with_fitness(vec![1.0], 0.5),
///     Individual::with_fitness(vec![2.0], 0.8),
///     Individual::with_fitness(vec![3.0], 0.3),
/// ];
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let selection = TournamentSelection::default();
/// let selected = selection.select(&population, 3, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 3);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}
