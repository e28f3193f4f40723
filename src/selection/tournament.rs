use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws a group of distinct individuals from the population
/// and copies out the fittest one. Tournaments are independent, so the same
/// individual may win several times.
///
/// The tournament size is either fixed or, by default, derived from the
/// population: `max(2, round(0.1 * population_size))`, where halves round
/// away from zero (25 individuals give a tournament of 3).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection {
    tournament_size: Option<usize>,
}

impl TournamentSelection {
    /// Creates a TournamentSelection with a fixed tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size: Some(tournament_size),
        })
    }

    /// Tournament size used for a population of `population_size` individuals.
    ///
    /// Without a fixed size this is `max(2, round(0.1 * population_size))`,
    /// with `.5` rounded away from zero. Never larger than the population
    /// itself.
    pub fn tournament_size(&self, population_size: usize) -> usize {
        let size = self.tournament_size.unwrap_or_else(|| {
            let scaled = (0.1 * population_size as f64).round() as usize;
            scaled.max(2)
        });
        size.min(population_size)
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// Participants are drawn without replacement; on equal fitness the
    /// participant drawn first wins.
    fn run_tournament(&self, population: &[Individual], rng: &mut RandomNumberGenerator) -> usize {
        let participants =
            rng.sample_indices(population.len(), self.tournament_size(population.len()));

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if population[idx].fitness > population[best_idx].fitness {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(population, rng)].clone())
            .collect())
    }
}
