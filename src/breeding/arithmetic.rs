//! # ArithmeticBreeding
//!
//! Real-valued breeding: parents are paired in order, each pair is blended by
//! arithmetic crossover, and every child then undergoes per-gene Gaussian
//! mutation clamped to the population bounds.

use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Mutation noise standard deviation as a fraction of the bounds width.
const MUTATION_STRENGTH: f64 = 0.1;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ArithmeticBreeding {
    crossover_rate: f64,
    mutation_rate: f64,
}

impl ArithmeticBreeding {
    /// Creates a breeding strategy with the given operator probabilities.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a rate lies outside `[0, 1]`.
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Result<Self> {
        for (name, rate) in [("crossover", crossover_rate), ("mutation", mutation_rate)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} rate must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(Self {
            crossover_rate,
            mutation_rate,
        })
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Arithmetic crossover.
    ///
    /// With probability `1 - crossover_rate` the parents are returned as
    /// copies. Otherwise a single `alpha` is drawn from `[0, 1)` and the
    /// children are `alpha * p1 + (1 - alpha) * p2` and
    /// `(1 - alpha) * p1 + alpha * p2`, both unevaluated.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> (Individual, Individual) {
        if rng.probability() >= self.crossover_rate {
            return (parent1.clone(), parent2.clone());
        }

        let alpha = rng.probability();
        let blend = |a: f64, b: f64| alpha * a + (1.0 - alpha) * b;

        let genes1 = parent1
            .genes
            .iter()
            .zip(&parent2.genes)
            .map(|(&a, &b)| blend(a, b))
            .collect();
        let genes2 = parent1
            .genes
            .iter()
            .zip(&parent2.genes)
            .map(|(&a, &b)| blend(b, a))
            .collect();

        (Individual::new(genes1), Individual::new(genes2))
    }

    /// Gaussian mutation, in place.
    ///
    /// Each gene is perturbed with probability `mutation_rate` by noise with
    /// standard deviation `0.1 * (max - min)`, then clamped into `bounds`.
    pub fn mutate(
        &self,
        individual: &mut Individual,
        bounds: (f64, f64),
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let (low, high) = bounds;
        let strength = (high - low) * MUTATION_STRENGTH;

        for gene in individual.genes.iter_mut() {
            if rng.probability() < self.mutation_rate {
                *gene = (*gene + rng.gaussian(0.0, strength)?).clamp(low, high);
            }
        }

        Ok(())
    }
}

impl Default for ArithmeticBreeding {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.1,
        }
    }
}

impl BreedStrategy for ArithmeticBreeding {
    /// Pairs consecutive parents (0 & 1, 2 & 3, ...), crosses each pair and
    /// mutates both children. An unpaired last parent is copied into two
    /// children that are mutated independently. The result is truncated to
    /// `num_offspring`.
    fn breed(
        &self,
        parents: &[Individual],
        bounds: (f64, f64),
        num_offspring: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut children = Vec::with_capacity(parents.len() + 1);
        for pair in parents.chunks(2) {
            let (mut child1, mut child2) = match pair {
                [parent1, parent2] => self.crossover(parent1, parent2, rng),
                _ => (pair[0].clone(), pair[0].clone()),
            };

            self.mutate(&mut child1, bounds, rng)?;
            self.mutate(&mut child2, bounds, rng)?;

            children.push(child1);
            children.push(child2);
        }

        if children.len() < num_offspring {
            return Err(GeneticError::Breeding(format!(
                "{} parents produced {} children, {} required",
                parents.len(),
                children.len(),
                num_offspring
            )));
        }
        children.truncate(num_offspring);

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (f64, f64) = (-5.0, 5.0);

    fn parents() -> (Individual, Individual) {
        (
            Individual::with_fitness(vec![1.0, 2.0, 3.0], -1.0),
            Individual::with_fitness(vec![-1.0, 0.0, 4.0], -2.0),
        )
    }

    #[test]
    fn test_invalid_rates() {
        assert!(ArithmeticBreeding::new(1.5, 0.1).is_err());
        assert!(ArithmeticBreeding::new(0.5, -0.1).is_err());
        assert!(ArithmeticBreeding::new(f64::NAN, 0.1).is_err());
        assert!(ArithmeticBreeding::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_crossover_rate_zero_returns_copies() {
        let breeding = ArithmeticBreeding::new(0.0, 0.0).unwrap();
        let (p1, p2) = parents();
        let mut rng = RandomNumberGenerator::from_seed(21);

        for _ in 0..50 {
            let (c1, c2) = breeding.crossover(&p1, &p2, &mut rng);
            assert_eq!(c1, p1);
            assert_eq!(c2, p2);
        }
    }

    #[test]
    fn test_crossover_blends_genes() {
        let breeding = ArithmeticBreeding::new(1.0, 0.0).unwrap();
        let (p1, p2) = parents();
        let mut rng = RandomNumberGenerator::from_seed(21);

        let (c1, c2) = breeding.crossover(&p1, &p2, &mut rng);

        assert!(!c1.is_evaluated());
        assert!(!c2.is_evaluated());
        for i in 0..3 {
            // The two children are mirror blends, so they sum to the parents.
            let sum = c1.genes[i] + c2.genes[i];
            assert!((sum - (p1.genes[i] + p2.genes[i])).abs() < 1e-12);

            let (lo, hi) = if p1.genes[i] < p2.genes[i] {
                (p1.genes[i], p2.genes[i])
            } else {
                (p2.genes[i], p1.genes[i])
            };
            assert!(c1.genes[i] >= lo - 1e-12 && c1.genes[i] <= hi + 1e-12);
        }
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let breeding = ArithmeticBreeding::new(0.8, 0.0).unwrap();
        let (mut individual, _) = parents();
        let mut rng = RandomNumberGenerator::from_seed(4);

        breeding.mutate(&mut individual, BOUNDS, &mut rng).unwrap();
        assert_eq!(individual.genes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mutation_stays_within_bounds() {
        let breeding = ArithmeticBreeding::new(0.8, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut individual = Individual::new(vec![4.99, -4.99, 0.0, 5.0, -5.0]);

        for _ in 0..200 {
            breeding.mutate(&mut individual, BOUNDS, &mut rng).unwrap();
            assert!(individual.genes.iter().all(|g| (-5.0..=5.0).contains(g)));
        }
    }

    #[test]
    fn test_breed_even_parents() {
        let breeding = ArithmeticBreeding::default();
        let (p1, p2) = parents();
        let parents = vec![p1.clone(), p2.clone(), p2, p1];
        let mut rng = RandomNumberGenerator::from_seed(8);

        let children = breeding.breed(&parents, BOUNDS, 4, &mut rng).unwrap();
        assert_eq!(children.len(), 4);
    }

    #[test]
    fn test_breed_odd_parents_duplicates_last() {
        let breeding = ArithmeticBreeding::new(0.0, 0.0).unwrap();
        let (p1, p2) = parents();
        let last = Individual::with_fitness(vec![0.5, 0.5, 0.5], -0.1);
        let parents = vec![p1.clone(), p2.clone(), last.clone()];
        let mut rng = RandomNumberGenerator::from_seed(8);

        let children = breeding.breed(&parents, BOUNDS, 3, &mut rng).unwrap();

        assert_eq!(children.len(), 3);
        assert_eq!(children[0], p1);
        assert_eq!(children[1], p2);
        assert_eq!(children[2], last);
    }

    #[test]
    fn test_breed_empty_parents() {
        let breeding = ArithmeticBreeding::default();
        let mut rng = RandomNumberGenerator::from_seed(8);
        assert!(matches!(
            breeding.breed(&[], BOUNDS, 2, &mut rng),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_breed_too_few_parents() {
        let breeding = ArithmeticBreeding::default();
        let (p1, p2) = parents();
        let mut rng = RandomNumberGenerator::from_seed(8);
        assert!(matches!(
            breeding.breed(&[p1, p2], BOUNDS, 5, &mut rng),
            Err(GeneticError::Breeding(_))
        ));
    }
}
