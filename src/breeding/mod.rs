//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! a new generation of individuals from a set of selected parents.
pub mod arithmetic;

use std::fmt::Debug;

use crate::{error::Result, individual::Individual, rng::RandomNumberGenerator};

/// # BreedStrategy
///
/// Turns the parents chosen by selection into the offspring of the next
/// generation. Offspring are unevaluated; the caller scores them.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds exactly `num_offspring` children from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The selected parents, in pairing order.
    /// - `bounds`: The `(min, max)` range every child gene must stay within.
    /// - `num_offspring`: The size of the generation to produce.
    /// - `rng`: The random number generator used for crossover and mutation.
    ///
    /// ## Errors
    ///
    /// This method can fail if the parents slice is empty or a random
    /// distribution cannot be built from `bounds`.
    fn breed(
        &self,
        parents: &[Individual],
        bounds: (f64, f64),
        num_offspring: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use arithmetic::ArithmeticBreeding;
