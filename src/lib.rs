pub mod breeding;
pub mod error;
pub mod evolution;
pub mod genetic;
pub mod individual;
pub mod population;
pub mod problems;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{Challenge, CoevolutionOptions, CooperativeCoevolution, EvolutionResult};
pub use genetic::GeneticAlgorithm;
pub use individual::Individual;
pub use population::Population;
pub use rng::RandomNumberGenerator;
