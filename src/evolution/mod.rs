pub mod challenge;
pub mod coevolution;
pub mod options;
pub mod species;

pub use challenge::Challenge;
pub use coevolution::{CooperativeCoevolution, EvolutionResult};
pub use options::{CoevolutionOptions, CoevolutionOptionsBuilder};
pub use species::{split_dimensions, SpeciesLayout};
