//! # Error Types
//!
//! This module defines the error type shared by every part of the optimizer.
//! Two kinds of failure matter to callers:
//!
//! - configuration failures, raised while an optimizer is being built from
//!   [`CoevolutionOptions`](crate::evolution::CoevolutionOptions), and
//! - evaluation failures, raised while a run is in progress when the supplied
//!   fitness function produces a non-finite value.
//!
//! ## Examples
//!
//! ```rust
//! use ccea::error::{GeneticError, OptionExt};
//!
//! fn first_gene(genes: &[f64]) -> ccea::error::Result<f64> {
//!     genes.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_gene(&[]).is_err());
//! assert_eq!(first_gene(&[1.5]).unwrap(), 1.5);
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A breeding operation could not produce the requested generation.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// An operation needed at least one individual but the population was empty.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The fitness function produced a value the algorithm cannot order.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// A random distribution could not be constructed.
    #[error("Random generation error: {0}")]
    RandomGeneration(String),

    /// A gene vector did not fit the gene range it was placed into.
    #[error("Dimension mismatch: expected {expected} genes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
