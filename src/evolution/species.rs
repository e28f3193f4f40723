//! # SpeciesLayout
//!
//! Maps each species onto a contiguous range of the full solution vector.

use std::ops::Range;

use crate::error::{GeneticError, Result};

/// Splits `dimensions` into `num_species` block sizes.
///
/// Every block gets `dimensions / num_species` genes and the first
/// `dimensions % num_species` blocks get one more, so the sizes sum to
/// `dimensions` and differ by at most one.
///
/// ```rust
/// use ccea::evolution::species::split_dimensions;
///
/// assert_eq!(split_dimensions(10, 3), vec![4, 3, 3]);
/// assert_eq!(split_dimensions(30, 4), vec![8, 8, 7, 7]);
/// ```
pub fn split_dimensions(dimensions: usize, num_species: usize) -> Vec<usize> {
    if num_species == 0 {
        return Vec::new();
    }
    let base = dimensions / num_species;
    let extra = dimensions % num_species;
    (0..num_species)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// The gene ranges owned by each species within the full solution vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesLayout {
    ranges: Vec<Range<usize>>,
    dimensions: usize,
}

impl SpeciesLayout {
    pub fn new(dimensions: usize, num_species: usize) -> Self {
        let mut start = 0;
        let ranges = split_dimensions(dimensions, num_species)
            .into_iter()
            .map(|len| {
                let range = start..start + len;
                start += len;
                range
            })
            .collect();

        Self { ranges, dimensions }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn num_species(&self) -> usize {
        self.ranges.len()
    }

    /// Block size of every species, in species order.
    pub fn block_sizes(&self) -> Vec<usize> {
        self.ranges.iter().map(|r| r.len()).collect()
    }

    /// Gene range of `species` within the full solution vector.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `species` is out of range.
    pub fn range(&self, species: usize) -> Result<Range<usize>> {
        self.ranges.get(species).cloned().ok_or_else(|| {
            GeneticError::Configuration(format!(
                "Species index {} out of range for {} species",
                species,
                self.ranges.len()
            ))
        })
    }

    /// Copies `genes` into the range of `species` inside `solution`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for an unknown species and
    /// `GeneticError::DimensionMismatch` if `solution` is not a full-length
    /// vector or `genes` does not have the length of that species' block.
    pub fn place(&self, solution: &mut [f64], species: usize, genes: &[f64]) -> Result<()> {
        let range = self.range(species)?;
        if solution.len() != self.dimensions {
            return Err(GeneticError::DimensionMismatch {
                expected: self.dimensions,
                actual: solution.len(),
            });
        }
        if genes.len() != range.len() {
            return Err(GeneticError::DimensionMismatch {
                expected: range.len(),
                actual: genes.len(),
            });
        }
        solution[range].copy_from_slice(genes);
        Ok(())
    }
}
