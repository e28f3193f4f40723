//! # Problems
//!
//! Reference objectives for exercising the optimizer. Each one is a cost with
//! a known minimum of zero and comes with the bounds it is conventionally
//! searched over. The optimizer maximizes, so wrap a cost in [`Minimize`]
//! before handing it over.
//!
//! ```rust
//! use ccea::evolution::{CoevolutionOptions, CooperativeCoevolution};
//! use ccea::problems::{Minimize, Rastrigin};
//!
//! let (min, max) = Rastrigin::bounds();
//! let options = CoevolutionOptions::builder()
//!     .dimensions(4)
//!     .bounds(min, max)
//!     .num_species(2)
//!     .population_size(8)
//!     .generations(3)
//!     .seed(0)
//!     .build();
//!
//! let mut ccea = CooperativeCoevolution::new(Minimize(Rastrigin), options).unwrap();
//! let best = ccea.run().unwrap();
//! assert!(best.score <= 0.0);
//! ```

use std::f64::consts::PI;

use crate::evolution::Challenge;

/// Turns a cost into a fitness by negating it.
#[derive(Debug, Clone, Copy)]
pub struct Minimize<C>(pub C);

impl<C: Challenge> Challenge for Minimize<C> {
    fn score(&self, solution: &[f64]) -> f64 {
        -self.0.score(solution)
    }
}

/// Sum of squares. Minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Sphere {
    pub fn bounds() -> (f64, f64) {
        (-5.12, 5.12)
    }
}

impl Challenge for Sphere {
    fn score(&self, solution: &[f64]) -> f64 {
        solution.iter().map(|x| x * x).sum()
    }
}

/// Rastrigin function, `10n + Σ(x² - 10 cos 2πx)`. Highly multimodal, minimum
/// 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;

impl Rastrigin {
    const A: f64 = 10.0;

    pub fn bounds() -> (f64, f64) {
        (-5.12, 5.12)
    }
}

impl Challenge for Rastrigin {
    fn score(&self, solution: &[f64]) -> f64 {
        Self::A * solution.len() as f64
            + solution
                .iter()
                .map(|x| x * x - Self::A * (2.0 * PI * x).cos())
                .sum::<f64>()
    }
}

/// Parameter fitting for a sum of sinusoids.
///
/// The solution is read in groups of four parameters `(a, b, c, d)`; group
/// `i` contributes `a·sin(b·k) + c·cos(d·k)` with `k = i + 1`. A trailing
/// partial group is padded with zeros. The cost is the squared distance of
/// the summed model from `target`.
#[derive(Debug, Clone, Copy)]
pub struct ParameterFit {
    pub target: f64,
}

impl ParameterFit {
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    pub fn bounds() -> (f64, f64) {
        (-10.0, 10.0)
    }

    /// Value of the model for the given parameters.
    pub fn model(solution: &[f64]) -> f64 {
        solution
            .chunks(4)
            .enumerate()
            .map(|(i, group)| {
                let param = |j: usize| group.get(j).copied().unwrap_or(0.0);
                let k = (i + 1) as f64;
                param(0) * (param(1) * k).sin() + param(2) * (param(3) * k).cos()
            })
            .sum()
    }
}

impl Default for ParameterFit {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Challenge for ParameterFit {
    fn score(&self, solution: &[f64]) -> f64 {
        (Self::model(solution) - self.target).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        assert_eq!(Sphere.score(&[0.0; 4]), 0.0);
        assert_eq!(Sphere.score(&[1.0, -2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        assert!(Rastrigin.score(&[0.0; 10]).abs() < 1e-12);
        assert!(Rastrigin.score(&[1.0, 0.5]) > 0.0);
        // Integer coordinates sit on local minima with value x².
        assert!((Rastrigin.score(&[1.0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parameter_fit_model() {
        // a·sin(b) + c·cos(d) with b = π/2, d = 0 gives a + c.
        let params = [3.0, PI / 2.0, 4.0, 0.0];
        assert!((ParameterFit::model(&params) - 7.0).abs() < 1e-12);

        // A partial group is zero-padded: only a·sin(b·2) remains.
        let params = [0.0, 0.0, 0.0, 0.0, 2.0, PI / 4.0];
        assert!((ParameterFit::model(&params) - 2.0).abs() < 1e-12);

        let fit = ParameterFit::new(7.0);
        assert!(fit.score(&[3.0, PI / 2.0, 4.0, 0.0]) < 1e-20);
        assert_eq!(ParameterFit::default().score(&[0.0; 8]), 10_000.0);
    }

    #[test]
    fn test_minimize_negates() {
        assert_eq!(Minimize(Sphere).score(&[1.0, 2.0]), -5.0);
        let cost = |x: &[f64]| x[0];
        assert_eq!(Minimize(cost).score(&[4.0]), -4.0);
    }
}
