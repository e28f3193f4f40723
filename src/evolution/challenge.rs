/// The objective being maximized.
///
/// A challenge scores a full-length solution vector; larger is better. It
/// must be deterministic for a given input and return finite values. Any
/// `Fn(&[f64]) -> f64` is a challenge, so closures work directly.
pub trait Challenge {
    fn score(&self, solution: &[f64]) -> f64;
}

impl<F> Challenge for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, solution: &[f64]) -> f64 {
        self(solution)
    }
}
