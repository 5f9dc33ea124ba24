//! Random source used by the local search.
//!
//! The search draws only two kinds of values: a uniform index below a bound
//! (cadence intervals) and a uniform unit value (coin flips). Any
//! [`rand::Rng`] provides both, so callers normally pass the generator
//! their driver already owns, e.g. one from
//! [`u_numflow::random::create_rng`].

use rand::Rng;

/// Uniform draws consumed by the local search.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is at least 1.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
