use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

/// Abstraction over the random number generator used by the solver, which allows tests to inject
/// a deterministic sequence of "random" values.
pub trait Random: Debug {
    /// Returns true with the provided probability.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Generates a usize in the provided range.
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;

    /// Generates an i32 in the provided range.
    fn generate_i32_in_range(&mut self, range: Range<i32>) -> i32;
}

// We provide a blanket implementation of the trait for any type which implements `SeedableRng`,
// `Rng` and `Debug` to ensure that we can use any "regular" random generator where we expect an
// implementation of Random.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }

    fn generate_i32_in_range(&mut self, range: Range<i32>) -> i32 {
        self.gen_range(range)
    }
}

/// A [`Random`] implementation which returns pre-programmed values, for use in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct TestRandom {
    pub(crate) usizes: Vec<usize>,
    pub(crate) bools: Vec<bool>,
    pub(crate) integers: Vec<i32>,
}

#[cfg(test)]
impl Random for TestRandom {
    fn generate_bool(&mut self, _probability: f64) -> bool {
        self.bools.remove(0)
    }

    fn generate_usize_in_range(&mut self, _range: Range<usize>) -> usize {
        self.usizes.remove(0)
    }

    fn generate_i32_in_range(&mut self, _range: Range<i32>) -> i32 {
        self.integers.remove(0)
    }
}
