//! Randomness source for shape creation.
//!
//! New shapes get a jittered spawn position and (for rectangles and
//! ellipses) a random fill hue. The engine draws those values through the
//! [`RandomSource`] trait so tests can substitute a fixed sequence and make
//! creation fully deterministic.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::Rng;

/// A stream of unit-interval random values.
///
/// `create_shape` draws in a fixed order: x jitter, then y jitter, then
/// (non-text shapes only) fill hue.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 {
        rand::rng().random()
    }
}

/// Fixed-sequence source for deterministic tests and demos. Cycles through
/// the given values; yields `0.0` forever when constructed empty.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<f64>,
    next: usize,
}

impl FixedRandom {
    /// Build a source that cycles through `values` in order.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
