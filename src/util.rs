//! Randomness and timing collaborators.
//!
//! [`RandomProvider`] is an explicit handle constructed once and passed by
//! reference where sampling is needed; there is no hidden global engine.
//! [`Stopwatch`] measures elapsed wall time off the monotonic clock.

use std::time::{Duration, Instant};

use rand::prelude::*;

/// Uniform sampling over inclusive ranges, plus in-place shuffling.
pub struct RandomProvider {
    rng: StdRng,
}

impl RandomProvider {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: rand::make_rng(),
        }
    }

    /// Deterministic engine for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample from `min..=max`. Panics if `min > max`.
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }

    /// Uniform sample from `min..=max`. Panics if `min > max`.
    pub fn float_in(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}

impl Default for RandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Elapsed-time measurement over the monotonic clock.
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
