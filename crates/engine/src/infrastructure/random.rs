//! Random implementations.

use crate::infrastructure::ports::RandomPort;
use rand::Rng;
use uuid::Uuid;

/// System random - uses real randomness.
///
/// Backed by the thread-local RNG, so a single instance can be shared across
/// concurrent requests without locking.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn roll_unit(&self) -> f64 {
        // `gen::<f64>()` samples [0, 1)
        rand::thread_rng().gen::<f64>()
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn roll_unit(&self) -> f64 {
        self.0
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}
