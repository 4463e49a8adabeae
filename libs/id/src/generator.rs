//! Randomness sources for new identifiers.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

/// Source of fresh version-4 identifiers.
pub trait IdGenerator: Send + Sync {
    /// Generates a new random identifier.
    fn generate(&self) -> Uuid;
}

/// Generator backed by the uuid crate's thread-safe RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Creates a new random generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for reproducible output.
///
/// Generators created from the same seed produce the same sequence. The RNG
/// sits behind a mutex so one instance can be shared across threads.
#[derive(Debug)]
pub struct SeededIdGenerator {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededIdGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl IdGenerator for SeededIdGenerator {
    fn generate(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        // RNG state stays valid even if another holder panicked.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}
