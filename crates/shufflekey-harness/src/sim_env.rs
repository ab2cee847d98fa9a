//! Seeded simulation environment.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use shufflekey_core::Environment;

/// Deterministic environment backed by a seeded ChaCha20 RNG.
///
/// Clones share the RNG stream, so a keyboard and the test driving it draw
/// from one reproducible sequence.
#[derive(Clone)]
pub struct SimEnv {
    rng: Arc<Mutex<ChaCha20Rng>>,
    seed: u64,
}

impl SimEnv {
    /// Create an environment from a seed.
    ///
    /// The seed is logged so failing runs can be replayed.
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "simulation environment created");
        Self { rng: Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed))), seed }
    }

    /// Seed this environment was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Environment for SimEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        // The RNG state is valid even if a holder panicked.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}
