//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples keyboard logic from system randomness.
//! This enables:
//!
//! - Deterministic Simulation: the harness provides a seeded RNG, so a failing
//!   shuffle sequence can be replayed exactly from its seed.
//!
//! - Production Runtime: the binary draws from OS entropy without any change
//!   to the shuffle engine.
//!
//! # Invariants
//!
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: Implementations must not share global state
//! - Totality: Methods never block and never panic

/// Abstract environment providing randomness.
///
/// Key layouts only need to be unpredictable to someone watching the screen,
/// but the production implementation still uses OS entropy so a shuffled
/// PIN pad cannot be replayed from a guessable seed.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Determinism during simulations: Given the same RNG seed, this produces
    ///   the same sequence of bytes
    /// - Unpredictability in production: Uses OS entropy
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates a random index in `0..bound`.
    ///
    /// Uses a widening multiply instead of rejection so the call is total even
    /// when the underlying source is degenerate (e.g. all zero bytes). The
    /// bias is at most `bound / 2^64`, which is irrelevant for keyboard sizes.
    ///
    /// Returns `0` when `bound` is `0`.
    fn random_index(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }

        let wide = u128::from(self.random_u64()) * bound as u128;
        // The high half is strictly below `bound`, so it always fits in usize.
        usize::try_from(wide >> 64).unwrap_or(bound - 1)
    }
}
