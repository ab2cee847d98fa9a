//! Keypad randomness from the operating system.

use shufflekey_core::Environment;

/// Environment drawing key arrangements from OS entropy.
///
/// A PIN pad shuffled from a guessable seed could be replayed by an observer,
/// so the terminal host never uses the seeded simulation RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        if let Err(e) = getrandom::fill(buffer) {
            // Zeroed bytes still yield a valid (fixed) arrangement.
            tracing::error!(len = buffer.len(), "OS entropy unavailable: {}", e);
            buffer.fill(0);
        }
    }
}
