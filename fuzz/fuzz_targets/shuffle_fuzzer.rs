//! Fuzz target for the shuffle engine
//!
//! Prevent hangs and label loss on adversarial label sets
//!
//! # Strategy
//!
//! - Label sets: arbitrary strings from a tiny alphabet, so duplicates and
//!   dominant labels are common
//! - Thresholds: arbitrary fractions, including NaN, negatives and values >= 1
//! - Retry caps: arbitrary, including 0 and 1
//!
//! # Invariants
//!
//! - `shuffle` ALWAYS returns (no unbounded loop)
//! - Invalid fractions and a zero retry cap MUST reject
//! - `Ok` result conserves the label multiset
//! - `Ok` result changes at least `required_changes` positions
//! - `Unsatisfiable` ONLY when `required > achievable`
//! - Slot ids never move

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shufflekey_core::{
    shuffle::{self, achievable_changes, required_changes},
    KeySequence, ShuffleConfig, ShuffleError,
};
use shufflekey_harness::SimEnv;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Seed for the shuffle RNG.
    seed: u64,
    /// Labels, reduced to one of four letters each.
    labels: Vec<u8>,
    fraction: f64,
    max_attempts: u8,
}

fuzz_target!(|input: FuzzInput| {
    let labels = input.labels.iter().take(32).map(|b| char::from(b'a' + b % 4).to_string());
    let keys = KeySequence::from_labels(labels);
    let config = ShuffleConfig {
        minimum_change_fraction: input.fraction,
        max_attempts: u32::from(input.max_attempts),
    };

    let result = shuffle::shuffle(&keys, &config, &SimEnv::with_seed(input.seed));

    let fraction_ok = input.fraction.is_finite() && (0.0..1.0).contains(&input.fraction);
    if !fraction_ok {
        assert!(matches!(result, Err(ShuffleError::InvalidFraction { .. })));
        return;
    }
    if input.max_attempts == 0 {
        assert_eq!(result, Err(ShuffleError::InvalidAttempts));
        return;
    }
    if keys.is_empty() {
        assert_eq!(result, Err(ShuffleError::EmptySequence));
        return;
    }

    let required = required_changes(keys.len(), input.fraction);
    let achievable = achievable_changes(&keys);

    match result {
        Ok(outcome) => {
            assert!(required <= achievable);
            assert!(outcome.keys.has_same_values(&keys), "labels lost");
            assert!(outcome.changed >= required, "threshold missed");
            for (slot, key) in outcome.keys.iter().enumerate() {
                assert_eq!(key.id, slot, "slot id moved");
            }
        },
        Err(ShuffleError::Unsatisfiable { required: r, achievable: a, .. }) => {
            assert!(r > a);
        },
        Err(e) => panic!("unexpected error: {e}"),
    }
});
