//! Property tests for the shuffle engine.
//!
//! These run the engine directly against a seeded environment over arbitrary
//! label lists, fractions and retry caps:
//!
//! - Conservation: the shuffled labels are a permutation of the input
//! - Threshold: an accepted arrangement changes at least `required_changes`
//! - Termination: any positive retry cap yields a result when one exists
//! - Determinism: the same seed yields the same arrangement
//! - Rejection: unreachable thresholds fail before sampling

use proptest::prelude::*;
use shufflekey_core::{
    CharacterSet, KeySequence, ShuffleConfig, ShuffleError, ShuffleStrategy, is_valid_shuffle,
    shuffle::{self, achievable_changes, required_changes},
};
use shufflekey_harness::SimEnv;

/// Labels drawn from a small alphabet so duplicates are common.
fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0..6u8).prop_map(|b| char::from(b'a' + b).to_string()), 1..14)
}

proptest! {
    #[test]
    fn prop_shuffle_conserves_labels_and_meets_threshold(
        labels in labels_strategy(),
        fraction in 0.0..0.99f64,
        max_attempts in 1..50u32,
        seed in any::<u64>(),
    ) {
        let keys = KeySequence::from_labels(labels);
        let config = ShuffleConfig { minimum_change_fraction: fraction, max_attempts };
        let required = required_changes(keys.len(), fraction);
        let achievable = achievable_changes(&keys);

        match shuffle::shuffle(&keys, &config, &SimEnv::with_seed(seed)) {
            Ok(outcome) => {
                prop_assert!(required <= achievable);
                prop_assert!(outcome.keys.has_same_values(&keys));
                prop_assert!(outcome.changed >= required);
                prop_assert!(outcome.attempts <= max_attempts);
                prop_assert_eq!(outcome.changed, keys.changed_positions(&outcome.keys));
                prop_assert!(is_valid_shuffle(&keys, &outcome.keys, fraction));

                let ids: Vec<_> = outcome.keys.iter().map(|k| k.id).collect();
                let expected: Vec<_> = (0..keys.len()).collect();
                prop_assert_eq!(ids, expected);
            },
            Err(ShuffleError::Unsatisfiable { required: r, achievable: a, len }) => {
                prop_assert!(r > a);
                prop_assert_eq!(r, required);
                prop_assert_eq!(a, achievable);
                prop_assert_eq!(len, keys.len());
            },
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_same_seed_same_arrangements(seed in any::<u64>(), rounds in 1..10usize) {
        let run = |seed: u64| {
            let env = SimEnv::with_seed(seed);
            let config = ShuffleConfig::default();
            let mut keys = KeySequence::from_character_set(&CharacterSet::Numbers);
            let mut history = Vec::new();
            for _ in 0..rounds {
                let outcome = shuffle::shuffle(&keys, &config, &env).expect("keypad is shuffleable");
                keys = outcome.keys;
                history.push(keys.clone());
            }
            history
        };

        prop_assert_eq!(run(seed), run(seed));
    }

    #[test]
    fn prop_fallback_when_sampling_is_starved(seed in any::<u64>()) {
        // Eleven distinct labels at the highest representable fraction below 1
        // need a derangement; one attempt rarely finds it.
        let keys = KeySequence::from_character_set(&CharacterSet::Numbers);
        let config = ShuffleConfig { minimum_change_fraction: 0.95, max_attempts: 1 };

        let outcome = shuffle::shuffle(&keys, &config, &SimEnv::with_seed(seed)).expect("satisfiable");
        prop_assert_eq!(outcome.changed, keys.len());
        prop_assert_eq!(outcome.attempts, 1);
        if outcome.strategy == ShuffleStrategy::Sampled {
            prop_assert!(is_valid_shuffle(&keys, &outcome.keys, 0.95));
        }
    }
}

#[test]
fn keypad_at_default_fraction_moves_at_least_four() {
    let keys = KeySequence::from_character_set(&CharacterSet::Numbers);
    let config = ShuffleConfig::default();

    for seed in 0..100 {
        let outcome =
            shuffle::shuffle(&keys, &config, &SimEnv::with_seed(seed)).expect("keypad shuffles");
        assert!(outcome.changed >= 4, "seed {seed} changed only {}", outcome.changed);
        assert!(outcome.keys.has_same_values(&keys));
    }
}

#[test]
fn identical_labels_are_rejected_not_looped() {
    let keys = KeySequence::from_labels(["x", "x", "x"]);
    let result = shuffle::shuffle(&keys, &ShuffleConfig::default(), &SimEnv::with_seed(0));
    assert_eq!(result, Err(ShuffleError::Unsatisfiable { required: 1, achievable: 0, len: 3 }));
}

#[test]
fn single_key_is_rejected() {
    let keys = KeySequence::from_labels(["7"]);
    let result = shuffle::shuffle(&keys, &ShuffleConfig::default(), &SimEnv::with_seed(0));
    assert!(matches!(result, Err(ShuffleError::Unsatisfiable { .. })));
}

#[test]
fn zero_fraction_accepts_first_candidate() {
    let keys = KeySequence::from_character_set(&CharacterSet::Letters);
    let config = ShuffleConfig::with_fraction(0.0);

    let outcome = shuffle::shuffle(&keys, &config, &SimEnv::with_seed(3)).expect("always valid");
    assert_eq!(outcome.attempts, 1);
    assert_eq!(outcome.strategy, ShuffleStrategy::Sampled);
}
