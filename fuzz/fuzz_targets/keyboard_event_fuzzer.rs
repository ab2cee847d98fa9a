//! Fuzz target for the [`Keyboard`] state machine
//!
//! Prevent divergence from the reference model under arbitrary event streams
//!
//! # Strategy
//!
//! - Event sequences: arbitrary [`Operation`]s, including out-of-range slots
//! - Shuffle reentrancy: shuffles before the previous one was applied
//! - Configs: every built-in character set, animated or not
//!
//! # Invariants
//!
//! - Result of every operation matches the model
//! - Shuffle while `Shuffling` MUST reject with `ShuffleInProgress`
//! - Out-of-range slot MUST reject with `UnknownKey`
//! - Every arrangement passes the model's shuffle checks
//! - Input never exceeds `max_input_length`
//! - NEVER panic on any event

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shufflekey_core::{CharacterSet, Keyboard, KeyboardConfig, KeyboardError};
use shufflekey_harness::{ModelKeyboard, Operation, OperationError, OperationResult, SimEnv};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    seed: u64,
    charset: u8,
    animation: bool,
    /// Reduced to 1..=32.
    max_length: u8,
    operations: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let character_set = match input.charset % 3 {
        0 => CharacterSet::Numbers,
        1 => CharacterSet::Letters,
        _ => CharacterSet::Symbols,
    };
    let config = KeyboardConfig {
        character_set,
        animation_enabled: input.animation,
        max_input_length: usize::from(input.max_length % 32) + 1,
        ..KeyboardConfig::default()
    };

    let mut model = ModelKeyboard::new(&config);
    let Ok(mut keyboard) = Keyboard::new(SimEnv::with_seed(input.seed), config.clone()) else {
        panic!("built-in config rejected");
    };

    for op in input.operations.iter().take(256) {
        let expected = model.apply(op);
        let actual = match keyboard.handle(op.to_event()) {
            Ok(_) => OperationResult::Ok,
            Err(KeyboardError::UnknownKey { .. }) => OperationResult::Error(OperationError::UnknownKey),
            Err(KeyboardError::ShuffleInProgress) => {
                OperationResult::Error(OperationError::ShuffleInProgress)
            },
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(expected, actual, "diverged on {op:?}");

        let labels = keyboard.keys().values().map(str::to_owned).collect();
        assert_eq!(model.accept_arrangement(labels), OperationResult::Ok);
        assert!(keyboard.text().chars().count() <= config.max_input_length);
    }
});
