//! Scripted keyboard scenarios.
//!
//! Each test drives a seeded keyboard through a fixed event list; the
//! scenario runner checks the built-in invariants after every step and the
//! oracles here check the outcome.

use proptest::prelude::*;
use shufflekey_core::{
    CharacterSet, ConfigError, HapticStyle, InputMode, KeyboardAction, KeyboardConfig,
    KeyboardError, KeyboardEvent, SoundId,
};
use shufflekey_harness::{Scenario, ScenarioError, ScenarioReport};

fn press(id: usize) -> KeyboardEvent {
    KeyboardEvent::PressKey { id }
}

fn final_text_is(expected: &'static str) -> impl Fn(&ScenarioReport) -> Result<(), String> {
    move |report| {
        if report.final_state.text == expected {
            Ok(())
        } else {
            Err(format!("expected text {expected:?}, got {:?}", report.final_state.text))
        }
    }
}

#[test]
fn typing_and_deleting_on_the_keypad() {
    // Keypad order: 7 8 9 / 4 5 6 / 1 2 3 / 0 .
    let report = Scenario::new()
        .events([press(6), press(9), press(7), KeyboardEvent::Delete, press(9)])
        .oracle(Box::new(final_text_is("100")))
        .run()
        .expect("scenario should pass");

    assert_eq!(report.steps.len(), 5);
    assert!(report.steps.iter().all(|s| s.result.is_ok()));
}

#[test]
fn password_mode_masks_every_character() {
    let config = KeyboardConfig { input_mode: InputMode::Password, ..KeyboardConfig::default() };

    let report = Scenario::new()
        .with_config(config)
        .events([press(0), press(1), press(2)])
        .run()
        .expect("scenario should pass");

    assert_eq!(report.final_state.text, "789");
    assert_eq!(report.final_state.display, "•••");
}

#[test]
fn repeated_shuffles_keep_labels_and_move_enough() {
    let config = KeyboardConfig { animation_enabled: false, ..KeyboardConfig::default() };
    let events = std::iter::repeat_n(KeyboardEvent::Shuffle, 25);

    // The runner rejects any shuffle that changes fewer than 4 of 11 slots.
    let report = Scenario::new()
        .with_config(config)
        .with_seed(42)
        .events(events)
        .run()
        .expect("every shuffle should satisfy the invariants");

    assert_eq!(report.shuffle_count(), 25);
    assert!(report.final_state.keys.has_same_values(&report.initial_keys));
}

#[test]
fn animated_shuffle_blocks_until_applied() {
    let report = Scenario::new()
        .events([
            KeyboardEvent::Shuffle,
            KeyboardEvent::Shuffle,
            KeyboardEvent::ShuffleApplied,
            KeyboardEvent::Shuffle,
        ])
        .run()
        .expect("scenario should pass");

    assert!(report.steps[0].result.is_ok());
    assert_eq!(report.steps[1].result, Err(KeyboardError::ShuffleInProgress));
    assert!(report.steps[3].result.is_ok());
    assert_eq!(report.shuffle_count(), 2);
    assert!(report.final_state.shuffling);
}

#[test]
fn typed_value_follows_the_label_not_the_position() {
    let config = KeyboardConfig { animation_enabled: false, ..KeyboardConfig::default() };
    let scenario = Scenario::new().with_config(config).with_seed(7);

    let report = scenario.events([KeyboardEvent::Shuffle, press(0)]).run().expect("passes");

    let first_label = report.final_state.keys.get(0).map(|k| k.value.clone());
    assert_eq!(Some(report.final_state.text.clone()), first_label);
}

#[test]
fn feedback_follows_each_edit() {
    let report = Scenario::new()
        .events([press(0), KeyboardEvent::Delete, press(0), KeyboardEvent::Clear])
        .run()
        .expect("scenario should pass");

    let haptics: Vec<_> = report
        .actions()
        .filter_map(|a| match a {
            KeyboardAction::Haptic(style) => Some(*style),
            _ => None,
        })
        .collect();
    let sounds: Vec<_> = report
        .actions()
        .filter_map(|a| match a {
            KeyboardAction::PlaySound(id) => Some(*id),
            _ => None,
        })
        .collect();

    assert_eq!(
        haptics,
        [HapticStyle::Light, HapticStyle::Medium, HapticStyle::Light, HapticStyle::Warning]
    );
    assert_eq!(sounds, [SoundId::KEY_PRESS, SoundId::DELETE, SoundId::KEY_PRESS, SoundId::CLEAR]);
}

#[test]
fn input_stops_at_max_length() {
    let config = KeyboardConfig { max_input_length: 3, ..KeyboardConfig::default() };

    let report = Scenario::new()
        .with_config(config)
        .events(std::iter::repeat_n(press(4), 10))
        .oracle(Box::new(final_text_is("555")))
        .run()
        .expect("scenario should pass");

    assert_eq!(report.steps.len(), 10);
}

#[test]
fn custom_set_with_one_label_is_rejected() {
    let config = KeyboardConfig {
        character_set: CharacterSet::custom(["A", "A", "A"]),
        ..KeyboardConfig::default()
    };

    assert!(Scenario::new().with_config(config).run().is_err());
}

#[test]
fn custom_set_with_multi_character_labels_is_rejected() {
    let config = KeyboardConfig {
        character_set: CharacterSet::custom(["10", "11", "12", "13"]),
        max_input_length: 3,
        ..KeyboardConfig::default()
    };

    let result = Scenario::new().with_config(config).events([press(0), press(0)]).run();
    assert!(matches!(
        result,
        Err(ScenarioError::Config(ConfigError::MultiCharacterLabel { label })) if label == "10"
    ));
}

#[test]
fn combining_labels_respect_max_length() {
    // Each label is one grapheme made of two scalar values.
    let config = KeyboardConfig {
        character_set: CharacterSet::custom(["e\u{301}", "a\u{308}", "o\u{302}", "u\u{300}"]),
        max_input_length: 3,
        ..KeyboardConfig::default()
    };

    let report = Scenario::new()
        .with_config(config)
        .events(std::iter::repeat_n(press(0), 5))
        .oracle(Box::new(final_text_is("e\u{301}e\u{301}e\u{301}")))
        .run()
        .expect("scenario should pass");

    assert_eq!(report.final_state.display, "e\u{301}e\u{301}e\u{301}");
}

fn event_strategy() -> impl Strategy<Value = KeyboardEvent> {
    prop_oneof![
        4 => (0..12usize).prop_map(|id| KeyboardEvent::PressKey { id }),
        1 => Just(KeyboardEvent::Delete),
        1 => Just(KeyboardEvent::Clear),
        2 => Just(KeyboardEvent::Shuffle),
        2 => Just(KeyboardEvent::ShuffleApplied),
        1 => Just(KeyboardEvent::TogglePasswordMode),
        1 => Just(KeyboardEvent::NextTheme),
        1 => (0.0..150.0f32).prop_map(|size| KeyboardEvent::SetTapArea { size }),
        1 => Just(KeyboardEvent::Submit),
    ]
}

proptest! {
    /// The same seed and events always produce the same report.
    #[test]
    fn prop_scenario_is_deterministic(
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let run = || {
            Scenario::new().with_seed(seed).events(events.clone()).run()
        };

        let first = run();
        let second = run();
        prop_assert!(first.is_ok(), "scenario failed: {:?}", first.err());
        prop_assert_eq!(first.ok(), second.ok());
    }

    /// Built-in invariants hold for arbitrary event streams and letter sets.
    #[test]
    fn prop_invariants_hold_for_letters(
        seed in any::<u64>(),
        fraction in 0.0..0.9f64,
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let config = KeyboardConfig {
            character_set: CharacterSet::Letters,
            minimum_shuffle_fraction: fraction,
            ..KeyboardConfig::default()
        };

        let result = Scenario::new().with_config(config).with_seed(seed).events(events).run();
        prop_assert!(result.is_ok(), "scenario failed: {:?}", result.err());
    }
}
