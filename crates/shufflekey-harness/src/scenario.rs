//! Scripted keyboard scenarios with invariant checks.
//!
//! A scenario drives a `Keyboard<SimEnv>` through a fixed list of events and
//! checks after every step that:
//!
//! - the label multiset never changes
//! - the input never exceeds its length limit
//! - every new arrangement changes enough slots
//! - an animated shuffle leaves the keyboard `Shuffling`
//!
//! Custom oracles run on the final report.

use shufflekey_core::{
    ConfigError, Keyboard, KeyboardAction, KeyboardConfig, KeyboardError, KeyboardEvent,
    KeyboardSnapshot, KeySequence, input, shuffle,
};
use thiserror::Error;

use crate::sim_env::SimEnv;

/// Check run against the finished scenario.
pub type Oracle = Box<dyn Fn(&ScenarioReport) -> Result<(), String>>;

/// One processed event.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Event sent to the keyboard.
    pub event: KeyboardEvent,
    /// What the keyboard returned.
    pub result: Result<Vec<KeyboardAction>, KeyboardError>,
}

/// Everything observed during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// RNG seed used.
    pub seed: u64,
    /// Arrangement before the first event.
    pub initial_keys: KeySequence,
    /// Per-event records, in order.
    pub steps: Vec<StepRecord>,
    /// State after the last event.
    pub final_state: KeyboardSnapshot,
}

impl ScenarioReport {
    /// All successful actions, flattened in order.
    pub fn actions(&self) -> impl Iterator<Item = &KeyboardAction> {
        self.steps.iter().filter_map(|s| s.result.as_ref().ok()).flatten()
    }

    /// Number of shuffles that produced a new arrangement.
    pub fn shuffle_count(&self) -> usize {
        self.actions().filter(|a| matches!(a, KeyboardAction::KeysChanged { .. })).count()
    }
}

/// Scenario failures.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The keyboard could not be built.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// A built-in invariant failed.
    #[error("invariant violated at step {step}: {reason}")]
    Invariant {
        /// Index of the offending event.
        step: usize,
        /// What went wrong.
        reason: String,
    },

    /// A custom oracle rejected the run.
    #[error("oracle failed: {0}")]
    Oracle(String),
}

/// Builder for a scripted run.
pub struct Scenario {
    config: KeyboardConfig,
    seed: u64,
    events: Vec<KeyboardEvent>,
    oracles: Vec<Oracle>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Scenario with the default config and seed 0.
    pub fn new() -> Self {
        Self { config: KeyboardConfig::default(), seed: 0, events: Vec::new(), oracles: Vec::new() }
    }

    /// Use a specific config.
    #[must_use]
    pub fn with_config(mut self, config: KeyboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Append one event.
    #[must_use]
    pub fn event(mut self, event: KeyboardEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append several events.
    #[must_use]
    pub fn events(mut self, events: impl IntoIterator<Item = KeyboardEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Add a check on the final report.
    #[must_use]
    pub fn oracle(mut self, oracle: Oracle) -> Self {
        self.oracles.push(oracle);
        self
    }

    /// Run all events, checking invariants after each.
    pub fn run(self) -> Result<ScenarioReport, ScenarioError> {
        let env = SimEnv::with_seed(self.seed);
        let mut keyboard = Keyboard::new(env, self.config.clone())?;
        let initial_keys = keyboard.keys().clone();
        let required =
            shuffle::required_changes(initial_keys.len(), self.config.minimum_shuffle_fraction);

        let mut steps = Vec::with_capacity(self.events.len());
        for (step, event) in self.events.into_iter().enumerate() {
            let before = keyboard.keys().clone();
            let result = keyboard.handle(event.clone());

            let violation = |reason: String| ScenarioError::Invariant { step, reason };

            if !keyboard.keys().has_same_values(&initial_keys) {
                return Err(violation("label multiset changed".to_string()));
            }

            let len = input::char_len(keyboard.text());
            if len > self.config.max_input_length {
                return Err(violation(format!(
                    "input length {len} exceeds {}",
                    self.config.max_input_length
                )));
            }

            if let Ok(actions) = &result {
                for action in actions {
                    if let KeyboardAction::KeysChanged { keys, animate } = action {
                        let changed = before.changed_positions(keys);
                        if changed < required {
                            return Err(violation(format!(
                                "shuffle changed {changed} slots, needed {required}"
                            )));
                        }
                        if *animate != keyboard.is_shuffling() {
                            return Err(violation("shuffle state out of sync".to_string()));
                        }
                    }
                }
            }

            steps.push(StepRecord { event, result });
        }

        let report =
            ScenarioReport { seed: self.seed, initial_keys, steps, final_state: keyboard.snapshot() };

        for oracle in &self.oracles {
            oracle(&report).map_err(ScenarioError::Oracle)?;
        }

        Ok(report)
    }
}
