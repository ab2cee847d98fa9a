//! Model keyboard.
//!
//! Tracks the same observable state as the real keyboard with the simplest
//! possible logic. Shuffles are random, so the model does not produce
//! arrangements itself: it is told the arrangement the real keyboard chose
//! (via [`ModelKeyboard::accept_arrangement`]) and checks it against the
//! shuffle invariants.
//!
//! Text is counted and deleted by grapheme cluster, as a user sees it.

use shufflekey_core::KeyboardConfig;
use unicode_segmentation::UnicodeSegmentation;

use super::operation::{Operation, OperationError, OperationResult};

const THEME_COUNT: usize = 4;
const TAP_AREA_MIN: f32 = 20.0;
const TAP_AREA_MAX: f32 = 100.0;
const TAP_AREA_STEP: f32 = 5.0;

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservableState {
    /// Raw input.
    pub text: String,
    /// Input field contents.
    pub display: String,
    /// Whether a shuffle awaits `ShuffleApplied`.
    pub shuffling: bool,
    /// Position of the current theme in the cycle.
    pub theme_index: usize,
    /// Tap area in points.
    pub tap_area: f32,
}

/// Model keyboard - the reference implementation.
#[derive(Debug, Clone)]
pub struct ModelKeyboard {
    /// Labels by slot.
    labels: Vec<String>,
    /// Labels sorted, for multiset comparison.
    sorted_labels: Vec<String>,
    text: String,
    max_length: usize,
    password: bool,
    animation: bool,
    clear_after_submit: bool,
    fraction: f64,
    shuffling: bool,
    /// A shuffle succeeded and its arrangement has not been checked yet.
    arrangement_pending: bool,
    theme_index: usize,
    tap_area: f32,
}

impl ModelKeyboard {
    /// Create a model matching a fresh keyboard built from `config`.
    pub fn new(config: &KeyboardConfig) -> Self {
        let labels = config.character_set.labels();
        let mut sorted_labels = labels.clone();
        sorted_labels.sort();

        Self {
            labels,
            sorted_labels,
            text: String::new(),
            max_length: config.max_input_length,
            password: config.input_mode == shufflekey_core::InputMode::Password,
            animation: config.animation_enabled,
            clear_after_submit: config.clear_after_submit,
            fraction: config.minimum_shuffle_fraction,
            shuffling: false,
            arrangement_pending: false,
            theme_index: 0,
            tap_area: TAP_AREA_MAX,
        }
    }

    /// Labels by slot.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::PressKey { slot } => {
                let Some(label) = self.labels.get(usize::from(*slot)) else {
                    return OperationResult::Error(OperationError::UnknownKey);
                };
                if self.text.graphemes(true).count() < self.max_length {
                    self.text.push_str(label);
                }
            },
            Operation::Delete => {
                let last = self.text.grapheme_indices(true).next_back().map(|(start, _)| start);
                if let Some(start) = last {
                    self.text.truncate(start);
                }
            },
            Operation::Clear => self.text.clear(),
            Operation::Shuffle => {
                if self.shuffling {
                    return OperationResult::Error(OperationError::ShuffleInProgress);
                }
                self.shuffling = self.animation;
                self.arrangement_pending = true;
            },
            Operation::ShuffleApplied => self.shuffling = false,
            Operation::TogglePasswordMode => self.password = !self.password,
            Operation::NextTheme => self.theme_index = (self.theme_index + 1) % THEME_COUNT,
            Operation::IncreaseTapArea => {
                self.tap_area = (self.tap_area + TAP_AREA_STEP).min(TAP_AREA_MAX);
            },
            Operation::DecreaseTapArea => {
                self.tap_area = (self.tap_area - TAP_AREA_STEP).max(TAP_AREA_MIN);
            },
            Operation::Submit => {
                if self.clear_after_submit {
                    self.text.clear();
                }
            },
        }
        OperationResult::Ok
    }

    /// Check the arrangement the real keyboard shows and adopt it.
    ///
    /// Without a pending shuffle the arrangement must be unchanged. After a
    /// shuffle it must hold the same labels and change enough slots.
    #[allow(clippy::cast_precision_loss)]
    pub fn accept_arrangement(&mut self, labels: Vec<String>) -> OperationResult {
        if !self.arrangement_pending {
            if labels != self.labels {
                return invalid("arrangement changed without a shuffle");
            }
            return OperationResult::Ok;
        }

        let mut sorted = labels.clone();
        sorted.sort();
        if sorted != self.sorted_labels {
            return invalid("shuffle changed the set of labels");
        }

        let n = self.labels.len();
        let changed = self.labels.iter().zip(&labels).filter(|(a, b)| a != b).count();
        let required = (0..=n).find(|&c| c as f64 / n as f64 >= self.fraction).unwrap_or(n);
        if changed < required {
            return invalid(&format!("shuffle changed {changed} slots, needed {required}"));
        }

        self.labels = labels;
        self.arrangement_pending = false;
        OperationResult::Ok
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let display = if self.password {
            "•".repeat(self.text.graphemes(true).count())
        } else {
            self.text.clone()
        };

        ObservableState {
            text: self.text.clone(),
            display,
            shuffling: self.shuffling,
            theme_index: self.theme_index,
            tap_area: self.tap_area,
        }
    }
}

fn invalid(reason: &str) -> OperationResult {
    OperationResult::Error(OperationError::InvalidShuffle(reason.to_owned()))
}
