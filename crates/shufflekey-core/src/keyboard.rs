//! Keyboard state machine.
//!
//! The `Keyboard` owns the key arrangement and the input text. It is a pure
//! state machine: the host feeds [`KeyboardEvent`]s and executes the returned
//! [`KeyboardAction`]s (render keys, update the input field, play feedback).
//! Randomness comes from the injected [`Environment`], so the same seed
//! replays the same shuffles.
//!
//! # Shuffle state
//!
//! ```text
//!            Shuffle (animated)
//!   Idle ─────────────────────────▶ Shuffling
//!    ▲                                  │
//!    └──────── ShuffleApplied ──────────┘
//! ```
//!
//! A `Shuffle` event while `Shuffling` is rejected. With animation disabled a
//! shuffle returns straight to `Idle`.

use crate::{
    config::{InputMode, KeyboardConfig},
    env::Environment,
    error::{ConfigError, KeyboardError},
    event::{KeyboardAction, KeyboardEvent, KeyboardSnapshot},
    feedback::FeedbackKind,
    input::InputBuffer,
    key::{KeyId, KeySequence},
    shuffle,
    tap_area::TapArea,
    theme::{Theme, ThemeKind},
};

/// Reentrancy guard for shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleState {
    /// Ready to shuffle.
    #[default]
    Idle,
    /// A shuffle result has not been applied by the host yet.
    Shuffling,
}

/// Keyboard state machine.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for randomness
pub struct Keyboard<E: Environment> {
    /// Settings chosen at construction.
    config: KeyboardConfig,

    /// Current arrangement, replaced as a whole on shuffle.
    keys: KeySequence,

    /// Typed text.
    input: InputBuffer,

    /// Current display mode (starts from the config, toggled by the user).
    input_mode: InputMode,

    theme: ThemeKind,

    tap_area: TapArea,

    state: ShuffleState,

    /// Environment for randomness.
    env: E,
}

impl<E: Environment> Keyboard<E> {
    /// Create a keyboard in its initial (unshuffled) arrangement.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config is invalid or its shuffle threshold
    /// cannot be reached with the configured labels.
    pub fn new(env: E, config: KeyboardConfig) -> Result<Self, ConfigError> {
        let keys = config.validate()?;
        tracing::debug!(
            keys = keys.len(),
            character_set = config.character_set.name(),
            "keyboard created"
        );

        Ok(Self {
            input: InputBuffer::new(config.max_input_length),
            input_mode: config.input_mode,
            keys,
            theme: ThemeKind::default(),
            tap_area: TapArea::default(),
            state: ShuffleState::Idle,
            config,
            env,
        })
    }

    /// Settings chosen at construction.
    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    /// Current arrangement.
    pub fn keys(&self) -> &KeySequence {
        &self.keys
    }

    /// Raw input text.
    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Input text as shown in the input field.
    pub fn display_text(&self) -> String {
        self.input.display(self.input_mode)
    }

    /// Current display mode.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Whether the input is masked.
    pub fn is_password_mode(&self) -> bool {
        self.input_mode == InputMode::Password
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Current tap area.
    pub fn tap_area(&self) -> TapArea {
        self.tap_area
    }

    /// Shuffle state.
    pub fn state(&self) -> ShuffleState {
        self.state
    }

    /// Whether a shuffle is waiting to be applied.
    pub fn is_shuffling(&self) -> bool {
        self.state == ShuffleState::Shuffling
    }

    /// Observable state.
    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            keys: self.keys.clone(),
            text: self.input.text().to_owned(),
            display: self.display_text(),
            shuffling: self.is_shuffling(),
            theme: self.theme(),
            tap_area: self.tap_area.size(),
        }
    }

    /// Process an event and return resulting actions.
    ///
    /// Edits that do not change anything (delete on empty input, a key press
    /// at the length limit) succeed with no actions.
    ///
    /// # Errors
    ///
    /// Returns `KeyboardError` if the event cannot be processed.
    pub fn handle(&mut self, event: KeyboardEvent) -> Result<Vec<KeyboardAction>, KeyboardError> {
        match event {
            KeyboardEvent::PressKey { id } => self.handle_press_key(id),
            KeyboardEvent::Delete => Ok(self.handle_edit(InputBuffer::delete, FeedbackKind::Delete)),
            KeyboardEvent::Clear => Ok(self.handle_edit(InputBuffer::clear, FeedbackKind::Clear)),
            KeyboardEvent::Shuffle => self.handle_shuffle(),
            KeyboardEvent::ShuffleApplied => Ok(self.handle_shuffle_applied()),
            KeyboardEvent::TogglePasswordMode => Ok(self.handle_toggle_password_mode()),
            KeyboardEvent::NextTheme => Ok(self.handle_next_theme()),
            KeyboardEvent::IncreaseTapArea => Ok(self.resize(self.tap_area.increased())),
            KeyboardEvent::DecreaseTapArea => Ok(self.resize(self.tap_area.decreased())),
            KeyboardEvent::SetTapArea { size } => Ok(self.resize(TapArea::new(size))),
            KeyboardEvent::Submit => Ok(self.handle_submit()),
        }
    }

    fn handle_press_key(&mut self, id: KeyId) -> Result<Vec<KeyboardAction>, KeyboardError> {
        let key = self.keys.get(id).ok_or(KeyboardError::UnknownKey { id })?;
        if !self.input.append(&key.value) {
            tracing::trace!(id, "input full, key ignored");
            return Ok(Vec::new());
        }

        let mut actions = vec![self.display_action()];
        self.push_feedback(FeedbackKind::KeyPress, &mut actions);
        Ok(actions)
    }

    fn handle_edit(
        &mut self,
        edit: fn(&mut InputBuffer) -> bool,
        kind: FeedbackKind,
    ) -> Vec<KeyboardAction> {
        if !edit(&mut self.input) {
            return Vec::new();
        }

        let mut actions = vec![self.display_action()];
        self.push_feedback(kind, &mut actions);
        actions
    }

    fn handle_shuffle(&mut self) -> Result<Vec<KeyboardAction>, KeyboardError> {
        if self.is_shuffling() {
            return Err(KeyboardError::ShuffleInProgress);
        }

        let outcome = shuffle::shuffle(&self.keys, &self.config.shuffle_config(), &self.env)?;
        let animate = self.config.animation_enabled;

        tracing::debug!(
            changed = outcome.changed,
            attempts = outcome.attempts,
            strategy = ?outcome.strategy,
            "keys shuffled"
        );

        self.keys = outcome.keys;
        if animate {
            self.state = ShuffleState::Shuffling;
        }

        let mut actions = vec![KeyboardAction::KeysChanged { keys: self.keys.clone(), animate }];
        self.push_feedback(FeedbackKind::Shuffle, &mut actions);
        Ok(actions)
    }

    fn handle_shuffle_applied(&mut self) -> Vec<KeyboardAction> {
        if self.state == ShuffleState::Idle {
            tracing::trace!("shuffle applied while idle, ignoring");
        }
        self.state = ShuffleState::Idle;
        Vec::new()
    }

    fn handle_toggle_password_mode(&mut self) -> Vec<KeyboardAction> {
        self.input_mode = self.input_mode.toggled();
        vec![self.display_action()]
    }

    fn handle_next_theme(&mut self) -> Vec<KeyboardAction> {
        self.theme = self.theme.next();

        let mut actions = vec![KeyboardAction::ThemeChanged(self.theme())];
        self.push_feedback(FeedbackKind::ThemeChange, &mut actions);
        actions
    }

    #[allow(clippy::float_cmp)]
    fn resize(&mut self, tap_area: TapArea) -> Vec<KeyboardAction> {
        if tap_area.size() == self.tap_area.size() {
            return Vec::new();
        }
        self.tap_area = tap_area;

        let mut actions = vec![KeyboardAction::TapAreaChanged { size: tap_area.size() }];
        self.push_feedback(FeedbackKind::SizeChange, &mut actions);
        actions
    }

    fn handle_submit(&mut self) -> Vec<KeyboardAction> {
        if !self.config.clear_after_submit {
            return vec![KeyboardAction::Submitted { text: self.input.text().to_owned() }];
        }

        let had_text = !self.input.is_empty();
        let text = self.input.take();
        let mut actions = vec![KeyboardAction::Submitted { text }];
        if had_text {
            actions.push(self.display_action());
        }
        actions
    }

    fn display_action(&self) -> KeyboardAction {
        KeyboardAction::DisplayChanged { text: self.display_text() }
    }

    fn push_feedback(&self, kind: FeedbackKind, actions: &mut Vec<KeyboardAction>) {
        if self.config.haptic_enabled {
            actions.push(KeyboardAction::Haptic(kind.haptic()));
        }
        if self.config.sound_enabled {
            if let Some(sound) = kind.sound() {
                actions.push(KeyboardAction::PlaySound(sound));
            }
        }
    }
}
