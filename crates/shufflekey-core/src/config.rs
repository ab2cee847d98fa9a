//! Keyboard configuration.

use crate::{
    charset::CharacterSet,
    error::ConfigError,
    input,
    key::KeySequence,
    shuffle::{self, DEFAULT_MAX_ATTEMPTS, DEFAULT_MINIMUM_CHANGE_FRACTION, ShuffleConfig},
};

/// Default input length limit.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 20;

/// Grid the keys are laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Three columns.
    #[default]
    Grid3x3,
    /// Four columns.
    Grid4x4,
    /// Five columns.
    Grid5x5,
}

impl LayoutMode {
    /// Keys per row.
    pub fn columns(self) -> usize {
        match self {
            Self::Grid3x3 => 3,
            Self::Grid4x4 => 4,
            Self::Grid5x5 => 5,
        }
    }
}

/// How typed text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Text is shown as typed.
    #[default]
    Normal,
    /// Each character is shown as a mask character.
    Password,
}

impl InputMode {
    /// Mask character for this mode; empty in normal mode.
    pub fn mask_character(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Password => "•",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Password,
            Self::Password => Self::Normal,
        }
    }
}

/// Everything a host chooses when creating a keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardConfig {
    /// Grid layout.
    pub layout: LayoutMode,
    /// Labels on the keys.
    pub character_set: CharacterSet,
    /// Initial display mode.
    pub input_mode: InputMode,
    /// Whether shuffles are animated. When false a shuffle completes
    /// immediately instead of waiting for the host.
    pub animation_enabled: bool,
    /// Emit haptic feedback actions.
    pub haptic_enabled: bool,
    /// Emit sound feedback actions.
    pub sound_enabled: bool,
    /// Minimum fraction of keys a shuffle must move.
    pub minimum_shuffle_fraction: f64,
    /// Shuffle retry cap.
    pub max_shuffle_attempts: u32,
    /// Input length limit in characters.
    pub max_input_length: usize,
    /// Clear the input after it has been submitted.
    pub clear_after_submit: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            character_set: CharacterSet::default(),
            input_mode: InputMode::default(),
            animation_enabled: true,
            haptic_enabled: true,
            sound_enabled: true,
            minimum_shuffle_fraction: DEFAULT_MINIMUM_CHANGE_FRACTION,
            max_shuffle_attempts: DEFAULT_MAX_ATTEMPTS,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            clear_after_submit: false,
        }
    }
}

impl KeyboardConfig {
    /// Shuffle settings derived from this config.
    pub fn shuffle_config(&self) -> ShuffleConfig {
        ShuffleConfig {
            minimum_change_fraction: self.minimum_shuffle_fraction,
            max_attempts: self.max_shuffle_attempts,
        }
    }

    /// Check the config and return the initial key sequence.
    ///
    /// Every label must be a single grapheme cluster, so the input length
    /// limit holds after any key press.
    ///
    /// Rejects shuffle thresholds the configured labels can never reach, so a
    /// keyboard that constructs successfully can always shuffle.
    pub fn validate(&self) -> Result<KeySequence, ConfigError> {
        if self.max_input_length == 0 {
            return Err(ConfigError::InvalidMaxLength);
        }

        let keys = KeySequence::from_character_set(&self.character_set);
        if keys.is_empty() {
            return Err(ConfigError::EmptyCharacterSet);
        }
        // Each press grows the input by exactly one character.
        if let Some(key) = keys.iter().find(|key| input::char_len(&key.value) != 1) {
            return Err(ConfigError::MultiCharacterLabel { label: key.value.clone() });
        }

        shuffle::check(&keys, &self.shuffle_config())?;
        Ok(keys)
    }
}
