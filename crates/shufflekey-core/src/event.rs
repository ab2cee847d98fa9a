//! Keyboard events and actions.

use crate::{
    feedback::{HapticStyle, SoundId},
    key::{KeyId, KeySequence},
    theme::Theme,
};

/// Events fed into the keyboard by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardEvent {
    /// A character key was tapped.
    PressKey {
        /// Slot of the tapped key.
        id: KeyId,
    },
    /// The delete button was tapped.
    Delete,
    /// The clear button was tapped.
    Clear,
    /// The shuffle button was tapped.
    Shuffle,
    /// The host finished applying (animating) the last shuffle.
    ShuffleApplied,
    /// Switch between normal and password display.
    TogglePasswordMode,
    /// Switch to the next theme.
    NextTheme,
    /// The + button next to the size slider was tapped.
    IncreaseTapArea,
    /// The - button next to the size slider was tapped.
    DecreaseTapArea,
    /// The size slider moved.
    SetTapArea {
        /// Requested size in points, clamped into range.
        size: f32,
    },
    /// The input was confirmed.
    Submit,
}

/// Actions the host must execute, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardAction {
    /// Render a new key arrangement.
    KeysChanged {
        /// The new arrangement.
        keys: KeySequence,
        /// Whether to animate the transition. The host must send
        /// [`KeyboardEvent::ShuffleApplied`] when an animated transition ends.
        animate: bool,
    },
    /// Render new input field text (already masked when needed).
    DisplayChanged {
        /// Text to show.
        text: String,
    },
    /// Play a haptic pattern.
    Haptic(HapticStyle),
    /// Play a system sound.
    PlaySound(SoundId),
    /// Restyle with a new theme.
    ThemeChanged(Theme),
    /// Resize the keys.
    TapAreaChanged {
        /// New tap area in points.
        size: f32,
    },
    /// Hand the confirmed input to the application.
    Submitted {
        /// Raw (unmasked) input text.
        text: String,
    },
}

/// Observable keyboard state, for tests and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardSnapshot {
    /// Current arrangement.
    pub keys: KeySequence,
    /// Raw input text.
    pub text: String,
    /// What the input field shows.
    pub display: String,
    /// Whether a shuffle is waiting to be applied.
    pub shuffling: bool,
    /// Current theme.
    pub theme: Theme,
    /// Current tap area in points.
    pub tap_area: f32,
}
