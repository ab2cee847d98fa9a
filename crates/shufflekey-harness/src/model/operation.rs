//! Operations for model-based testing.
//!
//! Operations represent everything a user can do to the keyboard. They are
//! generated randomly by proptest (or decoded by the fuzzer) and applied to
//! both the model and the real implementation.

use arbitrary::Arbitrary;
use shufflekey_core::KeyboardEvent;

/// Slot index (u8 keeps the test space small; may exceed the key count).
pub type ModelSlot = u8;

/// Operations that can be applied to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Tap the key in a slot.
    PressKey {
        /// Slot to tap (out-of-range slots must be rejected).
        slot: ModelSlot,
    },
    /// Tap delete.
    Delete,
    /// Tap clear.
    Clear,
    /// Tap shuffle.
    Shuffle,
    /// Host finished the shuffle animation.
    ShuffleApplied,
    /// Toggle password mode.
    TogglePasswordMode,
    /// Switch theme.
    NextTheme,
    /// Grow the keys.
    IncreaseTapArea,
    /// Shrink the keys.
    DecreaseTapArea,
    /// Confirm the input.
    Submit,
}

impl Operation {
    /// The keyboard event this operation sends.
    pub fn to_event(self) -> KeyboardEvent {
        match self {
            Self::PressKey { slot } => KeyboardEvent::PressKey { id: usize::from(slot) },
            Self::Delete => KeyboardEvent::Delete,
            Self::Clear => KeyboardEvent::Clear,
            Self::Shuffle => KeyboardEvent::Shuffle,
            Self::ShuffleApplied => KeyboardEvent::ShuffleApplied,
            Self::TogglePasswordMode => KeyboardEvent::TogglePasswordMode,
            Self::NextTheme => KeyboardEvent::NextTheme,
            Self::IncreaseTapArea => KeyboardEvent::IncreaseTapArea,
            Self::DecreaseTapArea => KeyboardEvent::DecreaseTapArea,
            Self::Submit => KeyboardEvent::Submit,
        }
    }
}

/// Result of applying an operation.
///
/// Used to compare model and real system behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded.
    Ok,

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Slot does not exist.
    UnknownKey,

    /// Shuffle requested before the previous one was applied.
    ShuffleInProgress,

    /// An observed arrangement broke a shuffle invariant.
    InvalidShuffle(String),
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}
