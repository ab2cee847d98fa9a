//! ShuffleKey core.
//!
//! Shuffle engine and action-based state machine for an on-screen keypad
//! whose keys can be rearranged at random.
//!
//! # Architecture
//!
//! The core is sans-IO:
//! - The [`shuffle`] engine is a pure function over a [`KeySequence`], a
//!   [`ShuffleConfig`] and an [`Environment`] that supplies randomness
//! - The [`Keyboard`] receives [`KeyboardEvent`]s from the host and returns
//!   [`KeyboardAction`]s (render keys, update the input field, play haptics
//!   or sounds); it never touches a UI or platform API itself
//!
//! # Components
//!
//! - [`shuffle`]: rejection-sampled shuffles with a retry cap and a
//!   deterministic fallback
//! - [`input`]: grapheme-aware append/delete/clear and password masking
//! - [`Keyboard`]: the view model tying keys, input, theme and feedback
//!   together

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod charset;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod feedback;
pub mod input;
pub mod key;
pub mod keyboard;
pub mod shuffle;
pub mod tap_area;
pub mod theme;

pub use charset::CharacterSet;
pub use config::{InputMode, KeyboardConfig, LayoutMode};
pub use env::Environment;
pub use error::{ConfigError, KeyboardError, ShuffleError, ThemeError};
pub use event::{KeyboardAction, KeyboardEvent, KeyboardSnapshot};
pub use feedback::{FeedbackKind, HapticStyle, SoundId};
pub use input::InputBuffer;
pub use key::{Key, KeyId, KeySequence};
pub use keyboard::{Keyboard, ShuffleState};
pub use shuffle::{ShuffleConfig, ShuffleOutcome, ShuffleStrategy, is_valid_shuffle};
pub use tap_area::TapArea;
pub use theme::{Gradient, Rgba, Theme, ThemeKind};
