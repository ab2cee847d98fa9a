//! Terminal host errors.

use shufflekey_core::KeyboardError;
use thiserror::Error;

/// Errors raised while driving the keyboard from the terminal.
#[derive(Debug, Error)]
pub enum HostError {
    /// The keyboard rejected an event.
    #[error("keyboard error: {0}")]
    Keyboard(#[from] KeyboardError),

    /// Writing to the terminal failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A character to type has no key on the keyboard.
    #[error("no key labelled {label:?}")]
    UnknownLabel {
        /// The missing label.
        label: String,
    },
}
