//! Error types.

use thiserror::Error;

use crate::key::KeyId;

/// Errors from the shuffle engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShuffleError {
    /// There are no keys to shuffle.
    #[error("cannot shuffle an empty key sequence")]
    EmptySequence,

    /// Minimum change fraction outside `[0, 1)` or not finite.
    #[error("minimum change fraction must be in [0, 1), got {fraction}")]
    InvalidFraction {
        /// The rejected fraction.
        fraction: f64,
    },

    /// Retry cap of zero.
    #[error("max shuffle attempts must be at least 1")]
    InvalidAttempts,

    /// No permutation of the labels can change enough positions.
    #[error(
        "cannot change {required} of {len} positions: the labels allow at most {achievable}"
    )]
    Unsatisfiable {
        /// Positions that must change.
        required: usize,
        /// Most positions any permutation can change.
        achievable: usize,
        /// Number of keys.
        len: usize,
    },
}

/// Errors from validating a keyboard configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Character set yields no labels.
    #[error("character set has no labels")]
    EmptyCharacterSet,

    /// A label is not exactly one user-perceived character.
    #[error("label {label:?} must be a single character")]
    MultiCharacterLabel {
        /// The rejected label.
        label: String,
    },

    /// Input length limit of zero.
    #[error("max input length must be at least 1")]
    InvalidMaxLength,

    /// Shuffle settings are invalid for the configured labels.
    #[error("shuffle settings rejected: {0}")]
    Shuffle(#[from] ShuffleError),
}

/// Errors from parsing theme colours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Hex string does not have 3, 6, or 8 digits.
    #[error("invalid hex colour: {input:?}")]
    InvalidHex {
        /// The rejected input.
        input: String,
    },
}

/// Errors from keyboard operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyboardError {
    /// A previous shuffle has not been applied yet.
    #[error("shuffle already in progress")]
    ShuffleInProgress,

    /// Pressed key does not exist.
    #[error("unknown key: {id}")]
    UnknownKey {
        /// The requested slot.
        id: KeyId,
    },

    /// Shuffle engine rejected the request.
    #[error("shuffle failed: {0}")]
    Shuffle(#[from] ShuffleError),
}

impl KeyboardError {
    /// Returns true if this error is fatal (unrecoverable).
    ///
    /// Fatal errors indicate a host bug or a configuration that can never
    /// work. Transient errors go away once the host catches up.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::UnknownKey { .. } | Self::Shuffle(_) => true,
            Self::ShuffleInProgress => false,
        }
    }
}
