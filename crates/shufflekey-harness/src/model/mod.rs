//! Reference model for model-based testing.
//!
//! The model is a simplified implementation that captures the intended
//! behavior of the keyboard without sharing any of its code paths. It serves
//! as the oracle against which the real implementation is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Behavior not implementation: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

mod keyboard;
pub mod operation;

pub use keyboard::{ModelKeyboard, ObservableState};
pub use operation::{ModelSlot, Operation, OperationError, OperationResult};
