//! Deterministic simulation harness for ShuffleKey testing.
//!
//! Seeded implementations of the `Environment` trait so every shuffle in a
//! test can be replayed from its seed.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and real implementation,
//! and their observable states are compared.
//!
//! # Scenarios
//!
//! The `scenario` module runs scripted event sequences against a real
//! keyboard and checks the shuffle and input invariants after every step.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scenario;
pub mod sim_env;

pub use model::{
    ModelKeyboard, ModelSlot, ObservableState, Operation, OperationError, OperationResult,
};
pub use scenario::{Oracle, Scenario, ScenarioError, ScenarioReport, StepRecord};
pub use sim_env::SimEnv;
