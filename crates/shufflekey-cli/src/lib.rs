//! Terminal host for the ShuffleKey keyboard.
//!
//! ## Architecture
//!
//! ```text
//! shufflekey-cli
//!   ├─ SystemEnv   (production Environment impl, OS entropy)
//!   ├─ Session     (feeds events, executes actions)
//!   └─ main        (clap arguments, tracing setup)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod executor;
mod system_env;

pub use error::HostError;
pub use executor::{Session, render_grid};
pub use system_env::SystemEnv;
