//! Config module.
//! Provides the injectable environment source consulted by temp-dir
//! resolution and the verbosity type used by `logging::init_tracing`.

pub mod env;
pub mod types;

pub use env::{EnvSource, ProcessEnv};
pub use types::LogLevel;
