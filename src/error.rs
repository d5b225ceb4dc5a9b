//! Error types for configuration lookup, seed writes and live edits

use thiserror::Error;

use crate::simulation::registry::ConfigurationIdentity;

/// Result type for registry and selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors raised by the registry and the selection controller
///
/// None of these are transient: every variant points at a caller bug
/// (a write into a fixed preset, a stale name, a bad index) and is surfaced
/// immediately without touching any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("configuration {0} is a fixed preset and its seeds cannot be overwritten")]
    ImmutableConfiguration(ConfigurationIdentity),

    #[error("unknown configuration identity: {0:?}")]
    InvalidIdentity(String),

    #[error("body mass must be finite and non-negative, got {0}")]
    InvalidMass(f64),

    #[error("body index {index} out of range for {len} live bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },

    #[error("integrator returned {actual} bodies, expected {expected}")]
    IntegratorLengthMismatch { expected: usize, actual: usize },
}

/// Errors raised while loading a session configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
