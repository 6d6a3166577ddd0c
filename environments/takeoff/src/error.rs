//! Error types for the takeoff task.

use thiserror::Error;

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors raised at the task boundary.
///
/// Simulator failures are not represented here: the simulator contract is
/// infallible and a panicking simulator propagates unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// Invalid configuration (zero action repeat, inverted bounds, etc.)
    #[error("Invalid configuration for '{param}': {message}")]
    InvalidConfig { param: String, message: String },

    /// Action (or action batch) has the wrong length
    #[error("Action dimension mismatch: expected {expected}, got {actual}")]
    ActionDimensionMismatch { expected: usize, actual: usize },

    /// Rotor command outside the declared bounds (reject policy only)
    #[error("Action component {index} = {value} outside [{low}, {high}]")]
    ActionOutOfBounds {
        index: usize,
        value: f64,
        low: f64,
        high: f64,
    },

    /// Task index outside a pool
    #[error("Task index {index} out of range for pool of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TaskError {
    pub(crate) fn invalid_config(param: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            message: message.into(),
        }
    }
}
