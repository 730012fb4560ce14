//! Error types and handling
//!
//! Every error here is a fail-fast precondition violation: the operation that
//! raised it is aborted and nothing is retried.

use crate::types::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A parameter was outside its permitted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dequeue was called on an empty request queue
    #[error("Request queue is empty")]
    EmptyQueue,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::InvalidParameter(error.to_string())
    }
}

impl SimulationError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidParameter(_) => "Invalid Parameter",
            SimulationError::EmptyQueue => "Empty Queue",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
