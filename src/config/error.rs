//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Maximum matrix order must be between 1 and {max}, got {actual}")]
    InvalidMaxOrder { actual: usize, max: usize },

    #[error("Reciprocal tolerance must be strictly between 0 and 1, got {0}")]
    InvalidReciprocalTolerance(f64),

    #[error("Model path must not be blank")]
    BlankModelPath,
}
