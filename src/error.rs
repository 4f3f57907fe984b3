// file: src/error.rs
// version: 0.3.0
// guid: 8d2a5f91-3c4e-47b8-9e10-6a7b2c3d4e5f

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ArgoError>;

/// Error types for Argo
#[derive(Error, Debug)]
pub enum ArgoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),
}

impl ArgoError {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}
