//! Core error types for SOAR RS
//!
//! Two families of failure exist in this system: malformed task input, which
//! must fail before any network call is made, and transport/remote-API
//! failures, which are surfaced to the host with the underlying message
//! intact. No retries, no partial success.

use thiserror::Error;

/// Top-level error type for all SOAR task operations
#[derive(Error, Debug)]
pub enum SoarError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Remote API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SoarError {
    /// Process exit code reported to the task-orchestration host
    pub fn exit_code(&self) -> i32 {
        match self {
            SoarError::Validation(_) | SoarError::Config(_) => 2,
            SoarError::Unauthorized { .. } => 3,
            SoarError::Transport(_) | SoarError::Api { .. } => 1,
            SoarError::Serialization(_) => 2,
        }
    }

    /// Stable machine-readable code for structured output
    pub fn error_code(&self) -> &'static str {
        match self {
            SoarError::Validation(_) => "validation_failed",
            SoarError::Config(_) => "configuration_error",
            SoarError::Transport(_) => "transport_error",
            SoarError::Unauthorized { .. } => "unauthorized",
            SoarError::Api { .. } => "remote_api_error",
            SoarError::Serialization(_) => "serialization_error",
        }
    }
}

/// Standard Result type for SOAR operations
pub type SoarResult<T> = Result<T, SoarError>;
