//! Task report shaping
//!
//! Every task hands the orchestration host one of these: either a successful
//! response with a changed/unchanged marker, or a failure with the underlying
//! message. The host serializes the report verbatim and maps failures to exit
//! codes.

use serde::Serialize;
use serde_json::Value;

use crate::error::SoarError;

/// The structured result of a single task invocation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskReport {
    /// Whether the task modified the remote platform
    pub changed: bool,
    /// Whether the task failed
    pub failed: bool,
    /// Failure message, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Decoded response from the remote service, returned unmodified
    pub response: Value,
}

impl TaskReport {
    /// Successful mutating task
    pub fn ok(response: Value) -> Self {
        Self {
            changed: true,
            failed: false,
            msg: None,
            response,
        }
    }

    /// Successful read-only task
    pub fn ok_unchanged(response: Value) -> Self {
        Self {
            changed: false,
            failed: false,
            msg: None,
            response,
        }
    }

    /// Failed task with a user-visible message
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            failed: true,
            msg: Some(msg.into()),
            response: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }
}

impl From<SoarError> for TaskReport {
    fn from(err: SoarError) -> Self {
        Self::failure(err.to_string())
    }
}
