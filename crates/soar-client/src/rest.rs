//! REST client seam
//!
//! The trait every task is written against. Implementations authenticate and
//! move bytes; they never interpret responses beyond JSON decoding, and they
//! never retry.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use soar_core::SoarError;

/// Client errors: transport problems, auth rejections, and remote API errors
/// with the response body preserved.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("remote API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for SoarError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(e) => SoarError::Transport(e.to_string()),
            ClientError::Unauthorized(message) => SoarError::Unauthorized { message },
            ClientError::Api { status, message } => SoarError::Api { status, message },
            ClientError::InvalidUrl(e) => SoarError::Config(e.to_string()),
            ClientError::Decode(e) => SoarError::Serialization(e),
        }
    }
}

/// Authenticated access to the platform's REST surface
///
/// Paths are platform paths relative to the organization scope
/// (`/incidents`, `/artifacts`, ...). Paths starting with `/rest/` bypass the
/// organization scope and are resolved against the instance root; the privacy
/// endpoints need this.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Issue a GET and return the decoded JSON response verbatim
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    /// Issue a POST with a JSON body and return the decoded response verbatim
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError>;
}
