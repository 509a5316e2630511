//! Client error types.

use grafana_core::request::BuildError;
use grafana_core::response::ApiError;
use thiserror::Error;

use crate::http::CancelCause;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// `Build` and `Serialize` are raised before anything is sent. `Transport` and
/// `Cancelled` mean no usable response came back. `Api` carries a non-success
/// status and `Decode` a success body that did not match the expected type.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("unable to build the request: {0}")]
    Build(#[from] BuildError),

    #[error("unable to encode the request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("request to Grafana failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to Grafana was abandoned: {0}")]
    Cancelled(CancelCause),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unable to decode the response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The HTTP status behind the error, `0` when no response was involved.
    pub fn status(&self) -> u16 {
        match self {
            ClientError::Api(error) => error.status(),
            ClientError::Transport(error) => error.status().map_or(0, |s| s.as_u16()),
            _ => 0,
        }
    }

    /// The message Grafana returned, for API errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            ClientError::Api(error) => Some(error.message()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}
