use thiserror::Error;

/// A response that did not carry a success status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No HTTP exchange took place, so there is no status to report.
    #[error("no response was received from Grafana")]
    NoResponse,

    #[error("Grafana answered with status {status}{}", with_message(.message))]
    Status { status: u16, message: String },

    /// The error body matched none of the shapes Grafana uses.
    #[error("Grafana answered with status {status} and an error body that could not be decoded: {reason}")]
    UndecodableBody { status: u16, reason: String },
}

impl ApiError {
    /// The HTTP status, or `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NoResponse => 0,
            ApiError::Status { status, .. } | ApiError::UndecodableBody { status, .. } => *status,
        }
    }

    /// The message extracted from the body, or the reason it could not be decoded.
    pub fn message(&self) -> &str {
        match self {
            ApiError::NoResponse => "",
            ApiError::Status { message, .. } => message,
            ApiError::UndecodableBody { reason, .. } => reason,
        }
    }
}

fn with_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}
