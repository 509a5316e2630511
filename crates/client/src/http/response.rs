use grafana_core::response::{decode_success, normalize_error};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// A response read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Turns a non-success status into [`ClientError::Api`].
    pub fn error_for_status(self) -> Result<Self> {
        match normalize_error(self.status, &self.body) {
            Some(error) => Err(ClientError::Api(error)),
            None => Ok(self),
        }
    }

    /// Checks the status and discards the body.
    pub fn into_result(self) -> Result<()> {
        self.error_for_status().map(|_| ())
    }

    /// Decodes a success body, or `None` when it is empty.
    pub fn json_opt<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let response = self.error_for_status()?;
        decode_success(&response.body).map_err(ClientError::Decode)
    }

    /// Decodes a success body. An empty body gives `T::default()`.
    pub fn json<T: DeserializeOwned + Default>(self) -> Result<T> {
        self.json_opt().map(Option::unwrap_or_default)
    }
}
