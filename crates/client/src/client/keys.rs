//! API key operations.

use grafana_core::types::{ApiKey, ApiKeyForm, CreatedApiKey};

use crate::error::Result;
use crate::http::RestClient;

const KEY_API: &str = "/api/auth/keys";

#[derive(Debug, Clone, Copy)]
pub struct Keys<'a> {
    rest: &'a RestClient,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self) -> Result<Vec<ApiKey>> {
        self.rest.get(KEY_API).fetch().await
    }

    /// Create a key. The secret is only returned here.
    pub async fn create(&self, key: &ApiKeyForm) -> Result<CreatedApiKey> {
        self.rest.post(KEY_API).json(key).fetch().await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.rest
            .delete(KEY_API)
            .sub_path("/:id")
            .path_param("id", id)
            .execute()
            .await
    }
}
