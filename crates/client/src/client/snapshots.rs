//! Dashboard snapshot operations.

use grafana_core::types::{
    CreateSnapshot, CreatedSnapshot, DashboardWithMeta, SnapshotSharingOptions,
};

use crate::error::Result;
use crate::http::RestClient;

const SNAPSHOT_API: &str = "/api/snapshots";
const SNAPSHOT_DELETE_API: &str = "/api/snapshots-delete";

#[derive(Debug, Clone, Copy)]
pub struct Snapshots<'a> {
    rest: &'a RestClient,
}

impl<'a> Snapshots<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(&self, snapshot: &CreateSnapshot) -> Result<CreatedSnapshot> {
        self.rest.post(SNAPSHOT_API).json(snapshot).fetch().await
    }

    pub async fn sharing_options(&self) -> Result<SnapshotSharingOptions> {
        self.rest
            .get(SNAPSHOT_API)
            .sub_path("/shared-options")
            .fetch()
            .await
    }

    pub async fn get_by_key(&self, key: &str) -> Result<DashboardWithMeta> {
        self.rest
            .get(SNAPSHOT_API)
            .sub_path("/:key")
            .path_param("key", key)
            .fetch()
            .await
    }

    pub async fn delete_by_key(&self, key: &str) -> Result<()> {
        self.rest
            .delete(SNAPSHOT_API)
            .sub_path("/:key")
            .path_param("key", key)
            .execute()
            .await
    }

    /// Delete with the secret delete key, which Grafana accepts as a GET.
    pub async fn delete_by_delete_key(&self, delete_key: &str) -> Result<()> {
        self.rest
            .get(SNAPSHOT_DELETE_API)
            .sub_path("/:deleteKey")
            .path_param("deleteKey", delete_key)
            .execute()
            .await
    }
}
