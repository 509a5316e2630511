//! Folder API operations.

use grafana_core::types::{
    CreateFolder, Folder, PermissionItem, PermissionUpdateItem, SimpleFolder, UpdateFolder,
    UpdatePermissions,
};

use crate::error::Result;
use crate::http::RestClient;

const FOLDER_API: &str = "/api/folders";

/// Page size used when `list` is given no limit.
pub const DEFAULT_FOLDER_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct Folders<'a> {
    rest: &'a RestClient,
}

impl<'a> Folders<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// List folders, at most `limit` of them (default 1000).
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<SimpleFolder>> {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_FOLDER_LIMIT);
        self.rest
            .get(FOLDER_API)
            .query_param("limit", limit)
            .fetch()
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Folder> {
        self.rest
            .get(FOLDER_API)
            .sub_path("/id/:id")
            .path_param("id", id)
            .fetch()
            .await
    }

    pub async fn get_by_uid(&self, uid: &str) -> Result<Folder> {
        self.rest
            .get(FOLDER_API)
            .sub_path("/:uid")
            .path_param("uid", uid)
            .fetch()
            .await
    }

    /// Create a folder. An empty `uid` lets Grafana generate one.
    pub async fn create(&self, title: &str, uid: &str) -> Result<Folder> {
        self.rest
            .post(FOLDER_API)
            .json(&CreateFolder {
                title: title.to_string(),
                uid: uid.to_string(),
            })
            .fetch()
            .await
    }

    pub async fn update(&self, uid: &str, folder: &UpdateFolder) -> Result<Folder> {
        self.rest
            .put(FOLDER_API)
            .sub_path("/:uid")
            .path_param("uid", uid)
            .json(folder)
            .fetch()
            .await
    }

    /// Delete a folder and every dashboard in it.
    pub async fn delete(&self, uid: &str) -> Result<()> {
        self.rest
            .delete(FOLDER_API)
            .sub_path("/:uid")
            .path_param("uid", uid)
            .execute()
            .await
    }

    pub async fn permissions(&self, uid: &str) -> Result<Vec<PermissionItem>> {
        self.rest
            .get(FOLDER_API)
            .sub_path("/:uid/permissions")
            .path_param("uid", uid)
            .fetch()
            .await
    }

    pub async fn update_permissions(&self, uid: &str, items: &[PermissionUpdateItem]) -> Result<()> {
        self.rest
            .post(FOLDER_API)
            .sub_path("/:uid/permissions")
            .path_param("uid", uid)
            .json(&UpdatePermissions {
                items: items.to_vec(),
            })
            .execute()
            .await
    }
}
