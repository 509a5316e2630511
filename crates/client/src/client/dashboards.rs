//! Dashboard API operations.

use grafana_core::types::{
    DashboardTag, DashboardVersion, DashboardWithMeta, DeletedDashboard, PermissionItem,
    PermissionUpdateItem, RestoreVersion, SaveDashboard, SimpleDashboard, UpdatePermissions,
};

use crate::error::Result;
use crate::http::RestClient;

const DASHBOARD_API: &str = "/api/dashboards";

#[derive(Debug, Clone, Copy)]
pub struct Dashboards<'a> {
    rest: &'a RestClient,
}

impl<'a> Dashboards<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn get_by_uid(&self, uid: &str) -> Result<DashboardWithMeta> {
        self.rest
            .get(DASHBOARD_API)
            .sub_path("/uid/:uid")
            .path_param("uid", uid)
            .fetch()
            .await
    }

    /// Slug lookups are deprecated in recent Grafana releases; prefer [`Self::get_by_uid`].
    pub async fn get_by_slug(&self, slug: &str) -> Result<DashboardWithMeta> {
        self.rest
            .get(DASHBOARD_API)
            .sub_path("/db/:slug")
            .path_param("slug", slug)
            .fetch()
            .await
    }

    pub async fn home(&self) -> Result<DashboardWithMeta> {
        self.rest.get(DASHBOARD_API).sub_path("/home").fetch().await
    }

    /// Create or update a dashboard.
    pub async fn save(&self, dashboard: &SaveDashboard) -> Result<SimpleDashboard> {
        self.rest
            .post(DASHBOARD_API)
            .sub_path("/db")
            .json(dashboard)
            .fetch()
            .await
    }

    pub async fn delete_by_uid(&self, uid: &str) -> Result<DeletedDashboard> {
        self.rest
            .delete(DASHBOARD_API)
            .sub_path("/uid/:uid")
            .path_param("uid", uid)
            .fetch()
            .await
    }

    pub async fn delete_by_slug(&self, slug: &str) -> Result<DeletedDashboard> {
        self.rest
            .delete(DASHBOARD_API)
            .sub_path("/db/:slug")
            .path_param("slug", slug)
            .fetch()
            .await
    }

    pub async fn tags(&self) -> Result<Vec<DashboardTag>> {
        self.rest.get(DASHBOARD_API).sub_path("/tags").fetch().await
    }

    pub async fn versions(&self, dashboard_id: i64) -> Result<Vec<DashboardVersion>> {
        self.rest
            .get(DASHBOARD_API)
            .sub_path("/id/:dashboardId/versions")
            .path_param("dashboardId", dashboard_id)
            .fetch()
            .await
    }

    /// One version, including the saved dashboard model.
    pub async fn version(&self, dashboard_id: i64, version_id: i64) -> Result<DashboardVersion> {
        self.rest
            .get(DASHBOARD_API)
            .sub_path("/id/:dashboardId/versions/:id")
            .path_param("dashboardId", dashboard_id)
            .path_param("id", version_id)
            .fetch()
            .await
    }

    pub async fn restore_version(&self, dashboard_id: i64, version: i64) -> Result<SimpleDashboard> {
        self.rest
            .post(DASHBOARD_API)
            .sub_path("/id/:dashboardId/restore")
            .path_param("dashboardId", dashboard_id)
            .json(&RestoreVersion { version })
            .fetch()
            .await
    }

    pub async fn permissions(&self, dashboard_id: i64) -> Result<Vec<PermissionItem>> {
        self.rest
            .get(DASHBOARD_API)
            .sub_path("/id/:dashboardId/permissions")
            .path_param("dashboardId", dashboard_id)
            .fetch()
            .await
    }

    /// Replace every permission of the dashboard with `items`.
    pub async fn update_permissions(
        &self,
        dashboard_id: i64,
        items: &[PermissionUpdateItem],
    ) -> Result<()> {
        self.rest
            .post(DASHBOARD_API)
            .sub_path("/id/:dashboardId/permissions")
            .path_param("dashboardId", dashboard_id)
            .json(&UpdatePermissions {
                items: items.to_vec(),
            })
            .execute()
            .await
    }
}
