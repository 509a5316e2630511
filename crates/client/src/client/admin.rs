//! Server administration operations. These need a Grafana server admin.

use grafana_core::types::{
    AdminCreateUserForm, AdminCreateUserResponse, AdminSettings, AdminStats,
    AdminUpdateUserPasswordForm, AdminUpdateUserPermissionsForm, PauseAllAlertsForm,
    PauseAllAlertsResponse, QuotaLimit, UserQuota,
};

use crate::error::Result;
use crate::http::RestClient;

const ADMIN_API: &str = "/api/admin";

#[derive(Debug, Clone, Copy)]
pub struct Admin<'a> {
    rest: &'a RestClient,
}

impl<'a> Admin<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// Server settings, section by section.
    pub async fn settings(&self) -> Result<AdminSettings> {
        self.rest.get(ADMIN_API).sub_path("/settings").fetch().await
    }

    pub async fn create_user(&self, user: &AdminCreateUserForm) -> Result<AdminCreateUserResponse> {
        self.rest
            .post(ADMIN_API)
            .sub_path("/users")
            .json(user)
            .fetch()
            .await
    }

    pub async fn update_user_password(&self, user_id: i64, password: &str) -> Result<()> {
        self.rest
            .put(ADMIN_API)
            .sub_path("/users/:id/password")
            .path_param("id", user_id)
            .json(&AdminUpdateUserPasswordForm {
                password: password.to_string(),
            })
            .execute()
            .await
    }

    pub async fn update_user_permissions(&self, user_id: i64, is_grafana_admin: bool) -> Result<()> {
        self.rest
            .put(ADMIN_API)
            .sub_path("/users/:id/permissions")
            .path_param("id", user_id)
            .json(&AdminUpdateUserPermissionsForm { is_grafana_admin })
            .execute()
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.rest
            .delete(ADMIN_API)
            .sub_path("/users/:id")
            .path_param("id", user_id)
            .execute()
            .await
    }

    pub async fn user_quotas(&self, user_id: i64) -> Result<Vec<UserQuota>> {
        self.rest
            .get(ADMIN_API)
            .sub_path("/users/:id/quotas")
            .path_param("id", user_id)
            .fetch()
            .await
    }

    pub async fn update_user_quota(&self, user_id: i64, target: &str, limit: i64) -> Result<()> {
        self.rest
            .put(ADMIN_API)
            .sub_path("/users/:id/quotas/:target")
            .path_param("id", user_id)
            .path_param("target", target)
            .json(&QuotaLimit { limit })
            .execute()
            .await
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        self.rest.get(ADMIN_API).sub_path("/stats").fetch().await
    }

    pub async fn pause_all_alerts(&self, paused: bool) -> Result<PauseAllAlertsResponse> {
        self.rest
            .post(ADMIN_API)
            .sub_path("/pause-all-alerts")
            .json(&PauseAllAlertsForm { paused })
            .fetch()
            .await
    }
}
