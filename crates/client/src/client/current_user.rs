//! Signed-in user operations.

use grafana_core::types::{ChangePassword, Preferences, UpdateUser, UserOrg, UserProfile, UserQuota};

use crate::error::Result;
use crate::http::RestClient;

const CURRENT_USER_API: &str = "/api/user";

/// Operations under `/api/user`, acting on the owner of the token.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser<'a> {
    rest: &'a RestClient,
}

impl<'a> CurrentUser<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn get(&self) -> Result<UserProfile> {
        self.rest.get(CURRENT_USER_API).fetch().await
    }

    pub async fn update(&self, user: &UpdateUser) -> Result<()> {
        self.rest.put(CURRENT_USER_API).json(user).execute().await
    }

    pub async fn switch_org(&self, org_id: i64) -> Result<()> {
        self.rest
            .post(CURRENT_USER_API)
            .sub_path("/using/:orgId")
            .path_param("orgId", org_id)
            .execute()
            .await
    }

    pub async fn orgs(&self) -> Result<Vec<UserOrg>> {
        self.rest
            .get(CURRENT_USER_API)
            .sub_path("/orgs")
            .fetch()
            .await
    }

    pub async fn star_dashboard(&self, dashboard_id: i64) -> Result<()> {
        self.rest
            .post(CURRENT_USER_API)
            .sub_path("/stars/dashboard/:dashboardId")
            .path_param("dashboardId", dashboard_id)
            .execute()
            .await
    }

    pub async fn unstar_dashboard(&self, dashboard_id: i64) -> Result<()> {
        self.rest
            .delete(CURRENT_USER_API)
            .sub_path("/stars/dashboard/:dashboardId")
            .path_param("dashboardId", dashboard_id)
            .execute()
            .await
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        self.rest
            .put(CURRENT_USER_API)
            .sub_path("/password")
            .json(&ChangePassword::new(old_password, new_password))
            .execute()
            .await
    }

    pub async fn quotas(&self) -> Result<Vec<UserQuota>> {
        self.rest
            .get(CURRENT_USER_API)
            .sub_path("/quotas")
            .fetch()
            .await
    }

    pub async fn set_help_flag(&self, flag_id: i64) -> Result<()> {
        self.rest
            .put(CURRENT_USER_API)
            .sub_path("/helpflags/:flagId")
            .path_param("flagId", flag_id)
            .execute()
            .await
    }

    /// Grafana exposes this reset as a GET.
    pub async fn clear_help_flags(&self) -> Result<()> {
        self.rest
            .get(CURRENT_USER_API)
            .sub_path("/helpflags/clear")
            .execute()
            .await
    }

    pub async fn preferences(&self) -> Result<Preferences> {
        self.rest
            .get(CURRENT_USER_API)
            .sub_path("/preferences")
            .fetch()
            .await
    }

    pub async fn update_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.rest
            .put(CURRENT_USER_API)
            .sub_path("/preferences")
            .json(preferences)
            .execute()
            .await
    }
}
