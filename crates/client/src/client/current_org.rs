//! Current organization operations.

use grafana_core::types::{
    AddInvite, AddOrgUser, Address, Org, OrgName, OrgQuota, OrgUser, Preferences, TempOrgUser,
    UpdateOrgUser,
};

use crate::error::Result;
use crate::http::RestClient;

const CURRENT_ORG_API: &str = "/api/org";

/// Operations under `/api/org`, acting on the organization the token is using.
#[derive(Debug, Clone, Copy)]
pub struct CurrentOrg<'a> {
    rest: &'a RestClient,
}

impl<'a> CurrentOrg<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn get(&self) -> Result<Org> {
        self.rest.get(CURRENT_ORG_API).fetch().await
    }

    pub async fn update_name(&self, name: &str) -> Result<()> {
        self.rest
            .put(CURRENT_ORG_API)
            .json(&OrgName {
                name: name.to_string(),
            })
            .execute()
            .await
    }

    pub async fn quotas(&self) -> Result<Vec<OrgQuota>> {
        self.rest
            .get(CURRENT_ORG_API)
            .sub_path("/quotas")
            .fetch()
            .await
    }

    pub async fn update_address(&self, address: &Address) -> Result<()> {
        self.rest
            .put(CURRENT_ORG_API)
            .sub_path("/address")
            .json(address)
            .execute()
            .await
    }

    /// Add an existing user to the organization.
    pub async fn add_user(&self, user: &AddOrgUser) -> Result<()> {
        self.rest
            .post(CURRENT_ORG_API)
            .sub_path("/users")
            .json(user)
            .execute()
            .await
    }

    pub async fn users(&self) -> Result<Vec<OrgUser>> {
        self.rest
            .get(CURRENT_ORG_API)
            .sub_path("/users")
            .fetch()
            .await
    }

    pub async fn update_user(&self, user_id: i64, user: &UpdateOrgUser) -> Result<()> {
        self.rest
            .patch(CURRENT_ORG_API)
            .sub_path("/users/:userId")
            .path_param("userId", user_id)
            .json(user)
            .execute()
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.rest
            .delete(CURRENT_ORG_API)
            .sub_path("/users/:userId")
            .path_param("userId", user_id)
            .execute()
            .await
    }

    /// Pending invitations.
    pub async fn invites(&self) -> Result<Vec<TempOrgUser>> {
        self.rest
            .get(CURRENT_ORG_API)
            .sub_path("/invites")
            .fetch()
            .await
    }

    pub async fn add_invite(&self, invite: &AddInvite) -> Result<()> {
        self.rest
            .post(CURRENT_ORG_API)
            .sub_path("/invites")
            .json(invite)
            .execute()
            .await
    }

    pub async fn revoke_invite(&self, code: &str) -> Result<()> {
        self.rest
            .patch(CURRENT_ORG_API)
            .sub_path("/invites/:code/revoke")
            .path_param("code", code)
            .execute()
            .await
    }

    pub async fn preferences(&self) -> Result<Preferences> {
        self.rest
            .get(CURRENT_ORG_API)
            .sub_path("/preferences")
            .fetch()
            .await
    }

    pub async fn update_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.rest
            .put(CURRENT_ORG_API)
            .sub_path("/preferences")
            .json(preferences)
            .execute()
            .await
    }
}
