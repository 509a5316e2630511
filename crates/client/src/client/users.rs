//! User API operations.

use grafana_core::query::UserQuery;
use grafana_core::types::{UpdateUser, UserOrg, UserProfile, UserSearchHit, UserSearchPage};

use crate::error::Result;
use crate::http::RestClient;

const USERS_API: &str = "/api/users";

/// Server-wide user operations under `/api/users`.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    rest: &'a RestClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// List users without paging metadata.
    pub async fn list(&self, query: &UserQuery) -> Result<Vec<UserSearchHit>> {
        self.rest.get(USERS_API).query(query).fetch().await
    }

    /// Search users with paging metadata.
    pub async fn search(&self, query: &UserQuery) -> Result<UserSearchPage> {
        self.rest
            .get(USERS_API)
            .sub_path("/search")
            .query(query)
            .fetch()
            .await
    }

    pub async fn get_by_id(&self, user_id: i64) -> Result<UserProfile> {
        self.rest
            .get(USERS_API)
            .sub_path("/:id")
            .path_param("id", user_id)
            .fetch()
            .await
    }

    /// Find a user by login or email.
    pub async fn lookup(&self, login_or_email: &str) -> Result<UserProfile> {
        self.rest
            .get(USERS_API)
            .sub_path("/lookup")
            .query_param("loginOrEmail", login_or_email)
            .fetch()
            .await
    }

    pub async fn orgs(&self, user_id: i64) -> Result<Vec<UserOrg>> {
        self.rest
            .get(USERS_API)
            .sub_path("/:id/orgs")
            .path_param("id", user_id)
            .fetch()
            .await
    }

    pub async fn update(&self, user_id: i64, user: &UpdateUser) -> Result<()> {
        self.rest
            .put(USERS_API)
            .sub_path("/:id")
            .path_param("id", user_id)
            .json(user)
            .execute()
            .await
    }

    /// Switch the active organization of another user.
    pub async fn switch_org(&self, user_id: i64, org_id: i64) -> Result<()> {
        self.rest
            .post(USERS_API)
            .sub_path("/:id/using/:orgId")
            .path_param("id", user_id)
            .path_param("orgId", org_id)
            .execute()
            .await
    }
}
