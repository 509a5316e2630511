//! Organization API operations.

use grafana_core::query::OrgQuery;
use grafana_core::types::{
    AddOrgUser, Address, CreatedOrg, Org, OrgName, OrgQuota, OrgUser, QuotaLimit, SimpleOrg,
    UpdateOrgUser,
};

use crate::error::Result;
use crate::http::RestClient;

const ORGS_API: &str = "/api/orgs";

/// Server-wide organization operations under `/api/orgs`.
#[derive(Debug, Clone, Copy)]
pub struct Orgs<'a> {
    rest: &'a RestClient,
}

impl<'a> Orgs<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(&self, name: &str) -> Result<CreatedOrg> {
        self.rest
            .post(ORGS_API)
            .json(&OrgName {
                name: name.to_string(),
            })
            .fetch()
            .await
    }

    pub async fn search(&self, query: &OrgQuery) -> Result<Vec<SimpleOrg>> {
        self.rest.get(ORGS_API).query(query).fetch().await
    }

    pub async fn get_by_id(&self, org_id: i64) -> Result<Org> {
        self.rest
            .get(ORGS_API)
            .sub_path("/:orgId")
            .path_param("orgId", org_id)
            .fetch()
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Org> {
        self.rest
            .get(ORGS_API)
            .sub_path("/name/:name")
            .path_param("name", name)
            .fetch()
            .await
    }

    pub async fn delete(&self, org_id: i64) -> Result<()> {
        self.rest
            .delete(ORGS_API)
            .sub_path("/:orgId")
            .path_param("orgId", org_id)
            .execute()
            .await
    }

    pub async fn update_name(&self, org_id: i64, name: &str) -> Result<()> {
        self.rest
            .put(ORGS_API)
            .sub_path("/:orgId")
            .path_param("orgId", org_id)
            .json(&OrgName {
                name: name.to_string(),
            })
            .execute()
            .await
    }

    pub async fn update_address(&self, org_id: i64, address: &Address) -> Result<()> {
        self.rest
            .put(ORGS_API)
            .sub_path("/:orgId/address")
            .path_param("orgId", org_id)
            .json(address)
            .execute()
            .await
    }

    pub async fn users(&self, org_id: i64) -> Result<Vec<OrgUser>> {
        self.rest
            .get(ORGS_API)
            .sub_path("/:orgId/users")
            .path_param("orgId", org_id)
            .fetch()
            .await
    }

    pub async fn add_user(&self, org_id: i64, user: &AddOrgUser) -> Result<()> {
        self.rest
            .post(ORGS_API)
            .sub_path("/:orgId/users")
            .path_param("orgId", org_id)
            .json(user)
            .execute()
            .await
    }

    pub async fn update_user(&self, org_id: i64, user_id: i64, user: &UpdateOrgUser) -> Result<()> {
        self.rest
            .patch(ORGS_API)
            .sub_path("/:orgId/users/:userId")
            .path_param("orgId", org_id)
            .path_param("userId", user_id)
            .json(user)
            .execute()
            .await
    }

    pub async fn delete_user(&self, org_id: i64, user_id: i64) -> Result<()> {
        self.rest
            .delete(ORGS_API)
            .sub_path("/:orgId/users/:userId")
            .path_param("orgId", org_id)
            .path_param("userId", user_id)
            .execute()
            .await
    }

    pub async fn quotas(&self, org_id: i64) -> Result<Vec<OrgQuota>> {
        self.rest
            .get(ORGS_API)
            .sub_path("/:orgId/quotas")
            .path_param("orgId", org_id)
            .fetch()
            .await
    }

    /// Set the limit of one quota target, e.g. `dashboard`.
    pub async fn update_quota(&self, org_id: i64, target: &str, limit: i64) -> Result<()> {
        self.rest
            .put(ORGS_API)
            .sub_path("/:orgId/quotas/:target")
            .path_param("orgId", org_id)
            .path_param("target", target)
            .json(&QuotaLimit { limit })
            .execute()
            .await
    }
}
