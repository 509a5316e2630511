//! Team API operations.

use grafana_core::query::TeamQuery;
use grafana_core::types::{AddTeamMember, CreatedTeam, Team, TeamForm, TeamMember, TeamSearchPage};

use crate::error::Result;
use crate::http::RestClient;

const TEAM_API: &str = "/api/teams";

/// Operations under `/api/teams`.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    rest: &'a RestClient,
}

impl<'a> Teams<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// Search teams, one page at a time.
    pub async fn search(&self, query: &TeamQuery) -> Result<TeamSearchPage> {
        self.rest
            .get(TEAM_API)
            .sub_path("/search")
            .query(query)
            .fetch()
            .await
    }

    pub async fn get_by_id(&self, team_id: i64) -> Result<Team> {
        self.rest
            .get(TEAM_API)
            .sub_path("/:teamId")
            .path_param("teamId", team_id)
            .fetch()
            .await
    }

    pub async fn members(&self, team_id: i64) -> Result<Vec<TeamMember>> {
        self.rest
            .get(TEAM_API)
            .sub_path("/:teamId/members")
            .path_param("teamId", team_id)
            .fetch()
            .await
    }

    pub async fn create(&self, team: &TeamForm) -> Result<CreatedTeam> {
        self.rest.post(TEAM_API).json(team).fetch().await
    }

    pub async fn update(&self, team_id: i64, team: &TeamForm) -> Result<()> {
        self.rest
            .put(TEAM_API)
            .sub_path("/:teamId")
            .path_param("teamId", team_id)
            .json(team)
            .execute()
            .await
    }

    pub async fn add_member(&self, team_id: i64, user_id: i64) -> Result<()> {
        self.rest
            .post(TEAM_API)
            .sub_path("/:teamId/members")
            .path_param("teamId", team_id)
            .json(&AddTeamMember { user_id })
            .execute()
            .await
    }

    pub async fn delete(&self, team_id: i64) -> Result<()> {
        self.rest
            .delete(TEAM_API)
            .sub_path("/:teamId")
            .path_param("teamId", team_id)
            .execute()
            .await
    }

    pub async fn remove_member(&self, team_id: i64, user_id: i64) -> Result<()> {
        self.rest
            .delete(TEAM_API)
            .sub_path("/:teamId/members/:userId")
            .path_param("teamId", team_id)
            .path_param("userId", user_id)
            .execute()
            .await
    }
}
