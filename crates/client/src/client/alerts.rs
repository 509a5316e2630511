//! Legacy dashboard alert operations.

use grafana_core::query::AlertQuery;
use grafana_core::types::{
    Alert, AlertDashboardState, AlertTestRequest, AlertTestResult, PauseAlertForm,
    PauseAlertResponse,
};

use crate::error::Result;
use crate::http::RestClient;

const ALERT_API: &str = "/api/alerts";

#[derive(Debug, Clone, Copy)]
pub struct Alerts<'a> {
    rest: &'a RestClient,
}

impl<'a> Alerts<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self, query: &AlertQuery) -> Result<Vec<Alert>> {
        self.rest.get(ALERT_API).query(query).fetch().await
    }

    pub async fn get_by_id(&self, alert_id: i64) -> Result<Alert> {
        self.rest
            .get(ALERT_API)
            .sub_path("/:alertId")
            .path_param("alertId", alert_id)
            .fetch()
            .await
    }

    /// Current state of every alert on one dashboard.
    pub async fn states_for_dashboard(&self, dashboard_id: i64) -> Result<Vec<AlertDashboardState>> {
        self.rest
            .get(ALERT_API)
            .sub_path("/states-for-dashboard")
            .query_param("dashboardId", dashboard_id)
            .fetch()
            .await
    }

    /// Evaluate the alert rule of a panel without saving it.
    pub async fn test(&self, request: &AlertTestRequest) -> Result<AlertTestResult> {
        self.rest
            .post(ALERT_API)
            .sub_path("/test")
            .json(request)
            .fetch()
            .await
    }

    pub async fn pause(&self, alert_id: i64, paused: bool) -> Result<PauseAlertResponse> {
        self.rest
            .post(ALERT_API)
            .sub_path("/:alertId/pause")
            .path_param("alertId", alert_id)
            .json(&PauseAlertForm { alert_id, paused })
            .fetch()
            .await
    }
}
