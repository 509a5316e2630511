use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde::{deserialize_null_default, deserialize_optional_timestamp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertState {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "no_data")]
    NoData,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "alerting")]
    Alerting,
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "pending")]
    Pending,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl AlertState {
    /// The value used on the wire and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertState::All => "ALL",
            AlertState::NoData => "no_data",
            AlertState::Paused => "paused",
            AlertState::Alerting => "alerting",
            AlertState::Ok => "ok",
            AlertState::Pending => "pending",
            AlertState::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for AlertState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            AlertState::All,
            AlertState::NoData,
            AlertState::Paused,
            AlertState::Alerting,
            AlertState::Ok,
            AlertState::Pending,
            AlertState::Unknown,
        ]
        .into_iter()
        .find(|state| state.as_str() == s)
        .ok_or_else(|| format!("unknown alert state '{s}'"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alert {
    pub id: i64,
    pub dashboard_id: i64,
    #[serde(alias = "dashboardUId")]
    pub dashboard_uid: String,
    pub dashboard_slug: String,
    pub panel_id: i64,
    pub name: String,
    pub state: AlertState,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub new_state_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub eval_date: Option<DateTime<Utc>>,
    pub eval_data: Value,
    pub execution_error: String,
    pub url: String,
}

/// State of one alert of a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertDashboardState {
    pub id: i64,
    pub dashboard_id: i64,
    pub panel_id: i64,
    pub state: AlertState,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub new_state_date: Option<DateTime<Utc>>,
}

/// Runs the alert rule of a panel without saving it.
///
/// `dashboard` is the full dashboard JSON and must at least hold its `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTestRequest {
    pub dashboard: Value,
    pub panel_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertTestResult {
    pub firing: bool,
    pub state: AlertState,
    pub condition_evals: String,
    pub time_ms: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(
        rename = "matches",
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub eval_matches: Vec<EvalMatch>,
    #[serde(deserialize_with = "deserialize_null_default", skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<AlertTestLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertTestLog {
    pub message: String,
    pub data: Value,
}

/// A series that matched the alert condition. `value` is `None` for a null point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalMatch {
    #[serde(deserialize_with = "deserialize_null_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    pub metric: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseAlertForm {
    pub alert_id: i64,
    pub paused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PauseAlertResponse {
    pub alert_id: i64,
    pub state: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wire_names() {
        assert_eq!(serde_json::to_string(&AlertState::NoData).unwrap(), r#""no_data""#);
        assert_eq!(serde_json::to_string(&AlertState::All).unwrap(), r#""ALL""#);
        let state: AlertState = serde_json::from_str(r#""alerting""#).unwrap();
        assert_eq!(state, AlertState::Alerting);
        assert_eq!("pending".parse::<AlertState>().unwrap(), AlertState::Pending);
        assert!("Pending".parse::<AlertState>().is_err());
    }

    #[test]
    fn test_alert_decodes() {
        let json = r#"{
            "id": 1, "dashboardId": 1, "dashboardUId": "ABcdEFghij", "dashboardSlug": "sensors",
            "panelId": 1, "name": "fire place sensor", "state": "alerting",
            "newStateDate": "2018-05-14T05:55:20+02:00", "evalDate": "0001-01-01T00:00:00Z",
            "evalData": null, "executionError": "", "url": "http://grafana.com/dashboard/db/sensors"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.name, "fire place sensor");
        assert_eq!(alert.dashboard_uid, "ABcdEFghij");
        assert_eq!(alert.state, AlertState::Alerting);
        assert!(alert.new_state_date.is_some());
        assert!(alert.eval_date.is_none());
        assert_eq!(alert.eval_data, Value::Null);
    }

    #[test]
    fn test_test_result_with_null_matches() {
        let json = r#"{"firing":true,"state":"alerting","conditionEvals":"true = true",
            "timeMs":"1.2ms","matches":[{"metric":"cpu","value":null,"tags":null}],"logs":null}"#;
        let result: AlertTestResult = serde_json::from_str(json).unwrap();
        assert!(result.firing);
        assert_eq!(result.eval_matches.len(), 1);
        assert_eq!(result.eval_matches[0].value, None);
        assert!(result.eval_matches[0].tags.is_empty());
        assert!(result.logs.is_empty());
    }
}
