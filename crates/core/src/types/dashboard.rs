use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde::deserialize_optional_timestamp;

/// Outcome of saving or restoring a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleDashboard {
    pub version: i64,
    pub id: i64,
    pub uid: String,
    pub status: String,
    pub slug: String,
    pub url: String,
}

/// A dashboard model with the metadata Grafana keeps next to it.
///
/// The model itself stays free-form JSON: panels and templating differ between
/// Grafana versions and plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardWithMeta {
    pub meta: DashboardMeta,
    pub dashboard: Value,
}

impl DashboardWithMeta {
    /// The `title` of the dashboard model, if it has one.
    pub fn title(&self) -> Option<&str> {
        self.dashboard.get("title").and_then(Value::as_str)
    }

    pub fn uid(&self) -> Option<&str> {
        self.dashboard.get("uid").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMeta {
    pub is_starred: bool,
    pub is_home: bool,
    pub is_snapshot: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub can_save: bool,
    pub can_edit: bool,
    pub can_admin: bool,
    pub can_star: bool,
    pub slug: String,
    pub url: String,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub updated: Option<DateTime<Utc>>,
    pub updated_by: String,
    pub created_by: String,
    pub version: i64,
    pub has_acl: bool,
    pub is_folder: bool,
    pub folder_id: i64,
    pub folder_title: String,
    pub folder_url: String,
    pub provisioned: bool,
}

/// Creates or updates a dashboard.
///
/// A model without `id` creates a dashboard; with `id` and `overwrite: false`
/// Grafana rejects the save when the stored version differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDashboard {
    pub dashboard: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// A tag and how many dashboards carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardTag {
    pub term: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardVersion {
    pub id: i64,
    pub dashboard_id: i64,
    pub parent_version: i64,
    pub restored_from: i64,
    pub version: i64,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
    pub created_by: String,
    pub message: String,
    /// The dashboard model as it was at this version. Absent from version listings.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreVersion {
    pub version: i64,
}

/// Returned when a dashboard is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletedDashboard {
    pub id: i64,
    pub title: String,
    pub message: String,
}
