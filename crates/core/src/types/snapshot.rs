use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Creates a snapshot of a dashboard model.
///
/// `key` and `delete_key` are only sent when registering an external snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshot {
    pub dashboard: Value,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Seconds until the snapshot expires; `0` keeps it forever.
    #[serde(default)]
    pub expires: i64,
    #[serde(default)]
    pub external: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delete_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedSnapshot {
    pub key: String,
    pub delete_key: String,
    pub url: String,
    pub delete_url: String,
}

/// Where snapshots are published when shared externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotSharingOptions {
    #[serde(rename = "externalSnapshotURL")]
    pub external_snapshot_url: String,
    pub external_snapshot_name: String,
    pub external_enabled: bool,
}
