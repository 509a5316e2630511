use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub url: String,
    pub has_acl: bool,
    pub can_save: bool,
    pub can_edit: bool,
    pub can_admin: bool,
    pub created_by: String,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
    pub updated_by: String,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub updated: Option<DateTime<Utc>>,
    pub version: i64,
}

/// Folder entry of a folder listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleFolder {
    pub id: i64,
    pub uid: String,
    pub title: String,
}

/// Creates a folder. An empty `uid` lets Grafana generate one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolder {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

/// Updates a folder. Setting `uid` to a new value changes the folder's uid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolder {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    pub title: String,
    pub version: i64,
    #[serde(default)]
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_folder_without_uid() {
        let body = CreateFolder {
            title: "Department ABC".to_string(),
            uid: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"Department ABC"}"#
        );
    }

    #[test]
    fn test_folder_decodes() {
        let json = r#"{"id":1,"uid":"nErXDvCkzz","title":"Department ABC",
            "url":"/dashboards/f/nErXDvCkzz/department-abc","hasAcl":false,"canSave":true,
            "canEdit":true,"canAdmin":true,"createdBy":"admin","created":"2018-01-31T17:43:12+01:00",
            "updatedBy":"admin","updated":"2018-01-31T17:43:12+01:00","version":1}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.uid, "nErXDvCkzz");
        assert!(folder.can_admin);
        assert_eq!(folder.version, 1);
    }
}
