use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::acl::RoleType;
use crate::serde::{deserialize_null_default, deserialize_optional_timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub login: String,
    pub theme: String,
    pub org_id: i64,
    pub is_grafana_admin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchHit {
    pub id: i64,
    pub name: String,
    pub login: String,
    pub email: String,
    pub avatar_url: String,
    pub is_admin: bool,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub last_seen_at: Option<DateTime<Utc>>,
    pub last_seen_at_age: String,
}

/// One page of a user search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchPage {
    pub total_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub users: Vec<UserSearchHit>,
    pub page: i64,
    pub per_page: i64,
}

/// Profile fields a user can change. Empty fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub login: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub theme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserQuota {
    pub user_id: i64,
    pub target: String,
    pub limit: i64,
    pub used: i64,
}

/// An organization the user belongs to and their role in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOrg {
    pub org_id: i64,
    pub name: String,
    pub role: RoleType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
    pub confirm_new: String,
}

impl ChangePassword {
    pub fn new(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        let new_password = new_password.into();
        Self {
            old_password: old_password.into(),
            confirm_new: new_password.clone(),
            new_password,
        }
    }
}
