use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_timestamp;

/// Organization role of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Viewer => "Viewer",
            RoleType::Editor => "Editor",
            RoleType::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Viewer" => Ok(RoleType::Viewer),
            "Editor" => Ok(RoleType::Editor),
            "Admin" => Ok(RoleType::Admin),
            other => Err(format!("unknown role '{other}', expected Viewer, Editor or Admin")),
        }
    }
}

/// Permission level on a folder or dashboard, sent as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Permission {
    #[default]
    View = 1,
    Edit = 2,
    Admin = 4,
}

impl From<Permission> for u8 {
    fn from(permission: Permission) -> Self {
        permission as u8
    }
}

impl TryFrom<u8> for Permission {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Permission::View),
            2 => Ok(Permission::Edit),
            4 => Ok(Permission::Admin),
            other => Err(format!("unknown permission code {other}")),
        }
    }
}

/// Permission filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionName {
    View,
    Edit,
}

impl PermissionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionName::View => "View",
            PermissionName::Edit => "Edit",
        }
    }
}

/// One entry of a folder or dashboard permission list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub updated: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub user_login: String,
    pub user_email: String,
    pub user_avatar_url: String,
    pub team_id: i64,
    pub team_email: String,
    pub team_avatar_url: String,
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleType>,
    pub permission: Permission,
    pub permission_name: String,
    pub uid: String,
    pub title: String,
    pub slug: String,
    pub is_folder: bool,
    pub url: String,
    pub inherited: bool,
}

/// One entry of a permission update. Exactly one of user, team or role is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUpdateItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleType>,
    pub permission: Permission,
}

impl PermissionUpdateItem {
    pub fn for_user(user_id: i64, permission: Permission) -> Self {
        Self {
            user_id: Some(user_id),
            permission,
            ..Self::default()
        }
    }

    pub fn for_team(team_id: i64, permission: Permission) -> Self {
        Self {
            team_id: Some(team_id),
            permission,
            ..Self::default()
        }
    }

    pub fn for_role(role: RoleType, permission: Permission) -> Self {
        Self {
            role: Some(role),
            permission,
            ..Self::default()
        }
    }
}

/// Body of a permission update; replaces every non-inherited entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePermissions {
    pub items: Vec<PermissionUpdateItem>,
}
