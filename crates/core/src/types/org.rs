use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::acl::RoleType;
use crate::serde::deserialize_optional_timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUserStatus {
    SignUpStarted,
    #[default]
    InvitePending,
    Completed,
    Revoked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Org {
    pub id: i64,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleOrg {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub zip_code: String,
    pub state: String,
    pub country: String,
}

/// Quota usage for one target (`user`, `dashboard`, ...) of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgQuota {
    pub org_id: i64,
    pub target: String,
    pub limit: i64,
    pub used: i64,
}

/// Body carrying a new quota limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLimit {
    pub limit: i64,
}

/// Body carrying an organization name, for creation and renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgName {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedOrg {
    pub org_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrgUser {
    pub login_or_email: String,
    pub role: RoleType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrgUser {
    pub role: RoleType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgUser {
    pub org_id: i64,
    pub user_id: i64,
    pub email: String,
    pub avatar_url: String,
    pub login: String,
    pub role: String,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub last_seen_at: Option<DateTime<Utc>>,
    pub last_seen_at_age: String,
}

/// A pending invitation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempOrgUser {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    pub email: String,
    pub role: RoleType,
    pub invited_by_login: String,
    pub invited_by_email: String,
    pub invited_by_name: String,
    pub code: String,
    pub status: TempUserStatus,
    pub url: String,
    pub email_sent: bool,
    #[serde(deserialize_with = "deserialize_optional_timestamp")]
    pub email_sent_on: Option<DateTime<Utc>>,
    #[serde(rename = "createdOn", deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInvite {
    pub login_or_email: String,
    #[serde(default)]
    pub name: String,
    pub role: RoleType,
    #[serde(default)]
    pub send_email: bool,
}

/// UI preferences of an organization or a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: String,
    pub home_dashboard_id: i64,
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_uses_snake_case_ids() {
        let json = r#"[{"org_id":1,"target":"user","limit":10,"used":4}]"#;
        let quotas: Vec<OrgQuota> = serde_json::from_str(json).unwrap();
        assert_eq!(quotas[0].org_id, 1);
        assert_eq!(quotas[0].used, 4);
    }

    #[test]
    fn test_invite_created_on() {
        let json = r#"{"id":3,"orgId":1,"email":"a@b.c","role":"Editor","code":"xyz",
            "status":"InvitePending","emailSent":false,"emailSentOn":"0001-01-01T00:00:00Z",
            "createdOn":"2019-05-19T10:00:13Z"}"#;
        let invite: TempOrgUser = serde_json::from_str(json).unwrap();
        assert_eq!(invite.role, RoleType::Editor);
        assert_eq!(invite.status, TempUserStatus::InvitePending);
        assert!(invite.email_sent_on.is_none());
        assert!(invite.created.is_some());
    }

    #[test]
    fn test_add_org_user_body() {
        let body = AddOrgUser {
            login_or_email: "admin".to_string(),
            role: RoleType::Viewer,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"loginOrEmail":"admin","role":"Viewer"}"#
        );
    }
}
