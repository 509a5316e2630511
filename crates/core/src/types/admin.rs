use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server settings, keyed by ini section then by setting name.
///
/// Sections are returned as Grafana names them (`auth.anonymous`, `smtp`, ...).
pub type AdminSettings = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCreateUserForm {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub login: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCreateUserResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUpdateUserPasswordForm {
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserPermissionsForm {
    pub is_grafana_admin: bool,
}

/// Instance wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub users: i64,
    pub orgs: i64,
    pub dashboards: i64,
    pub snapshots: i64,
    pub tags: i64,
    pub datasources: i64,
    pub playlists: i64,
    pub stars: i64,
    pub alerts: i64,
    pub active_users: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseAllAlertsForm {
    pub paused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PauseAllAlertsResponse {
    #[serde(alias = "alertAffected")]
    pub alerts_affected: i64,
    pub state: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_sections() {
        let json = r#"{
            "DEFAULT": {"app_mode": "production", "instance_name": "grafana"},
            "auth.anonymous": {"enabled": "false", "org_name": "Main Org.", "org_role": "Viewer"}
        }"#;
        let settings: AdminSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings["DEFAULT"]["app_mode"], "production");
        assert_eq!(settings["auth.anonymous"]["org_role"], "Viewer");
    }

    #[test]
    fn test_create_user_form_omits_empty_fields() {
        let form = AdminCreateUserForm {
            login: "jdoe".to_string(),
            password: "secret".to_string(),
            ..AdminCreateUserForm::default()
        };
        assert_eq!(
            serde_json::to_string(&form).unwrap(),
            r#"{"login":"jdoe","password":"secret"}"#
        );
    }

    #[test]
    fn test_stats_camel_case() {
        let stats: AdminStats =
            serde_json::from_str(r#"{"users":3,"orgs":1,"activeUsers":2}"#).unwrap();
        assert_eq!(stats.users, 3);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.dashboards, 0);
    }
}
