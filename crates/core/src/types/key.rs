use serde::{Deserialize, Serialize};

use super::acl::RoleType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    pub id: i64,
    pub name: String,
    pub role: RoleType,
}

/// Creates an API key. Without `seconds_to_live` the key never expires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyForm {
    pub name: String,
    pub role: RoleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_to_live: Option<i64>,
}

/// The secret is only returned once, at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedApiKey {
    pub name: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_form() {
        let form = ApiKeyForm {
            name: "test_key".to_string(),
            role: RoleType::Admin,
            seconds_to_live: None,
        };
        assert_eq!(
            serde_json::to_string(&form).unwrap(),
            r#"{"name":"test_key","role":"Admin"}"#
        );
    }
}
