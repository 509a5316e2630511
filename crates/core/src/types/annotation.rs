use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde::deserialize_null_default;

/// Which annotations an annotation query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    Alert,
    Annotation,
}

impl AnnotationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationType::Alert => "alert",
            AnnotationType::Annotation => "annotation",
        }
    }
}

/// Times are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<i64>,
    pub time: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(default)]
    pub is_region: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnotation {
    pub id: i64,
    pub time: i64,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_region: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<i64>,
}

/// Selects the annotations removed by a mass delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAnnotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}

/// Graphite flavoured annotation; `when` is epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGraphiteAnnotation {
    pub when: i64,
    pub what: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedAnnotation {
    pub id: i64,
    pub end_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedGraphiteAnnotation {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotation {
    pub id: i64,
    pub alert_id: i64,
    pub alert_name: String,
    pub dashboard_id: i64,
    pub panel_id: i64,
    pub user_id: i64,
    pub new_state: String,
    pub prev_state: String,
    pub created: i64,
    pub updated: i64,
    pub time: i64,
    pub time_end: i64,
    pub text: String,
    pub region_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    pub login: String,
    pub email: String,
    pub avatar_url: String,
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_annotation_skips_unset() {
        let body = CreateAnnotation {
            time: 1507037197339,
            text: "Annotation Description".to_string(),
            tags: vec!["tag1".to_string()],
            ..CreateAnnotation::default()
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"time":1507037197339,"text":"Annotation Description","tags":["tag1"],"isRegion":false}"#
        );
    }

    #[test]
    fn test_annotation_with_null_tags() {
        let json = r#"[{"id":1124,"alertId":0,"dashboardId":468,"panelId":2,"userId":1,
            "time":1507266395000,"text":"test","tags":null,"login":"admin","data":{}}]"#;
        let annotations: Vec<Annotation> = serde_json::from_str(json).unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].dashboard_id, 468);
        assert!(annotations[0].tags.is_empty());
    }
}
