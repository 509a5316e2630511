use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Statuses treated as success.
pub const SUCCESS_RANGE: RangeInclusive<u16> = 200..=206;

pub fn is_success(status: u16) -> bool {
    SUCCESS_RANGE.contains(&status)
}

/// The usual Grafana error body, `{"message": "...", "status": "..."}`.
///
/// `status` is not read, any value is accepted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Classifies a response. `None` means the status is a success.
///
/// Error bodies are read as an object with a `message` field first, then as an
/// array of objects where the first non-empty string under `message` wins. When
/// neither shape fits, the decode failure becomes the error's reason. The status is
/// carried in every case.
pub fn normalize_error(status: u16, body: &[u8]) -> Option<ApiError> {
    if status == 0 {
        return Some(ApiError::NoResponse);
    }
    if is_success(status) {
        return None;
    }

    let error = match extract_message(body) {
        Ok(message) => ApiError::Status { status, message },
        Err(err) => ApiError::UndecodableBody {
            status,
            reason: err.to_string(),
        },
    };
    Some(error)
}

/// Pulls the human readable message out of an error body.
///
/// The error returned is the one from the last shape attempted.
pub fn extract_message(body: &[u8]) -> Result<String, serde_json::Error> {
    if let Ok(object) = serde_json::from_slice::<Option<ErrorBody>>(body) {
        return Ok(object.and_then(|b| b.message).unwrap_or_default());
    }

    let entries: Vec<Option<Map<String, Value>>> = serde_json::from_slice(body)?;
    let message = entries
        .iter()
        .flatten()
        .filter_map(|entry| entry.get("message").and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .unwrap_or_default();

    Ok(message.to_string())
}

/// Decodes a success body. An empty or blank body yields `None`.
pub fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Team {
        id: i64,
        name: String,
    }

    #[test]
    fn test_success_range_bounds() {
        assert!(!is_success(0));
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(206));
        assert!(!is_success(207));
        assert!(!is_success(304));
    }

    #[test]
    fn test_success_status_is_not_an_error() {
        assert_eq!(normalize_error(200, b"{}"), None);
        assert_eq!(normalize_error(204, b""), None);
    }

    #[test]
    fn test_zero_status_is_no_response() {
        assert_eq!(normalize_error(0, b""), Some(ApiError::NoResponse));
    }

    #[test]
    fn test_object_error_body() {
        let error = normalize_error(404, br#"{"message":"Team not found","status":"error"}"#);
        assert_eq!(
            error,
            Some(ApiError::Status {
                status: 404,
                message: "Team not found".to_string()
            })
        );
    }

    #[test]
    fn test_object_error_body_with_numeric_status() {
        let error = normalize_error(412, br#"{"message":"version-mismatch","status":412}"#);
        assert_eq!(error.map(|e| e.message().to_string()), Some("version-mismatch".to_string()));
    }

    #[test]
    fn test_array_error_body() {
        let error = normalize_error(
            400,
            br#"[{"message":"JSON validation error: invalid role value: admin"}]"#,
        )
        .unwrap();
        assert_eq!(error.status(), 400);
        assert_eq!(
            error.message(),
            "JSON validation error: invalid role value: admin"
        );
    }

    #[test]
    fn test_array_error_body_first_non_empty_message() {
        let body = br#"[
            {"fieldNames":["Role"],"classification":"Required"},
            {"message":""},
            {"classification":"x","message":"first"},
            {"message":"second"}
        ]"#;
        assert_eq!(extract_message(body).unwrap(), "first");
    }

    #[test]
    fn test_array_without_message_gives_empty_message() {
        let error = normalize_error(422, br#"[{"field":"name"}]"#);
        assert_eq!(
            error,
            Some(ApiError::Status {
                status: 422,
                message: String::new()
            })
        );
    }

    #[test]
    fn test_non_string_message_in_array_is_skipped() {
        assert_eq!(
            extract_message(br#"[{"message":42},{"message":"real"}]"#).unwrap(),
            "real"
        );
    }

    #[test]
    fn test_null_body_is_an_empty_object() {
        assert_eq!(extract_message(b"null").unwrap(), "");
    }

    #[test]
    fn test_null_message_is_empty() {
        let error = normalize_error(403, br#"{"message":null}"#);
        assert_eq!(
            error,
            Some(ApiError::Status {
                status: 403,
                message: String::new()
            })
        );
    }

    #[test]
    fn test_unparseable_body_keeps_status_and_reason() {
        let error = normalize_error(500, b"<html>Internal Server Error</html>").unwrap();
        match &error {
            ApiError::UndecodableBody { status, reason } => {
                assert_eq!(*status, 500);
                assert!(!reason.is_empty());
            }
            other => panic!("expected an undecodable body, got {other:?}"),
        }
        assert!(!error.message().is_empty());
    }

    #[test]
    fn test_empty_error_body_is_undecodable() {
        let error = normalize_error(401, b"").unwrap();
        assert!(matches!(
            error,
            ApiError::UndecodableBody { status: 401, .. }
        ));
    }

    #[test]
    fn test_decode_success_empty_body() {
        let team: Option<Team> = decode_success(b"").unwrap();
        assert_eq!(team, None);
        let team: Option<Team> = decode_success(b" \n").unwrap();
        assert_eq!(team, None);
    }

    #[test]
    fn test_decode_success_body() {
        let team: Option<Team> = decode_success(br#"{"id":1,"name":"ops","extra":true}"#).unwrap();
        assert_eq!(
            team,
            Some(Team {
                id: 1,
                name: "ops".to_string()
            })
        );
    }

    #[test]
    fn test_decode_success_failure_is_reported() {
        let result: Result<Option<Team>, _> = decode_success(br#"{"id":"one"}"#);
        assert!(result.is_err());
    }
}
