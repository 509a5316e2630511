//! Serde helpers for the quirks of Grafana payloads.
//!
//! Grafana writes unset timestamps as Go's zero time and unset lists as `null`;
//! both should land in Rust as "nothing" instead of failing or producing year 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Go's zero `time.Time`, which Grafana sends for timestamps that were never set.
const ZERO_TIME_YEAR: i32 = 1;

/// Deserialize an optional timestamp.
///
/// `null`, an empty string and the zero time (`0001-01-01T00:00:00Z`) all become `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => {
            let timestamp = DateTime::parse_from_rfc3339(&s)
                .map_err(serde::de::Error::custom)?
                .with_timezone(&Utc);
            if chrono::Datelike::year(&timestamp) <= ZERO_TIME_YEAR {
                Ok(None)
            } else {
                Ok(Some(timestamp))
            }
        }
        _ => Ok(None),
    }
}

/// Deserialize a value, treating `null` as its default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
