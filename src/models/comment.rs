use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub author_id: i64,
    pub content: String,
    #[serde(with = "store_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn from_store_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| {
            AppError::Deserialization(format!("Malformed comment record: {e}"))
        })
    }

    pub fn to_store_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

/// Creation timestamps written by earlier deployments are naive ISO-8601
/// strings without an offset. Those are interpreted as UTC so the edit-window
/// check never subtracts incompatible representations.
pub(crate) mod store_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zone_aware_timestamp_converts_to_utc() {
        let ts = store_timestamp::parse("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn naive_timestamp_is_treated_as_utc() {
        let ts = store_timestamp::parse("2024-05-01T14:30:00.123456").unwrap();
        assert_eq!(
            ts,
            Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap()
                + chrono::Duration::microseconds(123_456)
        );
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(store_timestamp::parse("yesterday-ish").is_err());
    }

    #[test]
    fn comment_with_naive_created_at_deserializes() {
        let json = r#"{
            "id": "b55f7d0e-9cb0-4d22-bb6e-4a95b1f8cbb4",
            "movieId": "7a0f6b64-3c4e-4d7d-96a0-44a1e34bd7a1",
            "authorId": 9,
            "content": "Great pacing.",
            "createdAt": "2024-05-01T14:30:00"
        }"#;
        let comment = Comment::from_store_json(json).unwrap();
        assert_eq!(
            comment.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap()
        );
        assert!(comment.updated_at.is_none());
    }
}
