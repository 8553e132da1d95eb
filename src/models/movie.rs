use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub release_time: DateTime<Utc>,
    /// Mean of all current ratings, maintained by the rating aggregator.
    #[serde(default)]
    pub rating: f64,
    pub user_id: i64,
}

impl Movie {
    /// Deserializes a movie record fetched from Redis, failing with a typed
    /// error instead of letting a malformed record propagate.
    pub fn from_store_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| {
            AppError::Deserialization(format!("Malformed movie record: {e}"))
        })
    }

    pub fn to_store_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rating_defaults_to_zero() {
        let json = r#"{
            "id": "7a0f6b64-3c4e-4d7d-96a0-44a1e34bd7a1",
            "title": "Heat",
            "genre": "Crime",
            "director": "Michael Mann",
            "releaseTime": "1995-12-15T00:00:00Z",
            "userId": 3
        }"#;
        let movie = Movie::from_store_json(json).unwrap();
        assert_eq!(movie.rating, 0.0);
    }

    #[test]
    fn malformed_record_fails_with_typed_error() {
        let result = Movie::from_store_json(r#"{"id": "not-a-uuid"}"#);
        assert!(matches!(result, Err(AppError::Deserialization(_))));
    }
}
