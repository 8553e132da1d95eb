pub mod auth;
pub mod comment;
pub mod movie;
pub mod rating;

use axum::Json;
use serde_json::{Value, json};

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
