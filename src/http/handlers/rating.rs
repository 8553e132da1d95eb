use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::rating::{get_rating_stats, get_user_rating},
    models::rating::RatingStats,
    state::AppState,
};

#[derive(Deserialize)]
pub struct RatePayload {
    pub rating: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanRatingResponse {
    pub rating: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRatingResponse {
    pub rating: Option<f64>,
}

pub async fn rate_movie_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
    Json(payload): Json<RatePayload>,
) -> Result<Json<MeanRatingResponse>, (StatusCode, String)> {
    match state
        .ratings
        .record_rating(movie_id, claims.sub, payload.rating)
        .await
    {
        Ok(mean) => {
            tracing::info!(
                "User {} rated movie {} as {}; new mean {:.4}",
                claims.sub,
                movie_id,
                payload.rating,
                mean
            );
            Ok(Json(MeanRatingResponse { rating: mean }))
        }
        Err(err) => {
            tracing::error!("Error rating movie {}: {}", movie_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn movie_rating_stats_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<RatingStats>, (StatusCode, String)> {
    let stats = get_rating_stats(movie_id, &state.redis).await.map_err(|e| {
        tracing::error!("Error retrieving rating stats for {}: {}", movie_id, e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn my_rating_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<UserRatingResponse>, (StatusCode, String)> {
    let rating = get_user_rating(movie_id, claims.sub, &state.redis)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving user rating for {}: {}", movie_id, e);
            e.to_response()
        })?;

    Ok(Json(UserRatingResponse { rating }))
}
