use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::comment::{
        delete::delete_comment,
        get::{get_comment, get_comments_by_movie, get_comments_by_user},
        patch::update_comment_content,
        post::create_comment,
    },
    domain::edit_window::{MutationKind, authorize_mutation},
    errors::AppError,
    models::Comment,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentPayload {
    pub movie_id: Uuid,
    pub content: String,
}

#[derive(Deserialize)]
pub struct EditCommentPayload {
    pub content: String,
}

pub async fn add_comment_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Json(payload): Json<AddCommentPayload>,
) -> Result<(StatusCode, Json<Comment>), (StatusCode, String)> {
    if payload.content.trim().is_empty() {
        return Err(AppError::BadRequest("Comment content is required".into()).to_response());
    }

    match create_comment(payload.movie_id, claims.sub, payload.content, &state.redis).await {
        Ok(comment) => Ok((StatusCode::CREATED, Json(comment))),
        Err(err) => {
            tracing::error!("Error adding comment: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn movie_comments_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, (StatusCode, String)> {
    let comments = get_comments_by_movie(movie_id, &state.redis)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving comments for movie {}: {}", movie_id, e);
            e.to_response()
        })?;

    Ok(Json(comments))
}

pub async fn user_comments_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, (StatusCode, String)> {
    let comments = get_comments_by_user(user_id, &state.redis)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving comments for user {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(comments))
}

pub async fn edit_comment_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
    Json(payload): Json<EditCommentPayload>,
) -> Result<Json<Comment>, (StatusCode, String)> {
    if payload.content.trim().is_empty() {
        return Err(AppError::BadRequest("Comment content is required".into()).to_response());
    }

    let comment = get_comment(comment_id, &state.redis)
        .await
        .map_err(|e| e.to_response())?;

    authorize_mutation(&comment, claims.sub, Utc::now(), MutationKind::Edit).map_err(|e| {
        tracing::warn!(
            "Edit of comment {} by user {} denied: {}",
            comment_id,
            claims.sub,
            e
        );
        e.to_response()
    })?;

    match update_comment_content(comment, payload.content, &state.redis).await {
        Ok(comment) => Ok(Json(comment)),
        Err(err) => {
            tracing::error!("Error updating comment {}: {}", comment_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_comment_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let comment = get_comment(comment_id, &state.redis)
        .await
        .map_err(|e| e.to_response())?;

    // Deletes are owner-only but never time-bound.
    authorize_mutation(&comment, claims.sub, Utc::now(), MutationKind::Delete).map_err(|e| {
        tracing::warn!(
            "Delete of comment {} by user {} denied: {}",
            comment_id,
            claims.sub,
            e
        );
        e.to_response()
    })?;

    match delete_comment(&comment, &state.redis).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting comment {}: {}", comment_id, err);
            Err(err.to_response())
        }
    }
}
