use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::{
        comment::get::get_comments_by_movie,
        movie::{
            delete::delete_movie,
            get::{MovieFilter, get_movie, get_movies_by_user, list_movies},
            patch::{MovieUpdate, update_movie},
            post::create_movie,
        },
    },
    errors::AppError,
    models::{Comment, Movie},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoviePayload {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub release_time: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub comments: Vec<Comment>,
}

pub async fn create_movie_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Json(payload): Json<CreateMoviePayload>,
) -> Result<(StatusCode, Json<Movie>), (StatusCode, String)> {
    if payload.title.trim().is_empty() || payload.genre.trim().is_empty() {
        return Err(AppError::BadRequest("Title and genre are required".into()).to_response());
    }

    let movie = Movie {
        id: Uuid::new_v4(),
        title: payload.title,
        genre: payload.genre,
        director: payload.director,
        release_time: payload.release_time,
        rating: 0.0,
        user_id: claims.sub,
    };

    match create_movie(&movie, &state.redis).await {
        Ok(()) => {
            tracing::info!("User {} uploaded movie {}", claims.sub, movie.id);
            Ok((StatusCode::CREATED, Json(movie)))
        }
        Err(err) => {
            tracing::error!("Error creating movie: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn browse_movies_handler(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    let movies = list_movies(&filter, &state.redis).await.map_err(|e| {
        tracing::error!("Error listing movies: {}", e);
        e.to_response()
    })?;

    Ok(Json(movies))
}

pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<MovieDetail>, (StatusCode, String)> {
    let movie = get_movie(movie_id, &state.redis).await.map_err(|e| {
        tracing::error!("Error retrieving movie {}: {}", movie_id, e);
        e.to_response()
    })?;

    let comments = get_comments_by_movie(movie_id, &state.redis)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving comments for movie {}: {}", movie_id, e);
            e.to_response()
        })?;

    Ok(Json(MovieDetail { movie, comments }))
}

pub async fn update_movie_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
    Json(update): Json<MovieUpdate>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let movie = get_movie(movie_id, &state.redis)
        .await
        .map_err(|e| e.to_response())?;

    if movie.user_id != claims.sub {
        return Err(
            AppError::Forbidden("Not authorized to edit this movie".into()).to_response(),
        );
    }

    match update_movie(movie_id, update, &state.redis).await {
        Ok(movie) => Ok(Json(movie)),
        Err(err) => {
            tracing::error!("Error updating movie {}: {}", movie_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_movie_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let movie = get_movie(movie_id, &state.redis)
        .await
        .map_err(|e| e.to_response())?;

    if movie.user_id != claims.sub {
        return Err(
            AppError::Forbidden("Not authorized to delete this movie".into()).to_response(),
        );
    }

    match delete_movie(movie_id, &state.redis).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting movie {}: {}", movie_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn user_movies_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    let movies = get_movies_by_user(user_id, &state.redis)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving movies for user {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(movies))
}
