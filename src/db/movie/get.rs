use redis::AsyncCommands;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::redis_conn,
    errors::AppError,
    models::{Movie, redis::RedisKey},
    state::RedisClient,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
}

pub async fn get_movie(movie_id: Uuid, redis: &RedisClient) -> Result<Movie, AppError> {
    let mut conn = redis_conn(redis).await?;

    let json: Option<String> = conn.get(RedisKey::movie(movie_id)).await?;

    match json {
        Some(json) => Movie::from_store_json(&json),
        None => Err(AppError::NotFound(format!("Movie not found: {movie_id}"))),
    }
}

pub async fn movie_exists(movie_id: Uuid, redis: &RedisClient) -> Result<bool, AppError> {
    let mut conn = redis_conn(redis).await?;

    let exists: bool = conn.exists(RedisKey::movie(movie_id)).await?;
    Ok(exists)
}

/// Browse listing: optionally narrowed to a genre index, then filtered by
/// minimum mean rating, newest release first.
pub async fn list_movies(
    filter: &MovieFilter,
    redis: &RedisClient,
) -> Result<Vec<Movie>, AppError> {
    let index_key = match &filter.genre {
        Some(genre) if !genre.trim().is_empty() => RedisKey::movies_by_genre(genre.trim()),
        _ => RedisKey::movies(),
    };

    let mut movies = load_movies_from_index(&index_key, redis).await?;

    if let Some(min_rating) = filter.min_rating {
        movies.retain(|m| m.rating >= min_rating);
    }

    movies.sort_by(|a, b| b.release_time.cmp(&a.release_time));
    Ok(movies)
}

pub async fn get_movies_by_user(
    user_id: i64,
    redis: &RedisClient,
) -> Result<Vec<Movie>, AppError> {
    let mut movies = load_movies_from_index(&RedisKey::user_movies(user_id), redis).await?;
    movies.sort_by(|a, b| b.release_time.cmp(&a.release_time));
    Ok(movies)
}

async fn load_movies_from_index(
    index_key: &str,
    redis: &RedisClient,
) -> Result<Vec<Movie>, AppError> {
    let mut conn = redis_conn(redis).await?;

    let ids: Vec<String> = conn.smembers(index_key).await?;

    let mut movies = Vec::with_capacity(ids.len());
    for id in ids {
        let json: Option<String> = conn.get(format!("movie:{id}")).await?;
        let Some(json) = json else {
            tracing::warn!("Movie index {} references missing record {}", index_key, id);
            continue;
        };
        match Movie::from_store_json(&json) {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                tracing::warn!("Skipping malformed movie record {}: {}", id, e);
            }
        }
    }

    Ok(movies)
}
