use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::{movie::get::get_movie, redis_conn},
    errors::AppError,
    models::{Movie, redis::RedisKey},
    state::RedisClient,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub release_time: Option<DateTime<Utc>>,
}

pub async fn update_movie(
    movie_id: Uuid,
    update: MovieUpdate,
    redis: &RedisClient,
) -> Result<Movie, AppError> {
    let mut movie = get_movie(movie_id, redis).await?;

    let mut conn = redis_conn(redis).await?;
    let id = movie.id.to_string();

    if let Some(genre) = &update.genre {
        if !genre.eq_ignore_ascii_case(&movie.genre) {
            let _: () = conn
                .srem(RedisKey::movies_by_genre(&movie.genre), &id)
                .await?;
            let _: () = conn.sadd(RedisKey::movies_by_genre(genre), &id).await?;
        }
    }

    if let Some(title) = update.title {
        movie.title = title;
    }
    if let Some(genre) = update.genre {
        movie.genre = genre;
    }
    if let Some(director) = update.director {
        movie.director = director;
    }
    if let Some(release_time) = update.release_time {
        movie.release_time = release_time;
    }

    let json = movie.to_store_json()?;
    let _: () = conn.set(RedisKey::movie(movie_id), json).await?;

    tracing::info!("Updated movie {}", movie_id);
    Ok(movie)
}
