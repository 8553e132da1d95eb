use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::{movie::get::get_movie, redis_conn},
    errors::AppError,
    models::redis::RedisKey,
    state::RedisClient,
};

/// Removes the movie record, its index entries, and its rating hash.
/// Comments are left in place; their movie index set simply goes unread.
pub async fn delete_movie(movie_id: Uuid, redis: &RedisClient) -> Result<(), AppError> {
    let movie = get_movie(movie_id, redis).await?;

    let mut conn = redis_conn(redis).await?;
    let id = movie.id.to_string();

    let _: () = conn.srem(RedisKey::movies(), &id).await?;
    let _: () = conn
        .srem(RedisKey::movies_by_genre(&movie.genre), &id)
        .await?;
    let _: () = conn.srem(RedisKey::user_movies(movie.user_id), &id).await?;
    let _: () = conn.del(RedisKey::movie_ratings(movie_id)).await?;
    let _: () = conn.del(RedisKey::movie(movie_id)).await?;

    tracing::info!("Deleted movie {} ({})", movie_id, movie.title);
    Ok(())
}
