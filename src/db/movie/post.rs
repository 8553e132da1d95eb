use redis::AsyncCommands;

use crate::{
    db::redis_conn,
    errors::AppError,
    models::{Movie, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_movie(movie: &Movie, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis_conn(redis).await?;

    let json = movie.to_store_json()?;
    let id = movie.id.to_string();

    let _: () = conn.set(RedisKey::movie(movie.id), json).await?;
    let _: () = conn.sadd(RedisKey::movies(), &id).await?;
    let _: () = conn.sadd(RedisKey::movies_by_genre(&movie.genre), &id).await?;
    let _: () = conn.sadd(RedisKey::user_movies(movie.user_id), &id).await?;

    tracing::info!("Stored movie {} ({})", movie.id, movie.title);
    Ok(())
}
