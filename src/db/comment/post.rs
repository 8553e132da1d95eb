use chrono::Utc;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::{movie::get::movie_exists, redis_conn},
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_comment(
    movie_id: Uuid,
    author_id: i64,
    content: String,
    redis: &RedisClient,
) -> Result<Comment, AppError> {
    if !movie_exists(movie_id, redis).await? {
        return Err(AppError::NotFound(format!("Movie not found: {movie_id}")));
    }

    let comment = Comment {
        id: Uuid::new_v4(),
        movie_id,
        author_id,
        content,
        created_at: Utc::now(),
        updated_at: None,
    };

    let mut conn = redis_conn(redis).await?;

    let json = comment.to_store_json()?;
    let id = comment.id.to_string();
    // Score by creation time so the recency indexes read back in order.
    let score = comment.created_at.timestamp_millis();

    let _: () = conn.set(RedisKey::comment(comment.id), json).await?;
    let _: () = conn
        .zadd(RedisKey::movie_comments(movie_id), &id, score)
        .await?;
    let _: () = conn
        .zadd(RedisKey::user_comments(author_id), &id, score)
        .await?;

    tracing::info!(
        "Stored comment {} on movie {} by user {}",
        comment.id,
        movie_id,
        author_id
    );
    Ok(comment)
}
