use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::redis_conn,
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_comment(comment_id: Uuid, redis: &RedisClient) -> Result<Comment, AppError> {
    let mut conn = redis_conn(redis).await?;

    let json: Option<String> = conn.get(RedisKey::comment(comment_id)).await?;

    match json {
        Some(json) => Comment::from_store_json(&json),
        None => Err(AppError::NotFound(format!(
            "Comment not found: {comment_id}"
        ))),
    }
}

/// All comments on a movie, newest first.
pub async fn get_comments_by_movie(
    movie_id: Uuid,
    redis: &RedisClient,
) -> Result<Vec<Comment>, AppError> {
    load_comments_from_index(&RedisKey::movie_comments(movie_id), redis).await
}

/// All comments by an author, newest first.
pub async fn get_comments_by_user(
    user_id: i64,
    redis: &RedisClient,
) -> Result<Vec<Comment>, AppError> {
    load_comments_from_index(&RedisKey::user_comments(user_id), redis).await
}

async fn load_comments_from_index(
    index_key: &str,
    redis: &RedisClient,
) -> Result<Vec<Comment>, AppError> {
    let mut conn = redis_conn(redis).await?;

    // Highest creation score first = recency descending.
    let ids: Vec<String> = conn.zrevrange(index_key, 0, -1).await?;

    let mut comments = Vec::with_capacity(ids.len());
    for id in ids {
        let json: Option<String> = conn.get(format!("comment:{id}")).await?;
        let Some(json) = json else {
            tracing::warn!(
                "Comment index {} references missing record {}",
                index_key,
                id
            );
            continue;
        };
        match Comment::from_store_json(&json) {
            Ok(comment) => comments.push(comment),
            Err(e) => {
                tracing::warn!("Skipping malformed comment record {}: {}", id, e);
            }
        }
    }

    Ok(comments)
}
