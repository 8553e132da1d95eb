use redis::AsyncCommands;

use crate::{
    db::redis_conn,
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

pub async fn delete_comment(comment: &Comment, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis_conn(redis).await?;
    let id = comment.id.to_string();

    let _: () = conn
        .zrem(RedisKey::movie_comments(comment.movie_id), &id)
        .await?;
    let _: () = conn
        .zrem(RedisKey::user_comments(comment.author_id), &id)
        .await?;
    let _: () = conn.del(RedisKey::comment(comment.id)).await?;

    tracing::info!("Deleted comment {}", comment.id);
    Ok(())
}
