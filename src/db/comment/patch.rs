use chrono::Utc;
use redis::AsyncCommands;

use crate::{
    db::redis_conn,
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

/// Rewrites a comment's content. Authorization happens before this is
/// called; this is a plain point write.
pub async fn update_comment_content(
    mut comment: Comment,
    content: String,
    redis: &RedisClient,
) -> Result<Comment, AppError> {
    comment.content = content;
    comment.updated_at = Some(Utc::now());

    let mut conn = redis_conn(redis).await?;

    let json = comment.to_store_json()?;
    let _: () = conn.set(RedisKey::comment(comment.id), json).await?;

    tracing::info!("Updated comment {}", comment.id);
    Ok(comment)
}
