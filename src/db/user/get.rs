use sqlx::PgPool;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: i64, postgres: PgPool) -> Result<User, AppError> {
    let user: Option<User> = sqlx::query_as(
        "SELECT id, username, email, password_hash, is_active FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await?;

    user.ok_or_else(|| AppError::NotFound(format!("User not found: {user_id}")))
}

pub async fn get_user_by_username(
    username: &str,
    postgres: PgPool,
) -> Result<Option<User>, AppError> {
    let user: Option<User> = sqlx::query_as(
        "SELECT id, username, email, password_hash, is_active FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&postgres)
    .await?;

    Ok(user)
}
