use sqlx::PgPool;

use crate::{auth::hash_password, errors::AppError, models::User};

pub async fn create_user(
    username: String,
    email: String,
    password: String,
    postgres: PgPool,
) -> Result<User, AppError> {
    let taken: Option<i64> =
        sqlx::query_scalar("SELECT id FROM users WHERE username = $1 OR email = $2")
            .bind(&username)
            .bind(&email)
            .fetch_optional(&postgres)
            .await?;

    if taken.is_some() {
        return Err(AppError::BadRequest(
            "Username or email already registered".into(),
        ));
    }

    let password_hash = hash_password(&password)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash)
			VALUES ($1, $2, $3)
			RETURNING id, username, email, password_hash, is_active",
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&postgres)
    .await?;

    tracing::info!("Created user {} ({})", user.id, user.username);
    Ok(user)
}
