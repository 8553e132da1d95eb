use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{generate_jwt, verify_password},
    db::user::{get::get_user_by_username, post::create_user},
    errors::AppError,
    models::User,
    state::AppState,
};

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    if payload.username.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(
            AppError::BadRequest("Username and email are required".into()).to_response(),
        );
    }
    if payload.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ))
        .to_response());
    }

    match create_user(
        payload.username,
        payload.email,
        payload.password,
        state.postgres.clone(),
    )
    .await
    {
        Ok(user) => {
            tracing::info!("Registered user {}", user.username);
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(err) => {
            tracing::error!("Error registering user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<TokenResponse>, (StatusCode, String)> {
    let user = get_user_by_username(&payload.username, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error looking up user: {}", e);
            e.to_response()
        })?;

    let Some(user) = user else {
        return Err(
            AppError::BadRequest("Incorrect username or password".into()).to_response(),
        );
    };

    let verified = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| e.to_response())?;
    if !verified {
        return Err(
            AppError::BadRequest("Incorrect username or password".into()).to_response(),
        );
    }

    if !user.is_active {
        return Err(AppError::Unauthorized("Account is deactivated".into()).to_response());
    }

    let token = generate_jwt(&user).map_err(|e| {
        tracing::error!("Error generating token: {}", e);
        e.to_response()
    })?;

    tracing::info!("User {} logged in", user.username);
    Ok(Json(TokenResponse { token }))
}
