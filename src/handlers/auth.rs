use axum::{extract::State, Json};

use crate::auth::password::{hash_password, verify_password};
use crate::db::users;
use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::models::user::NewUser;
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    let password = body.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    // The unique index on email decides duplicates; no existence pre-check.
    let user = users::insert_user(
        &state.db,
        &NewUser {
            name: body.name,
            email: body.email,
            password_hash,
        },
    )
    .await
    .map_err(|e| {
        if matches!(e, crate::db::StoreError::DuplicateEmail) {
            tracing::info!("Registration rejected: email already registered");
        }
        AppError::from(e)
    })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(MessageResponse {
        message: "User registered successfully".into(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = users::find_by_email(&state.db, &body.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password = body.password;
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    if !valid {
        tracing::info!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        user_id: user.id,
    }))
}
