use axum::extract::{rejection::PathRejection, Path};

use crate::error::{AppError, AppResult};

pub mod auth;
pub mod daily_logs;
pub mod dashboard;
pub mod health;

/// Unwrap a `{user_id}` path segment, reporting a non-integer id as a 400.
fn user_id_from_path(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(user_id)| user_id)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}
