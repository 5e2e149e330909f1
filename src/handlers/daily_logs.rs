use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::db::{daily_logs, users};
use crate::dto::{AddLogRequest, AddLogResponse};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::models::daily_log::{DailyLog, NewDailyLog};
use crate::services::classifier::classify;
use crate::AppState;

pub async fn add_log(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AddLogRequest>,
) -> AppResult<Json<AddLogResponse>> {
    let date = body.parsed_date()?;

    users::find_by_id(&state.db, body.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    // Derived once here and stored; never recomputed on read.
    let (problem_type, severity_score) = classify(&body.problem_text);

    let log = daily_logs::insert_log(
        &state.db,
        &NewDailyLog {
            user_id: body.user_id,
            date,
            mood: body.mood,
            sleep_hours: body.sleep_hours,
            study_hours: body.study_hours,
            phone_hours: body.phone_hours,
            problem_text: body.problem_text,
            problem_type,
            severity_score,
        },
    )
    .await?;

    tracing::info!(
        user_id = log.user_id,
        log_id = log.id,
        date = %log.date,
        problem_type = %problem_type,
        severity_score,
        "Daily log added"
    );

    Ok(Json(AddLogResponse {
        message: "Log added".into(),
        problem_type,
        severity_score,
    }))
}

pub async fn history(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<DailyLog>>> {
    let user_id = super::user_id_from_path(path)?;

    let logs = daily_logs::list_for_user(&state.db, user_id).await?;
    tracing::debug!(user_id, count = logs.len(), "History fetched");

    Ok(Json(logs))
}
