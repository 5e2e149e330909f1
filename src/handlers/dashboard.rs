use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use chrono::{Duration, Utc};

use crate::db::daily_logs;
use crate::dto::DashboardResponse;
use crate::error::AppResult;
use crate::models::daily_log::{DailyLog, ProblemCategory};
use crate::services::{risk::evaluate_risk, suggestions::generate_suggestions};
use crate::AppState;

/// Logs dated on or after today minus this many days form the dashboard window.
const WINDOW_DAYS: i64 = 7;

pub async fn dashboard(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<DashboardResponse>> {
    let user_id = super::user_id_from_path(path)?;

    let cutoff = Utc::now().date_naive() - Duration::days(WINDOW_DAYS);
    let logs = daily_logs::list_since(&state.db, user_id, cutoff).await?;

    let risk_level = evaluate_risk(&logs);
    let suggestions = generate_suggestions(&logs);

    tracing::debug!(
        user_id,
        %cutoff,
        total_logs = logs.len(),
        risk_level = ?risk_level,
        "Dashboard computed"
    );

    Ok(Json(DashboardResponse {
        risk_level,
        problem_summary: summarize_problems(&logs),
        total_logs: logs.len(),
        suggestions,
    }))
}

fn summarize_problems(logs: &[DailyLog]) -> BTreeMap<ProblemCategory, usize> {
    let mut summary = BTreeMap::new();
    for log in logs {
        *summary.entry(log.problem_type).or_insert(0) += 1;
    }
    summary
}
