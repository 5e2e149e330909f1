use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use super::StoreResult;
use crate::models::daily_log::{DailyLog, NewDailyLog};

pub async fn insert_log(pool: &SqlitePool, log: &NewDailyLog) -> StoreResult<DailyLog> {
    let created_at = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO daily_logs (
            user_id, log_date, mood, sleep_hours, study_hours, phone_hours,
            problem_text, problem_type, severity_score, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(log.user_id)
    .bind(log.date)
    .bind(log.mood)
    .bind(log.sleep_hours)
    .bind(log.study_hours)
    .bind(log.phone_hours)
    .bind(&log.problem_text)
    .bind(log.problem_type)
    .bind(log.severity_score)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(DailyLog {
        id: result.last_insert_rowid(),
        user_id: log.user_id,
        date: log.date,
        mood: log.mood,
        sleep_hours: log.sleep_hours,
        study_hours: log.study_hours,
        phone_hours: log.phone_hours,
        problem_text: log.problem_text.clone(),
        problem_type: log.problem_type,
        severity_score: log.severity_score,
        created_at,
    })
}

/// Logs for `user_id` dated on or after `cutoff`, newest first.
pub async fn list_since(
    pool: &SqlitePool,
    user_id: i64,
    cutoff: NaiveDate,
) -> StoreResult<Vec<DailyLog>> {
    let logs = sqlx::query_as::<_, DailyLog>(
        r#"
        SELECT * FROM daily_logs
        WHERE user_id = ? AND log_date >= ?
        ORDER BY log_date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .bind(cutoff)
    .fetch_all(pool)
    .await?;

    Ok(logs)
}

/// Every log for `user_id`, newest first.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> StoreResult<Vec<DailyLog>> {
    let logs = sqlx::query_as::<_, DailyLog>(
        r#"
        SELECT * FROM daily_logs
        WHERE user_id = ?
        ORDER BY log_date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(logs)
}
