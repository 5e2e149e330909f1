use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::connect_info::MockConnectInfo;
use axum::Router;
use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::auth::rate_limit::RateLimitState;
use crate::config::Config;
use crate::models::daily_log::{DailyLog, ProblemCategory};
use crate::AppState;

pub(crate) fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        auth_rate_limit_max: 100,
        auth_rate_limit_window_secs: 60,
    }
}

/// Fresh in-memory database with migrations applied. A single connection keeps
/// every query on the same in-memory database.
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::run_migrations(&pool).await.unwrap();
    pool
}

pub(crate) async fn test_state_with(config: Config) -> AppState {
    let rate_limiter = RateLimitState::new(
        config.auth_rate_limit_max,
        config.auth_rate_limit_window_secs,
    );
    AppState {
        db: test_pool().await,
        config: Arc::new(config),
        rate_limiter,
    }
}

pub(crate) async fn test_state() -> AppState {
    test_state_with(test_config()).await
}

/// Full router with a fixed client address so the rate limiter can key on it.
pub(crate) fn test_app(state: AppState) -> Router {
    crate::routes::build_router(state).layer(MockConnectInfo(SocketAddr::from((
        [127, 0, 0, 1],
        4000,
    ))))
}

pub(crate) fn sample_log(
    sleep_hours: f64,
    study_hours: f64,
    phone_hours: f64,
    problem_type: ProblemCategory,
) -> DailyLog {
    DailyLog {
        id: 0,
        user_id: 1,
        date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        mood: 3,
        sleep_hours,
        study_hours,
        phone_hours,
        problem_text: String::new(),
        problem_type,
        severity_score: problem_type.severity(),
        created_at: Utc::now(),
    }
}
