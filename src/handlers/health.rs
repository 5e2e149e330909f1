use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wellbeing-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

const REQUIRED_TABLES: [&str; 2] = ["users", "daily_logs"];

/// Ready once the store answers and both record tables have been migrated.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?, ?)",
    )
    .bind(REQUIRED_TABLES[0])
    .bind(REQUIRED_TABLES[1])
    .fetch_one(&state.db)
    .await;

    let (database, schema) = match found {
        Ok(n) if n == REQUIRED_TABLES.len() as i64 => ("ok", "ok"),
        Ok(n) => {
            tracing::warn!(tables_found = n, "Readiness check failed: schema not migrated");
            ("ok", "missing_tables")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed: database unreachable");
            ("failed", "unknown")
        }
    };

    let ready = database == "ok" && schema == "ok";
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(json!({
            "status": label,
            "checks": { "database": database, "schema": schema },
        })),
    )
}
