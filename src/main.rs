use anyhow::Context;
use sqlx::SqlitePool;
use std::sync::Arc;

mod auth;
mod config;
mod db;
mod dto;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod services;

#[cfg(test)]
mod test_utils;

use auth::rate_limit::{self, RateLimitState};
use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub rate_limiter: RateLimitState,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellbeing_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::create_pool(&config.database_url)
        .await
        .context("Failed to create database pool")?;

    db::run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let rate_limiter = RateLimitState::new(
        config.auth_rate_limit_max,
        config.auth_rate_limit_window_secs,
    );
    rate_limit::spawn_cleanup_worker(rate_limiter.clone());

    let state = AppState {
        db,
        config: config.clone(),
        rate_limiter,
    };

    let app = routes::build_router(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // Client IP is needed by the auth rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
