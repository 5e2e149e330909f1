use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::rate_limit::rate_limit_auth;
use crate::handlers;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit_auth));

    let api_routes = Router::new()
        .route("/add_log", post(handlers::daily_logs::add_log))
        .route("/dashboard/:user_id", get(handlers::dashboard::dashboard))
        .route("/history/:user_id", get(handlers::daily_logs::history));

    let probe_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    Router::new()
        .merge(auth_routes)
        .merge(api_routes)
        .merge(probe_routes)
        .layer(cors_layer(&state.config.frontend_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!(frontend_url, "FRONTEND_URL is not a valid origin; CORS disabled");
            cors
        }
    }
}
