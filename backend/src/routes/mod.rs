//! Route definitions for the Krishi Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Advisory pipeline sessions
        .nest("/sessions", session_routes())
        // Market branch
        .nest("/market", market_routes())
}

/// Advisory session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_session))
        .route("/:session_id", get(handlers::get_session))
        .route("/:session_id/query", post(handlers::submit_query))
        .route("/:session_id/context", post(handlers::submit_context))
        .route("/:session_id/weather", post(handlers::refresh_session_weather))
        .route("/:session_id/reset", post(handlers::reset_session))
}

/// Market lookup routes
fn market_routes() -> Router<AppState> {
    Router::new().route("/prices", get(handlers::list_market_prices))
}
