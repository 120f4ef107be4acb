//! Krishi Advisory Platform - Backend Server
//!
//! Turns a farmer's free-text problem statement (optionally with field
//! photos) into a routed, rule-based fertilizer recommendation with an
//! LLM-generated explanation and a weather-driven risk overlay.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{LlmClient, WeatherClient};
use services::{
    AdvisoryService, ClassifierService, ExplainerService, MarketService, WeatherService,
};
use shared::RuleTable;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub advisory: AdvisoryService,
    pub weather: WeatherService,
    pub market: MarketService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krishi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Krishi Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Wire up external clients and services
    let llm = LlmClient::new(&config.llm);
    let weather_client = WeatherClient::new(&config.weather);

    let advisory = AdvisoryService::new(
        Arc::new(RuleTable::standard()),
        ClassifierService::new(llm.clone()),
        ExplainerService::new(llm),
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        advisory,
        weather: WeatherService::new(weather_client),
        market: MarketService::new(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Krishi Advisory Platform API v1.0"
}
