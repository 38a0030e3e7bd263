//! Coin Quest API Server

use axum::{
    routing::{get, post},
    Router,
};
use engine::EngineConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coin_quest=debug".parse()?)
                .add_directive("api=debug".parse()?)
                .add_directive("engine=info".parse()?),
        )
        .init();

    info!("🎮 Starting Coin Quest API");

    // Load configuration
    let config = common::Config::from_env();
    let engine = EngineConfig::load(config.engine_config_path.as_deref())?;
    info!(
        "📈 {} levels, {} badges",
        engine.levels.max_level(),
        engine.badges.len()
    );

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    let state = Arc::new(AppState::new(config.clone(), pool, engine)?);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/levels", get(routes::levels::list))
        .route("/api/badges", get(routes::badges::list))
        .route(
            "/api/profiles",
            get(routes::profiles::list).post(routes::profiles::create),
        )
        .route("/api/profiles/:id", get(routes::profiles::get))
        .route("/api/profiles/:id/events", get(routes::profiles::events))
        .route(
            "/api/profiles/:id/activity",
            post(routes::activity::record),
        )
        .route("/api/profiles/:id/quiz", post(routes::quiz::submit))
        .route("/api/profiles/:id/arena", post(routes::arena::play))
        .route("/api/quiz/questions", get(routes::quiz::questions))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
