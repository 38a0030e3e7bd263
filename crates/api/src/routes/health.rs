//! Health check routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: bool,
    generated_quizzes: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Health check could not reach database: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        generated_quizzes: state.config.content_api_url.is_some(),
    })
}
