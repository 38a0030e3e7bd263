//! Level curve routes

use axum::{extract::State, Json};
use engine::leveling::LevelDef;
use std::sync::Arc;

use crate::state::AppState;

/// The full level curve
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<LevelDef>> {
    Json(state.engine.levels.levels().to_vec())
}
