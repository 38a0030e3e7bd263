//! Arena routes

use axum::{
    extract::{Path, State},
    Json,
};
use common::models::{Activity, XpChangeResult};
use engine::arena::{simulate_match, ArenaResult, PlayerAnswer, DEFAULT_TIME_LIMIT_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PlayRequest {
    pub answers: Vec<PlayerAnswer>,
    /// Replays a specific match when set
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct ArenaOutcome {
    pub seed: u64,
    pub result: ArenaResult,
    pub change: XpChangeResult,
}

/// Play a match against generated opponents
pub async fn play(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<PlayRequest>,
) -> ApiResult<Json<ArenaOutcome>> {
    if req.answers.is_empty() {
        return Err(ApiError::BadRequest("A match needs at least one answer".to_string()));
    }

    let profile = db::profiles::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Profile {} not found", id))?;

    let seed = req.seed.unwrap_or_else(rand::random);
    let result = {
        let mut rng = StdRng::seed_from_u64(seed);
        simulate_match(
            &mut rng,
            &profile.name,
            &req.answers,
            state.config.arena_opponents,
            DEFAULT_TIME_LIMIT_MS,
        )
    };
    info!(
        "⚔️ Arena match for {}: placed {} of {} (seed {})",
        profile.name,
        result.placement,
        result.standings.len(),
        seed
    );

    let mut activities = vec![Activity::ArenaMatchPlayed];
    if result.won {
        activities.push(Activity::ArenaMatchWon);
    }

    let change = state
        .tracker
        .record_on(id, &activities, result.xp, state.tracker.today())
        .await?;

    Ok(Json(ArenaOutcome {
        seed,
        result,
        change,
    }))
}
