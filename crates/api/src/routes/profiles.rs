//! Profile routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use common::models::{ActivityCounts, BadgeRule, Profile, ProfileKind, ProgressRecord, XpEvent};
use engine::leveling::LevelInfo;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub kind: ProfileKind,
}

#[derive(Serialize)]
pub struct UnlockedBadge {
    pub badge: BadgeRule,
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub progress: ProgressRecord,
    pub level: LevelInfo,
    /// Percent of the way to the next level
    pub level_progress_pct: f64,
    pub badges: Vec<UnlockedBadge>,
    pub activity: ActivityCounts,
}

#[derive(Deserialize)]
pub struct EventsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// List all profiles
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Profile>>> {
    let profiles = db::profiles::list(&state.pool).await.db_err()?;
    Ok(Json(profiles))
}

/// Create a profile with fresh progress
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResult<Json<Profile>> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Profile name is required".to_string()));
    }

    let profile = db::profiles::create(&state.pool, name, req.kind)
        .await
        .db_err()?;
    info!("Created {} profile {} ({})", profile.kind.as_str(), profile.name, profile.id);
    Ok(Json(profile))
}

/// Profile with progress, level and badges
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProfileView>> {
    let profile = db::profiles::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Profile {} not found", id))?;

    let (progress, activity) = state.tracker.snapshot(id).await?;

    let mut conn = state.pool.acquire().await.db_err()?;
    let unlocks = db::progress::list_badge_unlocks(&mut *conn, id)
        .await
        .db_err()?;

    // Ids dropped from the catalog since unlocking are not shown
    let badges = unlocks
        .into_iter()
        .filter_map(|(badge_id, unlocked_at)| {
            state.engine.badge(&badge_id).map(|badge| UnlockedBadge {
                badge: badge.clone(),
                unlocked_at,
            })
        })
        .collect();

    let level = state.engine.levels.level_for(progress.total_xp);
    let level_progress_pct = (level.progress(progress.total_xp) * 100.0).round();

    Ok(Json(ProfileView {
        profile,
        progress,
        level,
        level_progress_pct,
        badges,
        activity,
    }))
}

/// Recent XP events
pub async fn events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<EventsQuery>,
) -> ApiResult<Json<Vec<XpEvent>>> {
    let events = db::xp_events::list_recent(&state.pool, id, query.limit.clamp(1, 100))
        .await
        .db_err()?;
    Ok(Json(events))
}
