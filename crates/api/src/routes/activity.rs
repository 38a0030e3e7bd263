//! Activity routes

use axum::{
    extract::{Path, State},
    Json,
};
use common::models::{Activity, XpChangeResult};
use engine::award::MAX_AWARD_XP;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ActivityRequest {
    pub activity: Activity,
    /// Overrides the activity's configured XP
    #[serde(default)]
    pub amount: Option<i64>,
}

fn check_amount(amount: Option<i64>) -> ApiResult<()> {
    match amount {
        Some(xp) if xp > MAX_AWARD_XP => Err(ApiError::BadRequest(format!(
            "amount must be at most {}",
            MAX_AWARD_XP
        ))),
        _ => Ok(()),
    }
}

/// Record an activity and award its XP
pub async fn record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActivityRequest>,
) -> ApiResult<Json<XpChangeResult>> {
    check_amount(req.amount)?;
    let change = state
        .tracker
        .record_activity(id, req.activity, req.amount)
        .await?;
    Ok(Json(change))
}
