//! Quiz routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use common::models::{Activity, ProfileKind, XpChangeResult};
use engine::content::QuestionSet;
use engine::quiz::{score_quiz, QuizAnswer, QuizScore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuestionsQuery {
    pub topic: Option<String>,
    #[serde(default = "default_audience")]
    pub audience: ProfileKind,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_audience() -> ProfileKind {
    ProfileKind::Adult
}

fn default_count() -> usize {
    5
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<QuizAnswer>,
}

#[derive(Serialize)]
pub struct QuizOutcome {
    pub score: QuizScore,
    pub change: XpChangeResult,
}

/// Questions for a quiz, generated when possible
pub async fn questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuestionsQuery>,
) -> Json<QuestionSet> {
    let count = query.count.clamp(1, 20);
    let set = state
        .quiz
        .questions(query.topic.as_deref(), query.audience, count)
        .await;
    Json(set)
}

/// Score a finished quiz and award its XP
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> ApiResult<Json<QuizOutcome>> {
    if req.answers.is_empty() {
        return Err(ApiError::BadRequest("A quiz needs at least one answer".to_string()));
    }

    let score = score_quiz(&req.answers);
    let mut activities = vec![Activity::QuizCompleted];
    if score.perfect {
        activities.push(Activity::PerfectQuiz);
    }

    let change = state
        .tracker
        .record_on(id, &activities, score.xp, state.tracker.today())
        .await?;

    Ok(Json(QuizOutcome { score, change }))
}
