//! Badge routes

use axum::{extract::State, Json};
use common::models::{BadgePredicate, BadgeRule};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

/// Grouped badges for the catalog
#[derive(Serialize)]
pub struct BadgeCatalog {
    pub total: usize,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub badges: Vec<BadgeRule>,
}

/// Group badges by what they measure, keeping catalog order within a group
pub fn group_catalog(badges: &[BadgeRule]) -> BadgeCatalog {
    let mut milestone = Vec::new();
    let mut streak = Vec::new();
    let mut activity = Vec::new();

    for b in badges {
        match b.predicate {
            BadgePredicate::XpThreshold { .. } => milestone.push(b.clone()),
            BadgePredicate::StreakThreshold { .. } => streak.push(b.clone()),
            BadgePredicate::CountThreshold { .. } => activity.push(b.clone()),
        }
    }

    let categories = vec![
        CategoryGroup {
            name: "Milestone".to_string(),
            badges: milestone,
        },
        CategoryGroup {
            name: "Streak".to_string(),
            badges: streak,
        },
        CategoryGroup {
            name: "Activity".to_string(),
            badges: activity,
        },
    ]
    .into_iter()
    .filter(|c| !c.badges.is_empty())
    .collect();

    BadgeCatalog {
        total: badges.len(),
        categories,
    }
}

/// List all badges (catalog)
pub async fn list(State(state): State<Arc<AppState>>) -> Json<BadgeCatalog> {
    Json(group_catalog(&state.engine.badges))
}
