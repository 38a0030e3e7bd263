//! Tunable engine tables

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use common::models::{Activity, BadgeRule};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::badges;
use crate::leveling::LevelTable;
use crate::streak::StreakBonus;

/// Level curve, streak bonus, badge catalog and per-activity XP in one place.
///
/// Any section missing from a config file keeps its built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub levels: LevelTable,
    #[serde(default)]
    pub streak_bonus: StreakBonus,
    #[serde(default = "badges::default_catalog")]
    pub badges: Vec<BadgeRule>,
    #[serde(default = "default_activity_xp")]
    pub activity_xp: BTreeMap<Activity, i64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            levels: LevelTable::default(),
            streak_bonus: StreakBonus::default(),
            badges: badges::default_catalog(),
            activity_xp: default_activity_xp(),
        }
    }
}

fn default_activity_xp() -> BTreeMap<Activity, i64> {
    BTreeMap::from([
        (Activity::DailyLogin, 5),
        (Activity::LessonCompleted, 25),
        // Quizzes and arena matches are scored per submission
        (Activity::QuizCompleted, 0),
        (Activity::PerfectQuiz, 0),
        (Activity::TradeExecuted, 15),
        (Activity::TransferSent, 10),
        (Activity::SavingsGoalReached, 40),
        (Activity::ArenaMatchPlayed, 0),
        (Activity::ArenaMatchWon, 0),
    ])
}

impl EngineConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> common::Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| common::Error::Config(format!("invalid engine config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> common::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            common::Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&raw)?;
        info!(
            "Loaded engine config from {} ({} levels, {} badges)",
            path.display(),
            config.levels.levels().len(),
            config.badges.len()
        );
        Ok(config)
    }

    /// Built-in defaults unless a path is given
    pub fn load(path: Option<&str>) -> common::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> common::Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.badges {
            if rule.id.is_empty() {
                return Err(common::Error::Config("badge with empty id".to_string()));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(common::Error::Config(format!(
                    "duplicate badge id: {}",
                    rule.id
                )));
            }
            if rule.xp_bonus < 0 {
                return Err(common::Error::Config(format!(
                    "badge {} has a negative XP bonus",
                    rule.id
                )));
            }
        }

        if self.streak_bonus.per_day < 0 || self.streak_bonus.max_bonus < 0 {
            return Err(common::Error::Config(
                "streak bonus values must not be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Default XP for an activity that carries no explicit amount
    pub fn xp_for(&self, activity: Activity) -> i64 {
        self.activity_xp.get(&activity).copied().unwrap_or(0)
    }

    pub fn badge(&self, id: &str) -> Option<&BadgeRule> {
        self.badges.iter().find(|b| b.id == id)
    }
}
