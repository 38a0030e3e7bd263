//! Domain models

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Which flavour of the app a profile uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Adult,
    Junior,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Adult => "adult",
            ProfileKind::Junior => "junior",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "adult" => Some(ProfileKind::Adult),
            "junior" => Some(ProfileKind::Junior),
            _ => None,
        }
    }
}

/// A local app profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub kind: ProfileKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persisted gamification progress for one profile.
///
/// `level` is derived from `total_xp` and is only ever written by the
/// award orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressRecord {
    pub total_xp: i64,
    pub level: i32,
    pub streak_days: i32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_active_date: Option<NaiveDate>,
    #[serde(default)]
    pub unlocked_badge_ids: BTreeSet<String>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            streak_days: 0,
            last_active_date: None,
            unlocked_badge_ids: BTreeSet::new(),
        }
    }
}

/// A malformed stored date reads as "never active"
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer).unwrap_or(None);
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

/// Qualifying actions that earn XP and feed count-based badges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    DailyLogin,
    LessonCompleted,
    QuizCompleted,
    PerfectQuiz,
    TradeExecuted,
    TransferSent,
    SavingsGoalReached,
    ArenaMatchPlayed,
    ArenaMatchWon,
}

impl Activity {
    pub const ALL: [Activity; 9] = [
        Activity::DailyLogin,
        Activity::LessonCompleted,
        Activity::QuizCompleted,
        Activity::PerfectQuiz,
        Activity::TradeExecuted,
        Activity::TransferSent,
        Activity::SavingsGoalReached,
        Activity::ArenaMatchPlayed,
        Activity::ArenaMatchWon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::DailyLogin => "daily_login",
            Activity::LessonCompleted => "lesson_completed",
            Activity::QuizCompleted => "quiz_completed",
            Activity::PerfectQuiz => "perfect_quiz",
            Activity::TradeExecuted => "trade_executed",
            Activity::TransferSent => "transfer_sent",
            Activity::SavingsGoalReached => "savings_goal_reached",
            Activity::ArenaMatchPlayed => "arena_match_played",
            Activity::ArenaMatchWon => "arena_match_won",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

/// Per-profile activity counters used by count badges
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ActivityCounts(BTreeMap<Activity, i64>);

impl ActivityCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, activity: Activity) -> i64 {
        self.0.get(&activity).copied().unwrap_or(0)
    }

    pub fn set(&mut self, activity: Activity, count: i64) {
        self.0.insert(activity, count.max(0));
    }

    pub fn increment(&mut self, activity: Activity) {
        *self.0.entry(activity).or_insert(0) += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Activity, i64)> + '_ {
        self.0.iter().map(|(a, c)| (*a, *c))
    }
}

/// Condition a badge unlocks on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BadgePredicate {
    XpThreshold { threshold: i64 },
    StreakThreshold { threshold: i32 },
    CountThreshold { activity: Activity, threshold: i64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A badge catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeRule {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub rarity: BadgeRarity,
    pub predicate: BadgePredicate,
    pub xp_bonus: i64,
}

/// Result of one streak transition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StreakOutcome {
    pub new_streak_days: i32,
    pub streak_broken: bool,
    pub streak_increased: bool,
    pub xp_bonus: i64,
}

/// What changed during one XP award, for the UI to animate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XpChangeResult {
    /// Base amount plus streak bonus plus all badge bonuses
    pub xp_gained: i64,
    pub streak_bonus: i64,
    pub badge_bonus: i64,
    pub leveled_up: bool,
    pub previous_level: i32,
    pub new_level: Option<i32>,
    pub streak: Option<StreakOutcome>,
    pub badges_unlocked: Vec<BadgeRule>,
}

/// Audit row for a processed award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpEvent {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub activity: Activity,
    pub requested_xp: i64,
    pub xp_gained: i64,
    pub created_at: DateTime<Utc>,
}
