//! Badge catalog and unlock evaluation

use common::models::{
    Activity, ActivityCounts, BadgePredicate, BadgeRarity, BadgeRule, ProgressRecord,
};

/// Built-in badge ids
pub mod defs {
    // XP milestones
    pub const FIRST_STEPS: &str = "first_steps";
    pub const RISING_STAR: &str = "rising_star";
    pub const XP_CHAMPION: &str = "xp_champion";

    // Streaks
    pub const ON_FIRE: &str = "on_fire";
    pub const WEEK_WARRIOR: &str = "week_warrior";
    pub const UNSTOPPABLE: &str = "unstoppable";

    // Activity counts
    pub const QUIZ_ROOKIE: &str = "quiz_rookie";
    pub const QUIZ_MASTER: &str = "quiz_master";
    pub const PERFECTIONIST: &str = "perfectionist";
    pub const FIRST_TRADE: &str = "first_trade";
    pub const GOAL_GETTER: &str = "goal_getter";
    pub const ARENA_CHAMPION: &str = "arena_champion";
}

/// Does `rule` hold for this record and these counts?
pub fn is_satisfied(rule: &BadgeRule, record: &ProgressRecord, counts: &ActivityCounts) -> bool {
    match &rule.predicate {
        BadgePredicate::XpThreshold { threshold } => record.total_xp >= *threshold,
        BadgePredicate::StreakThreshold { threshold } => record.streak_days >= *threshold,
        BadgePredicate::CountThreshold {
            activity,
            threshold,
        } => counts.get(*activity) >= *threshold,
    }
}

/// Badges not yet unlocked whose predicate now holds, in catalog order.
///
/// Read-only: the caller decides what to do with the result.
pub fn evaluate_badges(
    record: &ProgressRecord,
    counts: &ActivityCounts,
    catalog: &[BadgeRule],
) -> Vec<BadgeRule> {
    catalog
        .iter()
        .filter(|rule| !record.unlocked_badge_ids.contains(&rule.id))
        .filter(|rule| is_satisfied(rule, record, counts))
        .cloned()
        .collect()
}

fn badge(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    rarity: BadgeRarity,
    predicate: BadgePredicate,
    xp_bonus: i64,
) -> BadgeRule {
    BadgeRule {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        rarity,
        predicate,
        xp_bonus,
    }
}

/// The default catalog, in evaluation order
pub fn default_catalog() -> Vec<BadgeRule> {
    use BadgePredicate::*;
    use BadgeRarity::*;

    vec![
        badge(
            defs::FIRST_STEPS,
            "First Steps",
            "🐣",
            "Earn your first 10 XP",
            Common,
            XpThreshold { threshold: 10 },
            10,
        ),
        badge(
            defs::RISING_STAR,
            "Rising Star",
            "🌟",
            "Reach 500 XP",
            Uncommon,
            XpThreshold { threshold: 500 },
            50,
        ),
        badge(
            defs::XP_CHAMPION,
            "XP Champion",
            "🏅",
            "Reach 2,000 XP",
            Rare,
            XpThreshold { threshold: 2000 },
            100,
        ),
        badge(
            defs::ON_FIRE,
            "On Fire",
            "🔥",
            "Keep a 3-day streak",
            Common,
            StreakThreshold { threshold: 3 },
            15,
        ),
        badge(
            defs::WEEK_WARRIOR,
            "Week Warrior",
            "🗓️",
            "Keep a 7-day streak",
            Rare,
            StreakThreshold { threshold: 7 },
            50,
        ),
        badge(
            defs::UNSTOPPABLE,
            "Unstoppable",
            "🚀",
            "Keep a 30-day streak",
            Legendary,
            StreakThreshold { threshold: 30 },
            200,
        ),
        badge(
            defs::QUIZ_ROOKIE,
            "Quiz Rookie",
            "📝",
            "Complete your first quiz",
            Common,
            CountThreshold {
                activity: Activity::QuizCompleted,
                threshold: 1,
            },
            10,
        ),
        badge(
            defs::QUIZ_MASTER,
            "Quiz Master",
            "🎓",
            "Complete 10 quizzes",
            Rare,
            CountThreshold {
                activity: Activity::QuizCompleted,
                threshold: 10,
            },
            75,
        ),
        badge(
            defs::PERFECTIONIST,
            "Perfectionist",
            "💯",
            "Answer every question of a quiz correctly",
            Uncommon,
            CountThreshold {
                activity: Activity::PerfectQuiz,
                threshold: 1,
            },
            25,
        ),
        badge(
            defs::FIRST_TRADE,
            "First Trade",
            "📊",
            "Execute your first trade",
            Common,
            CountThreshold {
                activity: Activity::TradeExecuted,
                threshold: 1,
            },
            20,
        ),
        badge(
            defs::GOAL_GETTER,
            "Goal Getter",
            "🎯",
            "Reach 3 savings goals",
            Epic,
            CountThreshold {
                activity: Activity::SavingsGoalReached,
                threshold: 3,
            },
            80,
        ),
        badge(
            defs::ARENA_CHAMPION,
            "Arena Champion",
            "⚔️",
            "Win 5 arena matches",
            Epic,
            CountThreshold {
                activity: Activity::ArenaMatchWon,
                threshold: 5,
            },
            60,
        ),
    ]
}
