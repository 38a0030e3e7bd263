//! Consecutive-day streak tracking

use chrono::{Days, NaiveDate};
use common::models::StreakOutcome;
use serde::{Deserialize, Serialize};

/// Bonus XP paid when a streak continues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakBonus {
    pub per_day: i64,
    pub max_bonus: i64,
}

impl Default for StreakBonus {
    fn default() -> Self {
        Self {
            per_day: 5,
            max_bonus: 50,
        }
    }
}

impl StreakBonus {
    /// Bonus for reaching `streak_days` consecutive days
    pub fn bonus_for(&self, streak_days: i32) -> i64 {
        (self.per_day.max(0) * streak_days.max(0) as i64).min(self.max_bonus.max(0))
    }
}

/// Decide how the streak moves between `last_active` and `today`.
///
/// Only the calendar date matters. A `today` earlier than `last_active`
/// leaves the streak untouched.
pub fn evaluate_streak(
    last_active: Option<NaiveDate>,
    today: NaiveDate,
    current_streak_days: i32,
    bonus: &StreakBonus,
) -> StreakOutcome {
    let current = current_streak_days.max(0);

    let Some(last) = last_active else {
        return reset(current);
    };

    if today <= last {
        return StreakOutcome {
            new_streak_days: current,
            ..Default::default()
        };
    }

    if last.checked_add_days(Days::new(1)) == Some(today) {
        let new_streak_days = current + 1;
        return StreakOutcome {
            new_streak_days,
            streak_broken: false,
            streak_increased: true,
            xp_bonus: bonus.bonus_for(new_streak_days),
        };
    }

    reset(current)
}

fn reset(current: i32) -> StreakOutcome {
    StreakOutcome {
        new_streak_days: 1,
        streak_broken: current > 0,
        streak_increased: false,
        xp_bonus: 0,
    }
}
