//! XP award orchestration
//!
//! Composes the streak tracker, level curve and badge evaluator into a single
//! pure update: given a record and an award, return the new record plus a
//! description of everything that changed.

use chrono::NaiveDate;
use common::models::{ActivityCounts, ProgressRecord, XpChangeResult};
use tracing::debug;

use crate::badges::evaluate_badges;
use crate::config::EngineConfig;
use crate::streak::evaluate_streak;

/// Largest single award accepted from outside the engine
pub const MAX_AWARD_XP: i64 = 100_000;

/// Award `amount` XP on `today`.
///
/// Negative amounts contribute nothing. The streak moves at most once per
/// calendar day, and badge bonuses are applied in unlock order, each one able
/// to push the level (and further XP badges) along.
pub fn award_xp(
    record: &ProgressRecord,
    amount: i64,
    today: NaiveDate,
    counts: &ActivityCounts,
    config: &EngineConfig,
) -> (ProgressRecord, XpChangeResult) {
    let mut next = record.clone();
    let previous_level = config.levels.level_for(record.total_xp).level;

    let mut streak = None;
    let mut streak_bonus = 0;
    if record.last_active_date != Some(today) {
        let outcome = evaluate_streak(
            record.last_active_date,
            today,
            record.streak_days,
            &config.streak_bonus,
        );

        next.streak_days = outcome.new_streak_days;
        // The stored date never moves backwards
        if record.last_active_date.map_or(true, |last| today > last) {
            next.last_active_date = Some(today);
        }
        streak_bonus = outcome.xp_bonus;
        streak = Some(outcome);
    }

    let base = amount.max(0);
    next.total_xp = next.total_xp.max(0).saturating_add(base.saturating_add(streak_bonus));
    next.level = config.levels.level_for(next.total_xp).level;

    let mut badges_unlocked = Vec::new();
    let mut badge_bonus: i64 = 0;
    loop {
        let newly = evaluate_badges(&next, counts, &config.badges);
        if newly.is_empty() {
            break;
        }
        for rule in newly {
            let bonus = rule.xp_bonus.max(0);
            next.total_xp = next.total_xp.saturating_add(bonus);
            next.level = config.levels.level_for(next.total_xp).level;
            next.unlocked_badge_ids.insert(rule.id.clone());
            badge_bonus = badge_bonus.saturating_add(bonus);
            badges_unlocked.push(rule);
        }
    }

    let leveled_up = next.level > previous_level;
    let result = XpChangeResult {
        // Net change on the record; equals the bonus sum unless the total saturates
        xp_gained: next.total_xp - record.total_xp.max(0),
        streak_bonus,
        badge_bonus,
        leveled_up,
        previous_level,
        new_level: leveled_up.then_some(next.level),
        streak,
        badges_unlocked,
    };

    debug!(
        "Awarded {} XP ({} base, {} streak, {} badges), level {} -> {}",
        result.xp_gained, base, streak_bonus, badge_bonus, previous_level, next.level
    );

    (next, result)
}
