#[cfg(test)]
mod tests {
    use crate::award::award_xp;
    use crate::badges::defs;
    use crate::config::EngineConfig;
    use chrono::{Days, NaiveDate};
    use common::models::{Activity, ActivityCounts, ProgressRecord};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    fn with_badges(mut record: ProgressRecord, ids: &[&str]) -> ProgressRecord {
        for id in ids {
            record.unlocked_badge_ids.insert(id.to_string());
        }
        record
    }

    #[test]
    fn test_first_award_starts_streak_and_unlocks_first_badge() {
        let config = EngineConfig::default();
        let (record, change) = award_xp(
            &ProgressRecord::default(),
            100,
            today(),
            &ActivityCounts::new(),
            &config,
        );

        assert_eq!(record.streak_days, 1);
        assert_eq!(record.last_active_date, Some(today()));
        assert_eq!(change.streak_bonus, 0);
        assert!(!change.streak.unwrap().streak_broken);

        // 100 base + 10 from "first steps"
        assert_eq!(record.total_xp, 110);
        assert_eq!(change.xp_gained, 110);
        assert_eq!(change.badge_bonus, 10);
        assert_eq!(record.level, config.levels.level_for(110).level);
        assert_eq!(record.level, 2);
        assert!(change.leveled_up);
        assert_eq!(change.previous_level, 1);
        assert_eq!(change.new_level, Some(2));
        assert_eq!(change.badges_unlocked.len(), 1);
        assert_eq!(change.badges_unlocked[0].id, defs::FIRST_STEPS);
        assert!(record.unlocked_badge_ids.contains(defs::FIRST_STEPS));
    }

    #[test]
    fn test_seventh_day_applies_bonus_and_streak_badge() {
        let config = EngineConfig::default();
        let start = with_badges(
            ProgressRecord {
                total_xp: 300,
                level: 3,
                streak_days: 6,
                last_active_date: Some(days_ago(1)),
                ..Default::default()
            },
            &[defs::FIRST_STEPS, defs::ON_FIRE],
        );

        let (record, change) = award_xp(&start, 20, today(), &ActivityCounts::new(), &config);

        assert_eq!(record.streak_days, 7);
        assert_eq!(change.streak_bonus, 35);
        assert!(change.streak.unwrap().streak_increased);
        assert_eq!(change.badges_unlocked.len(), 1);
        assert_eq!(change.badges_unlocked[0].id, defs::WEEK_WARRIOR);
        assert_eq!(change.badge_bonus, 50);
        assert_eq!(change.xp_gained, 20 + 35 + 50);
        assert_eq!(record.total_xp, 405);
        assert_eq!(record.level, 3);
        assert!(!change.leveled_up);
        assert_eq!(change.new_level, None);
    }

    #[test]
    fn test_missed_days_reset_streak() {
        let config = EngineConfig::default();
        let start = with_badges(
            ProgressRecord {
                total_xp: 1000,
                level: 5,
                streak_days: 12,
                last_active_date: Some(days_ago(3)),
                ..Default::default()
            },
            &[
                defs::FIRST_STEPS,
                defs::RISING_STAR,
                defs::ON_FIRE,
                defs::WEEK_WARRIOR,
            ],
        );

        let (record, change) = award_xp(&start, 30, today(), &ActivityCounts::new(), &config);

        assert_eq!(record.streak_days, 1);
        let streak = change.streak.unwrap();
        assert!(streak.streak_broken);
        assert_eq!(change.streak_bonus, 0);
        assert_eq!(change.xp_gained, 30);
        assert_eq!(record.total_xp, 1030);
        // Streak badges are kept after the streak is lost
        assert!(record.unlocked_badge_ids.contains(defs::WEEK_WARRIOR));
    }

    #[test]
    fn test_same_day_awards_skip_streak() {
        let config = EngineConfig::default();
        let counts = ActivityCounts::new();
        let start = with_badges(
            ProgressRecord {
                total_xp: 40,
                streak_days: 2,
                last_active_date: Some(days_ago(1)),
                ..Default::default()
            },
            &[defs::FIRST_STEPS],
        );

        let (first, first_change) = award_xp(&start, 10, today(), &counts, &config);
        assert_eq!(first.streak_days, 3);
        assert_eq!(first_change.streak_bonus, 15);

        let first = with_badges(first, &[defs::ON_FIRE]);
        let (second, second_change) = award_xp(&first, 10, today(), &counts, &config);
        assert_eq!(second.streak_days, 3);
        assert_eq!(second_change.streak, None);
        assert_eq!(second_change.streak_bonus, 0);
        assert_eq!(second.total_xp, first.total_xp + 10);
    }

    #[test]
    fn test_negative_amount_adds_nothing() {
        let config = EngineConfig::default();
        let start = with_badges(
            ProgressRecord {
                total_xp: 50,
                streak_days: 1,
                last_active_date: Some(today()),
                ..Default::default()
            },
            &[defs::FIRST_STEPS],
        );

        let (record, change) = award_xp(&start, -500, today(), &ActivityCounts::new(), &config);
        assert_eq!(record.total_xp, 50);
        assert_eq!(change.xp_gained, 0);
        assert!(!change.leveled_up);
    }

    #[test]
    fn test_clock_skew_keeps_date_and_streak() {
        let config = EngineConfig::default();
        let start = with_badges(
            ProgressRecord {
                total_xp: 50,
                streak_days: 2,
                last_active_date: Some(today()),
                ..Default::default()
            },
            &[defs::FIRST_STEPS],
        );

        let (record, change) =
            award_xp(&start, 5, days_ago(2), &ActivityCounts::new(), &config);
        assert_eq!(record.streak_days, 2);
        assert_eq!(record.last_active_date, Some(today()));
        assert_eq!(change.streak_bonus, 0);
        assert_eq!(record.total_xp, 55);
    }

    #[test]
    fn test_badge_bonus_cascades() {
        let config = EngineConfig::default();
        let mut counts = ActivityCounts::new();
        counts.set(Activity::TradeExecuted, 1);
        let start = with_badges(
            ProgressRecord {
                total_xp: 480,
                level: 3,
                streak_days: 1,
                last_active_date: Some(today()),
                ..Default::default()
            },
            &[defs::FIRST_STEPS],
        );

        let (record, change) = award_xp(&start, 0, today(), &counts, &config);

        let unlocked: Vec<_> = change.badges_unlocked.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(unlocked, vec![defs::FIRST_TRADE, defs::RISING_STAR]);
        assert_eq!(record.total_xp, 480 + 20 + 50);
        assert_eq!(record.level, 4);
        assert!(change.leveled_up);
        assert_eq!(change.new_level, Some(4));
    }

    #[test]
    fn test_badge_bonus_can_level_up() {
        let config = EngineConfig::default();
        let start = ProgressRecord {
            total_xp: 5,
            streak_days: 1,
            last_active_date: Some(today()),
            ..Default::default()
        };

        // 95 + 10 from "first steps" crosses the 100 XP line
        let (record, change) = award_xp(&start, 85, today(), &ActivityCounts::new(), &config);
        assert_eq!(record.total_xp, 100);
        assert_eq!(record.level, 2);
        assert_eq!(change.new_level, Some(2));
    }

    #[test]
    fn test_huge_award_saturates_instead_of_wrapping() {
        let config = EngineConfig::default();
        let before = ProgressRecord {
            total_xp: 1000,
            level: 5,
            streak_days: 3,
            last_active_date: Some(days_ago(1)),
            ..Default::default()
        };

        let (next, change) = award_xp(&before, i64::MAX, today(), &ActivityCounts::new(), &config);

        assert!(next.total_xp >= before.total_xp);
        assert_eq!(next.total_xp, i64::MAX);
        assert_eq!(next.total_xp - before.total_xp, change.xp_gained);
        assert_eq!(next.level, config.levels.max_level());
        assert_eq!(next.streak_days, 4);
    }

    #[test]
    fn test_random_award_sequences_keep_invariants() {
        let config = EngineConfig::default();
        let catalog_ids: std::collections::HashSet<_> =
            config.badges.iter().map(|b| b.id.clone()).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut record = ProgressRecord::default();
            let mut counts = ActivityCounts::new();
            let mut day = today();

            for _ in 0..200 {
                match rng.gen_range(0..10) {
                    0..=5 => {}
                    6..=8 => day = day.checked_add_days(Days::new(rng.gen_range(1..4))).unwrap(),
                    _ => day = day.checked_sub_days(Days::new(1)).unwrap(),
                }
                let activity = Activity::ALL[rng.gen_range(0..Activity::ALL.len())];
                counts.increment(activity);
                let amount = rng.gen_range(-50..200);

                let before = record.clone();
                let (next, change) = award_xp(&record, amount, day, &counts, &config);

                assert!(next.total_xp >= before.total_xp);
                assert!(next.level >= before.level);
                assert_eq!(next.level, config.levels.level_for(next.total_xp).level);
                assert_eq!(next.total_xp - before.total_xp, change.xp_gained);
                assert!(before.unlocked_badge_ids.is_subset(&next.unlocked_badge_ids));
                assert!(next
                    .unlocked_badge_ids
                    .iter()
                    .all(|id| catalog_ids.contains(id)));
                assert!(next.streak_days >= 1);

                record = next;
            }
        }
    }
}
