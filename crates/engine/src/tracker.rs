//! Applies awards to stored profiles

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use common::models::{Activity, ActivityCounts, ProgressRecord, XpChangeResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::award::award_xp;
use crate::config::EngineConfig;

fn db_err(e: sqlx::Error) -> common::Error {
    common::Error::Database(e.to_string())
}

/// Loads, awards and persists progress for profiles
pub struct ProgressTracker {
    pool: PgPool,
    config: Arc<EngineConfig>,
    offset: FixedOffset,
}

impl ProgressTracker {
    pub fn new(pool: PgPool, config: Arc<EngineConfig>, utc_offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
        Self {
            pool,
            config,
            offset,
        }
    }

    /// The calendar day streaks are counted in
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Current record and activity counts
    pub async fn snapshot(
        &self,
        profile_id: Uuid,
    ) -> Result<(ProgressRecord, ActivityCounts), common::Error> {
        let mut conn = self.pool.acquire().await.map_err(db_err)?;
        let record = db::progress::load(&mut *conn, profile_id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| common::Error::NotFound(format!("Profile {}", profile_id)))?;
        let counts = db::activity::counts(&mut *conn, profile_id)
            .await
            .map_err(db_err)?;
        Ok((record, counts))
    }

    /// Record one activity. Without an explicit amount the activity's
    /// configured XP is awarded.
    pub async fn record_activity(
        &self,
        profile_id: Uuid,
        activity: Activity,
        amount: Option<i64>,
    ) -> Result<XpChangeResult, common::Error> {
        let amount = amount.unwrap_or_else(|| self.config.xp_for(activity));
        self.record_on(profile_id, &[activity], amount, self.today())
            .await
    }

    /// Count every activity in `activities`, then award `amount` once.
    ///
    /// The first activity labels the XP event. Everything happens in one
    /// transaction with the profile row locked, so concurrent awards for the
    /// same profile queue up instead of overwriting each other.
    pub async fn record_on(
        &self,
        profile_id: Uuid,
        activities: &[Activity],
        amount: i64,
        today: NaiveDate,
    ) -> Result<XpChangeResult, common::Error> {
        let primary = activities.first().copied().ok_or_else(|| {
            common::Error::InvalidInput("at least one activity is required".to_string())
        })?;

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let record = db::progress::load_for_update(&mut *tx, profile_id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| common::Error::NotFound(format!("Profile {}", profile_id)))?;

        for activity in activities {
            db::activity::increment(&mut *tx, profile_id, *activity)
                .await
                .map_err(db_err)?;
        }
        let counts = db::activity::counts(&mut *tx, profile_id)
            .await
            .map_err(db_err)?;

        let (next, change) = award_xp(&record, amount, today, &counts, &self.config);

        let new_badge_ids: Vec<&str> = change
            .badges_unlocked
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        db::progress::save(&mut *tx, profile_id, &next, &new_badge_ids)
            .await
            .map_err(db_err)?;
        db::xp_events::record(&mut *tx, profile_id, primary, amount, change.xp_gained)
            .await
            .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;

        info!(
            "{} for {:?}: +{} XP (total {})",
            primary.as_str(),
            profile_id,
            change.xp_gained,
            next.total_xp
        );
        if let Some(streak) = &change.streak {
            if streak.streak_broken {
                info!("💔 Streak lost for {:?}", profile_id);
            } else if streak.streak_increased {
                info!(
                    "🔥 Streak for {:?} is now {} days",
                    profile_id, streak.new_streak_days
                );
            }
        }
        if let Some(level) = change.new_level {
            info!("⬆️ Level up: {:?} reached level {}", profile_id, level);
        }
        for badge in &change.badges_unlocked {
            info!("🏆 Badge unlocked: {} for profile {:?}", badge.id, profile_id);
        }

        Ok(change)
    }
}
