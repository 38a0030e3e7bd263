//! Progress record load/save
//!
//! These take a connection rather than the pool so an award can load, update
//! and save inside a single transaction.

use chrono::{DateTime, Utc};
use common::models::ProgressRecord;
use sqlx::{PgConnection, Row};
use tracing::debug;
use uuid::Uuid;

/// Load a profile's progress
pub async fn load(conn: &mut PgConnection, profile_id: Uuid) -> Result<Option<ProgressRecord>, sqlx::Error> {
    fetch(conn, profile_id, false).await
}

/// Load a profile's progress and lock its row until the transaction ends
pub async fn load_for_update(
    conn: &mut PgConnection,
    profile_id: Uuid,
) -> Result<Option<ProgressRecord>, sqlx::Error> {
    fetch(conn, profile_id, true).await
}

async fn fetch(
    conn: &mut PgConnection,
    profile_id: Uuid,
    lock: bool,
) -> Result<Option<ProgressRecord>, sqlx::Error> {
    let sql = if lock {
        "SELECT total_xp, level, streak_days, last_active_date FROM profiles WHERE id = $1 FOR UPDATE"
    } else {
        "SELECT total_xp, level, streak_days, last_active_date FROM profiles WHERE id = $1"
    };

    let Some(row) = sqlx::query(sql)
        .bind(profile_id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };

    let badge_ids: Vec<String> =
        sqlx::query_scalar("SELECT badge_id FROM profile_badges WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_all(&mut *conn)
            .await?;

    Ok(Some(ProgressRecord {
        total_xp: row.get("total_xp"),
        level: row.get("level"),
        streak_days: row.get("streak_days"),
        last_active_date: row.get("last_active_date"),
        unlocked_badge_ids: badge_ids.into_iter().collect(),
    }))
}

/// Persist a progress record along with the badges this award unlocked.
///
/// Badge rows are only added, never removed. Each one lands a millisecond
/// after the previous so listings keep unlock order.
pub async fn save(
    conn: &mut PgConnection,
    profile_id: Uuid,
    record: &ProgressRecord,
    new_badge_ids: &[&str],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE profiles
        SET total_xp = $2,
            level = $3,
            streak_days = $4,
            last_active_date = $5,
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(profile_id)
    .bind(record.total_xp)
    .bind(record.level)
    .bind(record.streak_days)
    .bind(record.last_active_date)
    .execute(&mut *conn)
    .await?;

    for (badge_id, offset_secs) in unlock_offsets(new_badge_ids) {
        sqlx::query(
            r#"
            INSERT INTO profile_badges (profile_id, badge_id, unlocked_at)
            VALUES ($1, $2, NOW() + make_interval(secs => $3))
            ON CONFLICT (profile_id, badge_id) DO NOTHING
            "#,
        )
        .bind(profile_id)
        .bind(badge_id)
        .bind(offset_secs)
        .execute(&mut *conn)
        .await?;
    }

    debug!(
        "Saved progress for {}: {} XP, level {}, {} new badges",
        profile_id,
        record.total_xp,
        record.level,
        new_badge_ids.len()
    );
    Ok(())
}

fn unlock_offsets<'a>(ids: &'a [&'a str]) -> impl Iterator<Item = (&'a str, f64)> + 'a {
    ids.iter()
        .enumerate()
        .map(|(i, id)| (*id, i as f64 / 1000.0))
}

/// Unlocked badges with their unlock time, newest first
pub async fn list_badge_unlocks(
    conn: &mut PgConnection,
    profile_id: Uuid,
) -> Result<Vec<(String, DateTime<Utc>)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT badge_id, unlocked_at
        FROM profile_badges
        WHERE profile_id = $1
        ORDER BY unlocked_at DESC, badge_id ASC
        "#,
    )
    .bind(profile_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| (r.get("badge_id"), r.get("unlocked_at")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_offsets_follow_unlock_order() {
        let ids = ["on_fire", "first_steps", "rising_star"];
        let offsets: Vec<_> = unlock_offsets(&ids).collect();

        assert_eq!(
            offsets.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec!["on_fire", "first_steps", "rising_star"]
        );
        assert_eq!(offsets[0].1, 0.0);
        assert!(offsets.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_no_new_badges_no_rows() {
        assert_eq!(unlock_offsets(&[]).count(), 0);
    }
}
