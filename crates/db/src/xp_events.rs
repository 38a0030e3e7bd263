//! XP event log

use common::models::{Activity, XpEvent};
use sqlx::{PgConnection, PgPool, Row};
use uuid::Uuid;

/// Record a processed award
pub async fn record(
    conn: &mut PgConnection,
    profile_id: Uuid,
    activity: Activity,
    requested_xp: i64,
    xp_gained: i64,
) -> Result<XpEvent, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO xp_events (id, profile_id, activity, requested_xp, xp_gained, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(profile_id)
    .bind(activity.as_str())
    .bind(requested_xp)
    .bind(xp_gained)
    .fetch_one(&mut *conn)
    .await?;

    Ok(XpEvent {
        id: row.get("id"),
        profile_id,
        activity,
        requested_xp,
        xp_gained,
        created_at: row.get("created_at"),
    })
}

/// Most recent events for a profile
pub async fn list_recent(
    pool: &PgPool,
    profile_id: Uuid,
    limit: i64,
) -> Result<Vec<XpEvent>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, profile_id, activity, requested_xp, xp_gained, created_at
        FROM xp_events
        WHERE profile_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(profile_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|r| {
            let activity: String = r.get("activity");
            Some(XpEvent {
                id: r.get("id"),
                profile_id: r.get("profile_id"),
                activity: Activity::parse(&activity)?,
                requested_xp: r.get("requested_xp"),
                xp_gained: r.get("xp_gained"),
                created_at: r.get("created_at"),
            })
        })
        .collect())
}
