//! Activity counters

use common::models::{Activity, ActivityCounts};
use sqlx::{PgConnection, Row};
use tracing::warn;
use uuid::Uuid;

/// All counters for a profile
pub async fn counts(conn: &mut PgConnection, profile_id: Uuid) -> Result<ActivityCounts, sqlx::Error> {
    let rows = sqlx::query("SELECT activity, count FROM activity_counts WHERE profile_id = $1")
        .bind(profile_id)
        .fetch_all(&mut *conn)
        .await?;

    let mut counts = ActivityCounts::new();
    for row in rows {
        let name: String = row.get("activity");
        match Activity::parse(&name) {
            Some(activity) => counts.set(activity, row.get("count")),
            None => warn!("Ignoring unknown activity {} for {}", name, profile_id),
        }
    }
    Ok(counts)
}

/// Bump a counter and return its new value
pub async fn increment(
    conn: &mut PgConnection,
    profile_id: Uuid,
    activity: Activity,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO activity_counts (profile_id, activity, count)
        VALUES ($1, $2, 1)
        ON CONFLICT (profile_id, activity) DO UPDATE
        SET count = activity_counts.count + 1
        RETURNING count
        "#,
    )
    .bind(profile_id)
    .bind(activity.as_str())
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.get("count"))
}
