//! Profile queries

use common::models::{Profile, ProfileKind};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn row_to_profile(row: &PgRow) -> Profile {
    let kind: String = row.get("kind");
    Profile {
        id: row.get("id"),
        name: row.get("name"),
        kind: ProfileKind::parse(&kind).unwrap_or(ProfileKind::Adult),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a profile with fresh progress
pub async fn create(pool: &PgPool, name: &str, kind: ProfileKind) -> Result<Profile, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO profiles (id, name, kind, total_xp, level, streak_days, created_at, updated_at)
        VALUES ($1, $2, $3, 0, 1, 0, NOW(), NOW())
        RETURNING id, name, kind, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(kind.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row_to_profile(&row))
}

/// Get profile by ID
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, name, kind, created_at, updated_at FROM profiles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_profile))
}

/// All profiles, oldest first
pub async fn list(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, name, kind, created_at, updated_at FROM profiles ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_profile).collect())
}
