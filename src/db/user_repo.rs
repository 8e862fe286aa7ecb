use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::User;

/// Resolve the identity-provider subject to a local user row, creating one
/// on first sight.
pub async fn resolve_external(db: &PgPool, external_id: &str, display_name: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (external_id, display_name)
        VALUES ($1, $2)
        ON CONFLICT (external_id) DO UPDATE SET external_id = EXCLUDED.external_id
        RETURNING *
        "#,
    )
    .bind(external_id)
    .bind(display_name)
    .fetch_one(db)
    .await
    .context("resolving user")
}

pub async fn by_id(db: &PgPool, id: Uuid) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching user")
}

/// Move a user into a league. A user belongs to at most one league.
pub async fn set_league(db: &PgPool, user_id: Uuid, league_id: i64) -> Result<()> {
    sqlx::query("UPDATE users SET league_id = $2 WHERE id = $1")
        .bind(user_id)
        .bind(league_id)
        .execute(db)
        .await
        .context("setting user league")?;
    Ok(())
}
