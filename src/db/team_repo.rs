use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::Team;

/// All teams ordered the way the catalogue endpoints present them.
pub async fn list_all(db: &PgPool) -> Result<Vec<Team>> {
    sqlx::query_as::<_, Team>(
        "SELECT * FROM teams ORDER BY conference, division, city",
    )
    .fetch_all(db)
    .await
    .context("listing teams")
}

pub async fn by_id(db: &PgPool, id: i32) -> Result<Option<Team>> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching team")
}

/// Team id for a provider team reference, if we know it.
pub async fn id_by_external(db: &PgPool, external_team_id: &str) -> Result<Option<i32>> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM teams WHERE external_team_id = $1")
        .bind(external_team_id)
        .fetch_optional(db)
        .await
        .context("resolving external team id")
}
