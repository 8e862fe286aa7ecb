//! In-memory warm cache for the `teams` reference table.
//!
//! The 32-team catalogue never changes during a season, and nearly every
//! response embeds team data, so the whole table is loaded at start-up and
//! served from memory instead of hitting Postgres per request.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use sqlx::PgPool;

use crate::db::models::Team;

/// Global map id → Team (read-only once warmed).
pub static TEAMS: Lazy<DashMap<i32, Team>> = Lazy::new(DashMap::new);

/// Fetch the `teams` table and populate [`TEAMS`]. Idempotent.
pub async fn warm_teams(db: &PgPool) -> anyhow::Result<()> {
    let rows = sqlx::query_as::<_, Team>("SELECT * FROM teams")
        .fetch_all(db)
        .await?;

    for team in rows {
        TEAMS.insert(team.id, team);
    }
    Ok(())
}

/// Retrieve a cached team by ID.
pub fn get_team(id: i32) -> Option<Team> {
    TEAMS.get(&id).map(|e| e.value().clone())
}

/// All cached teams, unordered.
pub fn all_teams() -> Vec<Team> {
    TEAMS.iter().map(|e| e.value().clone()).collect()
}

/// Warm every in-memory cache we have (called once at startup).
pub async fn warm_all(db: &PgPool) {
    if let Err(e) = warm_teams(db).await {
        log::warn!("cache warm-up failed: {e:?}");
    }
}
