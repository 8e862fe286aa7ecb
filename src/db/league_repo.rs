use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{League, User};

/// Create a league with the given admin, who also becomes its first member.
/// Transactional: the admin's `league_id` moves in the same commit.
pub async fn create(db: &PgPool, name: &str, admin_user_id: Uuid) -> Result<League> {
    let mut tx = db.begin().await?;

    let league = sqlx::query_as::<_, League>(
        "INSERT INTO leagues (name, admin_user_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(name)
    .bind(admin_user_id)
    .fetch_one(&mut *tx)
    .await
    .context("creating league")?;

    sqlx::query("UPDATE users SET league_id = $2 WHERE id = $1")
        .bind(admin_user_id)
        .bind(league.id)
        .execute(&mut *tx)
        .await
        .context("enrolling league admin")?;

    tx.commit().await?;
    Ok(league)
}

pub async fn by_id(db: &PgPool, id: i64) -> Result<Option<League>> {
    sqlx::query_as::<_, League>("SELECT * FROM leagues WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching league")
}

pub async fn members(db: &PgPool, league_id: i64) -> Result<Vec<User>> {
    sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE league_id = $1 ORDER BY display_name, id",
    )
    .bind(league_id)
    .fetch_all(db)
    .await
    .context("listing league members")
}

pub async fn is_member(db: &PgPool, league_id: i64, user_id: Uuid) -> Result<bool> {
    Ok(sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND league_id = $2)",
    )
    .bind(user_id)
    .bind(league_id)
    .fetch_one(db)
    .await
    .context("checking league membership")?)
}

pub async fn is_admin(db: &PgPool, league_id: i64, user_id: Uuid) -> Result<bool> {
    Ok(sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM leagues WHERE id = $1 AND admin_user_id = $2)",
    )
    .bind(league_id)
    .bind(user_id)
    .fetch_one(db)
    .await
    .context("checking league admin")?)
}
