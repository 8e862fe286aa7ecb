use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::db::models::Pick;
use crate::pickem::scoring::ScoringRule;

/// Insert or replace the user's pick for a game. One atomic statement;
/// the `(user_id, game_id)` unique constraint makes the last writer before
/// the deadline win a concurrent double-submit.
pub async fn upsert_pick(
    db: &PgPool,
    user_id: Uuid,
    game_id: i64,
    selected_team_id: i32,
    notes: Option<&str>,
    submitted_at: DateTime<Utc>,
) -> Result<Pick> {
    sqlx::query_as::<_, Pick>(
        r#"
        INSERT INTO picks (user_id, game_id, selected_team_id, notes, submitted_at)
        VALUES ($1,$2,$3,$4,$5)
        ON CONFLICT (user_id, game_id) DO UPDATE SET
            selected_team_id = EXCLUDED.selected_team_id,
            notes            = EXCLUDED.notes,
            submitted_at     = EXCLUDED.submitted_at
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(game_id)
    .bind(selected_team_id)
    .bind(notes)
    .bind(submitted_at)
    .fetch_one(db)
    .await
    .context("upserting pick")
}

/// The user's picks across one week, keyed by joining the schedule.
pub async fn for_user_week(
    db: &PgPool,
    user_id: Uuid,
    week: i32,
    season: i32,
) -> Result<Vec<Pick>> {
    sqlx::query_as::<_, Pick>(
        r#"
        SELECT p.* FROM picks p
        JOIN games g ON g.id = p.game_id
        WHERE p.user_id = $1 AND g.week = $2 AND g.season = $3
        ORDER BY g.game_time, g.id
        "#,
    )
    .bind(user_id)
    .bind(week)
    .bind(season)
    .fetch_all(db)
    .await
    .context("listing user week picks")
}

/// Every league member's picks for one week.
pub async fn for_league_week(
    db: &PgPool,
    league_id: i64,
    week: i32,
    season: i32,
) -> Result<Vec<Pick>> {
    sqlx::query_as::<_, Pick>(
        r#"
        SELECT p.* FROM picks p
        JOIN users u ON u.id = p.user_id
        JOIN games g ON g.id = p.game_id
        WHERE u.league_id = $1 AND g.week = $2 AND g.season = $3
        "#,
    )
    .bind(league_id)
    .bind(week)
    .bind(season)
    .fetch_all(db)
    .await
    .context("listing league week picks")
}

/// Apply correctness and points to every pick of a just-completed game.
/// `winning_team_id = None` is a tie: everyone scores zero.
pub async fn score_game_picks(
    tx: &mut Transaction<'_, Postgres>,
    game_id: i64,
    winning_team_id: Option<i32>,
    rule: &ScoringRule,
) -> Result<()> {
    let conn: &mut PgConnection = &mut *tx;
    match winning_team_id {
        Some(winner) => {
            sqlx::query(
                r#"
                UPDATE picks
                   SET is_correct = (selected_team_id = $2),
                       points     = CASE WHEN selected_team_id = $2 THEN $3 ELSE 0 END
                 WHERE game_id = $1
                "#,
            )
            .bind(game_id)
            .bind(winner)
            .bind(rule.points_per_correct)
            .execute(conn)
            .await
            .context("scoring picks")?;
        }
        None => {
            sqlx::query(
                "UPDATE picks SET is_correct = FALSE, points = 0 WHERE game_id = $1",
            )
            .bind(game_id)
            .execute(conn)
            .await
            .context("scoring tie picks")?;
        }
    }
    Ok(())
}
