use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::models::Game;
use crate::db::pick_repo;
use crate::pickem::scoring::ScoringRule;

pub async fn by_id(db: &PgPool, id: i64) -> Result<Option<Game>> {
    sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching game")
}

/// Week schedule, kickoff order.
pub async fn by_week(db: &PgPool, week: i32, season: i32) -> Result<Vec<Game>> {
    sqlx::query_as::<_, Game>(
        "SELECT * FROM games WHERE week = $1 AND season = $2 ORDER BY game_time, id",
    )
    .bind(week)
    .bind(season)
    .fetch_all(db)
    .await
    .context("listing week games")
}

/// Every game a team plays in a season.
pub async fn by_team_season(db: &PgPool, team_id: i32, season: i32) -> Result<Vec<Game>> {
    sqlx::query_as::<_, Game>(
        "SELECT * FROM games
          WHERE season = $2 AND (home_team_id = $1 OR away_team_id = $1)
          ORDER BY game_time, id",
    )
    .bind(team_id)
    .bind(season)
    .fetch_all(db)
    .await
    .context("listing team season games")
}

/// One game as delivered by the provider sync, keyed on `external_game_id`.
#[derive(Debug, Clone)]
pub struct GameUpsert {
    pub external_game_id: String,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub game_time: DateTime<Utc>,
    pub pick_deadline: DateTime<Utc>,
    pub week: i32,
    pub season: i32,
    pub is_playoffs: bool,
    pub is_completed: bool,
    pub location: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub winning_team_id: Option<i32>,
}

#[derive(Debug, Clone, Copy)]
pub struct UpsertOutcome {
    pub game_id: i64,
    pub newly_completed: bool,
}

/// Upsert a synced game and, when this write is the one that completes it,
/// score every pick for it in the same transaction. Completion is one-way:
/// a later sync cannot reopen a completed game.
pub async fn upsert_and_score(
    db: &PgPool,
    up: &GameUpsert,
    rule: &ScoringRule,
) -> Result<UpsertOutcome> {
    let mut tx = db.begin().await?;

    let was_completed: Option<bool> = sqlx::query_scalar::<_, bool>(
        "SELECT is_completed FROM games WHERE external_game_id = $1 FOR UPDATE",
    )
    .bind(&up.external_game_id)
    .fetch_optional(&mut *tx)
    .await
    .context("checking prior completion state")?;

    let game_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO games (external_game_id, home_team_id, away_team_id,
                           game_time, pick_deadline, week, season,
                           is_playoffs, is_completed, location,
                           home_score, away_score, winning_team_id)
        VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13)
        ON CONFLICT (external_game_id) DO UPDATE SET
            game_time       = EXCLUDED.game_time,
            pick_deadline   = EXCLUDED.pick_deadline,
            week            = EXCLUDED.week,
            season          = EXCLUDED.season,
            is_playoffs     = EXCLUDED.is_playoffs,
            location        = EXCLUDED.location,
            is_completed    = games.is_completed OR EXCLUDED.is_completed,
            home_score      = COALESCE(EXCLUDED.home_score, games.home_score),
            away_score      = COALESCE(EXCLUDED.away_score, games.away_score),
            winning_team_id = COALESCE(EXCLUDED.winning_team_id, games.winning_team_id)
        RETURNING id
        "#,
    )
    .bind(&up.external_game_id)
    .bind(up.home_team_id)
    .bind(up.away_team_id)
    .bind(up.game_time)
    .bind(up.pick_deadline)
    .bind(up.week)
    .bind(up.season)
    .bind(up.is_playoffs)
    .bind(up.is_completed)
    .bind(&up.location)
    .bind(up.home_score)
    .bind(up.away_score)
    .bind(up.winning_team_id)
    .fetch_one(&mut *tx)
    .await
    .context("upserting game")?;

    let newly_completed = up.is_completed && !was_completed.unwrap_or(false);
    if newly_completed {
        pick_repo::score_game_picks(&mut tx, game_id, up.winning_team_id, rule).await?;
    }

    tx.commit().await?;
    Ok(UpsertOutcome {
        game_id,
        newly_completed,
    })
}
