//! Schedule reads and the provider sync trigger.

use actix_web::{get, post, web, HttpResponse};
use anyhow::anyhow;
use serde::Serialize;
use sqlx::PgPool;

use crate::cache;
use crate::db::models::Game;
use crate::db::{game_repo, league_repo, team_repo, user_repo};
use crate::error::{ApiError, ApiResult};
use crate::http::auth::BearerAuth;
use crate::http::teams::TeamDto;
use crate::sync;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i64,
    pub external_game_id: String,
    pub game_time: chrono::DateTime<chrono::Utc>,
    pub pick_deadline: chrono::DateTime<chrono::Utc>,
    pub week: i32,
    pub season: i32,
    pub is_completed: bool,
    pub is_playoffs: bool,
    pub location: Option<String>,
    pub home_team_score: Option<i32>,
    pub away_team_score: Option<i32>,
    pub home_team: TeamDto,
    pub away_team: TeamDto,
    pub winning_team: Option<TeamDto>,
}

async fn resolve_team(db: &PgPool, id: i32) -> ApiResult<TeamDto> {
    let team = match cache::get_team(id) {
        Some(t) => Some(t),
        None => team_repo::by_id(db, id).await?,
    };
    team.map(TeamDto::from)
        .ok_or_else(|| ApiError::Internal(anyhow!("team {id} referenced by game is missing")))
}

pub async fn game_dto(db: &PgPool, game: Game) -> ApiResult<GameDto> {
    let home_team = resolve_team(db, game.home_team_id).await?;
    let away_team = resolve_team(db, game.away_team_id).await?;
    let winning_team = match game.winning_team_id {
        Some(id) => Some(resolve_team(db, id).await?),
        None => None,
    };
    Ok(GameDto {
        id: game.id,
        external_game_id: game.external_game_id,
        game_time: game.game_time,
        pick_deadline: game.pick_deadline,
        week: game.week,
        season: game.season,
        is_completed: game.is_completed,
        is_playoffs: game.is_playoffs,
        location: game.location,
        home_team_score: game.home_score,
        away_team_score: game.away_score,
        home_team,
        away_team,
        winning_team,
    })
}

async fn games_to_dtos(db: &PgPool, games: Vec<Game>) -> ApiResult<Vec<GameDto>> {
    let mut out = Vec::with_capacity(games.len());
    for g in games {
        out.push(game_dto(db, g).await?);
    }
    Ok(out)
}

#[get("/games/week/{week}/season/{season}")]
pub async fn games_by_week(
    path: web::Path<(i32, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (week, season) = path.into_inner();
    let games = game_repo::by_week(&db, week, season).await?;
    Ok(HttpResponse::Ok().json(games_to_dtos(&db, games).await?))
}

#[get("/games/team/{team_id}/season/{season}")]
pub async fn games_by_team(
    path: web::Path<(i32, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (team_id, season) = path.into_inner();
    if cache::get_team(team_id).is_none() && team_repo::by_id(&db, team_id).await?.is_none() {
        return Err(ApiError::NotFound("team"));
    }
    let games = game_repo::by_team_season(&db, team_id, season).await?;
    Ok(HttpResponse::Ok().json(games_to_dtos(&db, games).await?))
}

#[get("/games/{id}")]
pub async fn get_game(path: web::Path<i64>, db: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    let game = game_repo::by_id(&db, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("game"))?;
    Ok(HttpResponse::Ok().json(game_dto(&db, game).await?))
}

/// POST /api/games/upsert/{league_id}/{season}
///
/// Pulls the season schedule and results from the provider. League-admin
/// only; completing games scores their picks as part of the same sync.
#[post("/games/upsert/{league_id}/{season}")]
pub async fn upsert_games(
    auth: BearerAuth,
    path: web::Path<(i64, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (league_id, season) = path.into_inner();
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;

    if league_repo::by_id(&db, league_id).await?.is_none() {
        return Err(ApiError::NotFound("league"));
    }
    if !league_repo::is_admin(&db, league_id, user.id).await? {
        return Err(ApiError::Forbidden("only the league admin may sync games"));
    }

    let summary = sync::sync_season(&db, season).await?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(games_by_week)
        .service(games_by_team)
        .service(upsert_games)
        .service(get_game);
}
