//! The pick ledger: submission, own-pick reads, league visibility, status.

use std::collections::{HashMap, HashSet};

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Pick;
use crate::db::{game_repo, league_repo, pick_repo, user_repo};
use crate::error::{ApiError, ApiResult};
use crate::http::auth::BearerAuth;
use crate::pickem::eligibility::{validate_pick, PickRejection};
use crate::pickem::status::{week_status, PicksStatus};
use crate::pickem::visibility::{visible_pick, VisiblePick};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickDto {
    pub id: i64,
    pub user_id: Uuid,
    pub game_id: i64,
    pub selected_team_id: i32,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,
    pub is_correct: Option<bool>,
    pub points: i32,
}

impl From<Pick> for PickDto {
    fn from(p: Pick) -> Self {
        PickDto {
            id: p.id,
            user_id: p.user_id,
            game_id: p.game_id,
            selected_team_id: p.selected_team_id,
            submitted_at: p.submitted_at,
            notes: p.notes,
            is_correct: p.is_correct,
            points: p.points,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPickRequest {
    pub game_id: i64,
    pub selected_team_id: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPicksResponse {
    pub picks: Vec<PickDto>,
    pub status: PicksStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPicks {
    pub user_id: Uuid,
    pub user_name: String,
    pub picks: Vec<VisiblePick>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguePicks {
    pub league_id: i64,
    pub league_name: String,
    pub week: i32,
    pub season: i32,
    pub user_picks: Vec<UserPicks>,
}

/// POST /api/picks — submit or replace a pick before the deadline.
#[post("/picks")]
pub async fn submit_pick(
    auth: BearerAuth,
    body: web::Json<SubmitPickRequest>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;

    let game = game_repo::by_id(&db, body.game_id)
        .await?
        .ok_or(ApiError::NotFound("game"))?;

    // Server clock only; client timestamps are never trusted.
    let now = Utc::now();
    validate_pick(&game, body.selected_team_id, now).map_err(|r| match r {
        PickRejection::DeadlinePassed { .. } => ApiError::DeadlinePassed,
        PickRejection::TeamNotInGame { selected_team_id } => ApiError::Validation(format!(
            "team {selected_team_id} is not playing in game {}",
            game.id
        )),
    })?;

    let pick = pick_repo::upsert_pick(
        &db,
        user.id,
        game.id,
        body.selected_team_id,
        body.notes.as_deref(),
        now,
    )
    .await?;

    Ok(HttpResponse::Ok().json(PickDto::from(pick)))
}

async fn status_for(
    db: &PgPool,
    user_id: Uuid,
    week: i32,
    season: i32,
) -> ApiResult<(Vec<Pick>, PicksStatus)> {
    let games = game_repo::by_week(db, week, season).await?;
    let picks = pick_repo::for_user_week(db, user_id, week, season).await?;
    let picked: HashSet<i64> = picks.iter().map(|p| p.game_id).collect();
    let status = week_status(week, season, &games, &picked);
    Ok((picks, status))
}

/// GET /api/picks/my-picks/week/{week}/season/{season}
#[get("/picks/my-picks/week/{week}/season/{season}")]
pub async fn my_picks(
    auth: BearerAuth,
    path: web::Path<(i32, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (week, season) = path.into_inner();
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;
    let (picks, status) = status_for(&db, user.id, week, season).await?;
    Ok(HttpResponse::Ok().json(MyPicksResponse {
        picks: picks.into_iter().map(PickDto::from).collect(),
        status,
    }))
}

/// GET /api/picks/status/week/{week}/season/{season}
#[get("/picks/status/week/{week}/season/{season}")]
pub async fn pick_status(
    auth: BearerAuth,
    path: web::Path<(i32, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (week, season) = path.into_inner();
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;
    let (_, status) = status_for(&db, user.id, week, season).await?;
    Ok(HttpResponse::Ok().json(status))
}

/// GET /api/picks/league/{league_id}/week/{week}/season/{season}
///
/// Members only. Selections other than the viewer's own stay hidden until
/// each game's deadline passes; until then only `hasPick` is reported.
#[get("/picks/league/{league_id}/week/{week}/season/{season}")]
pub async fn league_picks(
    auth: BearerAuth,
    path: web::Path<(i64, i32, i32)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (league_id, week, season) = path.into_inner();
    let viewer = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;

    let league = league_repo::by_id(&db, league_id)
        .await?
        .ok_or(ApiError::NotFound("league"))?;
    if !league_repo::is_member(&db, league_id, viewer.id).await? {
        return Err(ApiError::Forbidden("not a member of this league"));
    }

    let members = league_repo::members(&db, league_id).await?;
    let games = game_repo::by_week(&db, week, season).await?;
    let picks = pick_repo::for_league_week(&db, league_id, week, season).await?;

    let by_user_game: HashMap<(Uuid, i64), &Pick> =
        picks.iter().map(|p| ((p.user_id, p.game_id), p)).collect();

    let now = Utc::now();
    let user_picks = members
        .into_iter()
        .map(|m| {
            let picks = games
                .iter()
                .map(|g| {
                    let pick = by_user_game.get(&(m.id, g.id)).copied();
                    visible_pick(pick, g, m.id, viewer.id, now)
                })
                .collect();
            UserPicks {
                user_id: m.id,
                user_name: m.display_name,
                picks,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(LeaguePicks {
        league_id,
        league_name: league.name,
        week,
        season,
        user_picks,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_pick)
        .service(my_picks)
        .service(pick_status)
        .service(league_picks);
}
