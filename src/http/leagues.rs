//! League lifecycle: create, join, inspect.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{league_repo, user_repo};
use crate::error::{ApiError, ApiResult};
use crate::http::auth::BearerAuth;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub user_id: Uuid,
    pub display_name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: i64,
    pub name: String,
    pub admin_user_id: Option<Uuid>,
    pub members: Vec<MemberDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueRequest {
    pub name: String,
}

async fn league_dto(db: &PgPool, league_id: i64) -> ApiResult<LeagueDto> {
    let league = league_repo::by_id(db, league_id)
        .await?
        .ok_or(ApiError::NotFound("league"))?;
    let members = league_repo::members(db, league_id)
        .await?
        .into_iter()
        .map(|u| MemberDto {
            user_id: u.id,
            display_name: u.display_name,
            role: u.role,
        })
        .collect();
    Ok(LeagueDto {
        id: league.id,
        name: league.name,
        admin_user_id: league.admin_user_id,
        members,
    })
}

#[get("/leagues/{id}")]
pub async fn get_league(path: web::Path<i64>, db: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(league_dto(&db, path.into_inner()).await?))
}

/// POST /api/leagues — the caller becomes admin and first member.
#[post("/leagues")]
pub async fn create_league(
    auth: BearerAuth,
    body: web::Json<CreateLeagueRequest>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("league name must not be empty".into()));
    }
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;
    let league = league_repo::create(&db, name, user.id).await?;
    Ok(HttpResponse::Ok().json(league_dto(&db, league.id).await?))
}

/// POST /api/leagues/{id}/join — a user belongs to at most one league.
#[post("/leagues/{id}/join")]
pub async fn join_league(
    auth: BearerAuth,
    path: web::Path<i64>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let league_id = path.into_inner();
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;

    if league_repo::by_id(&db, league_id).await?.is_none() {
        return Err(ApiError::NotFound("league"));
    }
    user_repo::set_league(&db, user.id, league_id).await?;
    Ok(HttpResponse::Ok().json(league_dto(&db, league_id).await?))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_league)
        .service(create_league)
        .service(join_league);
}
