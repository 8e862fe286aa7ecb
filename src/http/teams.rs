//! Team catalogue reads, served from the warm cache.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

use crate::cache;
use crate::db::models::Team;
use crate::db::team_repo;
use crate::error::{ApiError, ApiResult};
use crate::pickem::types::{Conference, Division};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub tertiary_color: Option<String>,
}

impl From<Team> for TeamDto {
    fn from(t: Team) -> Self {
        TeamDto {
            id: t.id,
            name: t.name,
            city: t.city,
            abbreviation: t.abbreviation,
            conference: t.conference,
            division: t.division,
            icon_url: t.icon_url,
            banner_url: t.banner_url,
            primary_color: t.primary_color,
            secondary_color: t.secondary_color,
            tertiary_color: t.tertiary_color,
        }
    }
}

/// Catalogue ordering: conference, division, city.
fn sort_catalogue(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        (&a.conference, &a.division, &a.city).cmp(&(&b.conference, &b.division, &b.city))
    });
}

#[get("/teams")]
pub async fn list_teams(db: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    // Use in-memory cache if warmed; otherwise fall back to DB
    let mut teams = cache::all_teams();
    if teams.is_empty() {
        teams = team_repo::list_all(&db).await?;
    }
    sort_catalogue(&mut teams);
    Ok(HttpResponse::Ok().json(teams.into_iter().map(TeamDto::from).collect::<Vec<_>>()))
}

#[get("/teams/{id}")]
pub async fn get_team(path: web::Path<i32>, db: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let team = match cache::get_team(id) {
        Some(t) => Some(t),
        None => team_repo::by_id(&db, id).await?,
    };
    match team {
        Some(t) => Ok(HttpResponse::Ok().json(TeamDto::from(t))),
        None => Err(ApiError::NotFound("team")),
    }
}

#[get("/teams/{conference}/{division}")]
pub async fn teams_by_division(
    path: web::Path<(String, String)>,
    db: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let (conf_raw, div_raw) = path.into_inner();
    let conference: Conference = conf_raw.parse().map_err(ApiError::Validation)?;
    let division: Division = div_raw.parse().map_err(ApiError::Validation)?;

    let mut teams = cache::all_teams();
    if teams.is_empty() {
        teams = team_repo::list_all(&db).await?;
    }
    teams.retain(|t| t.conference == conference.as_str() && t.division == division.as_str());
    sort_catalogue(&mut teams);
    Ok(HttpResponse::Ok().json(teams.into_iter().map(TeamDto::from).collect::<Vec<_>>()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_teams)
        .service(get_team)
        .service(teams_by_division);
}
