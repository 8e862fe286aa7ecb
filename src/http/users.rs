//! Caller profile, resolved from the bearer token's subject.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_repo;
use crate::error::ApiResult;
use crate::http::auth::BearerAuth;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub display_name: String,
    pub role: String,
    pub league_id: Option<i64>,
    pub timezone: String,
}

#[get("/me")]
pub async fn me(auth: BearerAuth, db: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    let user = user_repo::resolve_external(&db, &auth.subject, auth.name_or_subject()).await?;
    Ok(HttpResponse::Ok().json(UserDto {
        id: user.id,
        display_name: user.display_name,
        role: user.role,
        league_id: user.league_id,
        timezone: user.timezone,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(me);
}
