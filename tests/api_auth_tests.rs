//! Bearer-auth rejection at the HTTP boundary. Uses a lazy pool, so no
//! live database is needed: requests fail at the extractor.

use actix_web::{http::StatusCode, test, web, App};
use pickem_server::http;
use sqlx::postgres::PgPoolOptions;

fn lazy_pool() -> sqlx::PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/pickem")
        .expect("lazy pool")
}

#[actix_rt::test]
async fn pick_submission_without_token_is_401() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(lazy_pool()))
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/picks")
        .set_json(serde_json::json!({ "gameId": 1, "selectedTeamId": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn garbage_bearer_token_is_401() {
    std::env::set_var("JWT_SECRET", "test-secret");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(lazy_pool()))
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/picks/status/week/1/season/2025")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn non_bearer_authorization_header_is_401() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(lazy_pool()))
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
