#![cfg(test)]

use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode},
};
use sqlx::PgPool;
use testware::create_settings;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

use api::routes::routes;
use api::state::AppState;
use repos::Repo;

fn setup(pool: &PgPool) -> Router {
    let state = AppState {
        repo: Repo::new(pool.clone()),
        settings: create_settings(),
    };

    Router::new()
        .nest("/api", routes())
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_live_ok(pool: PgPool) {
    let app = setup(&pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/live")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_ready_ok(pool: PgPool) {
    let app = setup(&pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/ready")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_ready_not_ok(pool: PgPool) {
    let app = setup(&pool);

    pool.close().await;
    let request = Request::builder()
        .method("GET")
        .uri("/api/ready")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
