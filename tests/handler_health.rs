mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkcut::api::handlers::health_handler;
use sqlx::SqlitePool;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new().route("/health", get(health_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[sqlx::test(migrations = false)]
async fn test_health_through_app_router(pool: SqlitePool) {
    let server = common::create_test_server(pool).await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
}
