mod common;

use axum::http::{HeaderValue, Method, header};
use axum_test::TestServer;
use linkcut::api::middleware::cors;
use linkcut::routes::app_router;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn test_shorten_redirect_stats_flow(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone()).await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a/b" }))
        .await;

    response.assert_status_ok();

    let created = response.json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert_eq!(created["long_url"], "https://example.com/a/b");

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://example.com/a/b");

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(stats["short_code"], code.as_str());
    assert_eq!(stats["long_url"], "https://example.com/a/b");
    assert_eq!(stats["clicks"], 1);
}

#[sqlx::test(migrations = false)]
async fn test_control_character_url_never_gets_a_code(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone()).await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    assert_eq!(response.status_code(), 422);
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_clicks_match_redirect_count(pool: SqlitePool) {
    let server = common::create_test_server(pool).await;

    let code = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/counted" }))
        .await
        .json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    for _ in 0..5 {
        assert_eq!(server.get(&format!("/{code}")).await.status_code(), 307);
    }

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["clicks"], 5);
}

#[sqlx::test(migrations = false)]
async fn test_fixed_routes_win_over_code_route(pool: SqlitePool) {
    let server = common::create_test_server(pool).await;

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_json(&json!({ "status": "ok" }));

    assert_eq!(server.get("/shorten").await.status_code(), 405);
    server.get("/stats/unknown").await.assert_status_not_found();
    server.get("/unknown").await.assert_status_not_found();
}

#[sqlx::test(migrations = false)]
async fn test_cors_preflight_is_permissive(pool: SqlitePool) {
    let server = common::create_test_server(pool).await;

    let response = server
        .method(Method::OPTIONS, "/shorten")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://app.example"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type"),
        )
        .await;

    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://app.example"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "POST"
    );
}

#[sqlx::test(migrations = false)]
async fn test_cors_origin_list_restricts(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let allowed = vec!["https://allowed.example".to_string()];
    let server = TestServer::new(app_router(state, cors::layer(&allowed))).unwrap();

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://allowed.example"))
        .await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://allowed.example"
    );

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
