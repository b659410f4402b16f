mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkcut::api::handlers::redirect_handler;
use linkcut::state::AppState;
use sqlx::SqlitePool;

fn redirect_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test(migrations = false)]
async fn test_redirect_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "redir1", "https://example.com/target").await;
    let server = redirect_server(state);

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test(migrations = false)]
async fn test_redirect_records_click(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "clickme", "https://example.com").await;
    let server = redirect_server(state);

    assert_eq!(server.get("/clickme").await.status_code(), 307);
    assert_eq!(common::clicks_for(&pool, "clickme").await, 1);

    assert_eq!(server.get("/clickme").await.status_code(), 307);
    assert_eq!(common::clicks_for(&pool, "clickme").await, 2);
}

#[sqlx::test(migrations = false)]
async fn test_redirect_only_counts_target_code(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "first1", "https://example.com/1").await;
    common::create_test_mapping(&pool, "second", "https://example.com/2").await;
    let server = redirect_server(state);

    server.get("/first1").await;

    assert_eq!(common::clicks_for(&pool, "first1").await, 1);
    assert_eq!(common::clicks_for(&pool, "second").await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_redirect_unusable_target_is_not_counted(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "broken", "https://example.com/a\nb").await;
    let server = redirect_server(state);

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(common::clicks_for(&pool, "broken").await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_redirect_encodes_non_ascii_target(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "accent", "https://example.com/café").await;
    let server = redirect_server(state);

    let response = server.get("/accent").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
    assert_eq!(common::clicks_for(&pool, "accent").await, 1);
}

#[sqlx::test(migrations = false)]
async fn test_redirect_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let server = redirect_server(state);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test(migrations = false)]
async fn test_redirect_is_case_sensitive(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_mapping(&pool, "AbCdEf", "https://example.com").await;
    let server = redirect_server(state);

    server.get("/abcdef").await.assert_status_not_found();
    assert_eq!(server.get("/AbCdEf").await.status_code(), 307);
}
