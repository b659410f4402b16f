#![allow(dead_code)]

use axum_test::TestServer;
use linkcut::api::middleware::cors;
use linkcut::application::services::LinkService;
use linkcut::infrastructure::persistence::{SqliteUrlRepository, init_schema};
use linkcut::routes::app_router;
use linkcut::state::AppState;
use linkcut::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BASE_URL: &str = "http://s.test";

/// Replays a fixed list of codes, repeating the last one once exhausted.
pub struct SequenceGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
}

impl SequenceGenerator {
    pub fn new(codes: &[&str]) -> Self {
        assert!(!codes.is_empty());
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes[i.min(self.codes.len() - 1)].clone()
    }
}

pub async fn setup_schema(pool: &SqlitePool) {
    init_schema(pool).await.unwrap();
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (short_code, long_url) VALUES (?, ?) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_link_service(
    pool: SqlitePool,
    generator: Arc<dyn CodeGenerator>,
) -> Arc<LinkService<SqliteUrlRepository>> {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(repo, generator))
}

pub async fn create_test_state_with(
    pool: SqlitePool,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    setup_schema(&pool).await;
    AppState::new(
        create_link_service(pool, generator),
        Some(BASE_URL.to_string()),
    )
}

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with(pool, Arc::new(RandomCodeGenerator::default())).await
}

/// Full application router with a permissive CORS policy.
pub async fn create_test_server(pool: SqlitePool) -> TestServer {
    let state = create_test_state(pool).await;
    TestServer::new(app_router(state, cors::layer(&[]))).unwrap()
}
