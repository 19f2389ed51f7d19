#![allow(dead_code)]

//! Test infrastructure for ba-server API tests

use ba_config::Config;
use ba_core::{Credential, TokenGenerator};
use ba_server::{AppState, SYNC_USER_PATH};

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &str = "test-shared-secret-0123456789";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    ba_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Deployment behind a TLS-terminating proxy: transport is taken from
/// `X-Forwarded-Proto`
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.api_secret = TEST_SECRET.to_string();
    config.auth.trust_forwarded_proto = true;
    config
}

/// Fixed suffixes so collision tests can assert exact logins
pub struct FixedTokens;

impl TokenGenerator for FixedTokens {
    fn credential(&self, length: usize) -> Credential {
        Credential::new("x".repeat(length))
    }

    fn suffix(&self, _length: usize) -> String {
        "abc123".to_string()
    }
}

pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::with_token_generator(pool, &test_config(), Arc::new(FixedTokens))
}

pub async fn insert_identity(pool: &SqlitePool, id: &str, name: Option<&str>, email: &str) {
    sqlx::query("INSERT INTO ba_user (id, name, email) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert identity");
}

pub async fn insert_provider_account(pool: &SqlitePool, user_id: &str) {
    sqlx::query(
        "INSERT INTO ba_account (id, accountId, providerId, userId) VALUES (?, ?, ?, ?)",
    )
    .bind(format!("acc-{}", user_id))
    .bind(user_id)
    .bind("credential")
    .bind(user_id)
    .execute(pool)
    .await
    .expect("Failed to insert provider account");
}

pub async fn insert_eligible_identity(pool: &SqlitePool, id: &str, name: &str, email: &str) {
    insert_identity(pool, id, Some(name), email).await;
    insert_provider_account(pool, id).await;
}

pub async fn count_local_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM local_users")
        .fetch_one(pool)
        .await
        .expect("Failed to count local users")
}

/// Forwarded HTTPS sync request carrying the test secret
pub fn sync_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(SYNC_USER_PATH)
        .header("Content-Type", "application/json")
        .header("X-Forwarded-Proto", "https")
        .header("Authorization", format!("Bearer {}", TEST_SECRET))
        .body(Body::from(body.to_string()))
        .unwrap()
}
