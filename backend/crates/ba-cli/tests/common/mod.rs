#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ba_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn insert_eligible_identity(pool: &SqlitePool, id: &str, name: &str, email: &str) {
    sqlx::query("INSERT INTO ba_user (id, name, email) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert identity");

    sqlx::query(
        "INSERT INTO ba_account (id, accountId, providerId, userId) VALUES (?, ?, ?, ?)",
    )
    .bind(format!("acc-{}", id))
    .bind(id)
    .bind("credential")
    .bind(id)
    .execute(pool)
    .await
    .expect("Failed to insert provider account");
}

pub async fn insert_unlinked_account(pool: &SqlitePool, login: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO local_users (user_login, user_email, user_pass, role, user_registered) \
         VALUES (?, ?, 'hash', 'subscriber', 0) RETURNING id",
    )
    .bind(login)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("Failed to insert local account")
}

pub async fn count_outbox(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mail_outbox")
        .fetch_one(pool)
        .await
        .expect("Failed to count outbox")
}
