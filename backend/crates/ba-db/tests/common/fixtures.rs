use ba_core::{AccountRole, Credential, NewLocalAccount};

use sqlx::SqlitePool;

/// Insert a provider identity row (`ba_user`)
pub async fn insert_identity(pool: &SqlitePool, id: &str, name: Option<&str>, email: &str) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO ba_user (id, name, email) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert identity");
}

/// Attach a provider account (`ba_account`) to an identity
pub async fn insert_provider_account(pool: &SqlitePool, user_id: &str, provider: &str) {
    sqlx::query(
        "INSERT INTO ba_account (id, accountId, providerId, userId) VALUES (?, ?, ?, ?)",
    )
    .bind(format!("acc-{}-{}", user_id, provider))
    .bind(user_id)
    .bind(provider)
    .bind(user_id)
    .execute(pool)
    .await
    .expect("Failed to insert provider account");
}

pub fn new_account(login: &str, email: &str) -> NewLocalAccount {
    NewLocalAccount {
        login: login.to_string(),
        email: email.to_string(),
        display_name: login.to_string(),
        credential: Credential::new("s3cret-Credential!".to_string()),
        role: AccountRole::Subscriber,
    }
}
