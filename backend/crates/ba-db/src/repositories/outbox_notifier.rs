//! Password-setup delivery through a mail outbox table.
//!
//! A fresh reset key replaces any outstanding one for the account. Only the
//! key's Argon2 hash is stored; the plaintext exists solely inside the queued
//! message body. A separate mailer drains `mail_outbox`.

use crate::password_hash::hash_secret_blocking;
use crate::{DbError, Result as DbErrorResult};

use ba_core::{
    LocalAccount, PasswordSetupNotifier, RandomTokenGenerator, Result as SyncErrorResult,
    TokenGenerator,
};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::info;
use sqlx::{FromRow, SqlitePool};
use url::Url;

const RESET_KEY_LENGTH: usize = 20;
const SETUP_SUBJECT: &str = "Set up your password";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OutboxMessage {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
pub struct OutboxNotifier {
    pool: SqlitePool,
    reset_url: Url,
    tokens: Arc<dyn TokenGenerator>,
}

impl OutboxNotifier {
    #[track_caller]
    pub fn new(pool: SqlitePool, password_reset_url: &str) -> DbErrorResult<Self> {
        let reset_url = Url::parse(password_reset_url).map_err(|e| DbError::Initialization {
            message: format!("Invalid password reset URL '{}': {}", password_reset_url, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            pool,
            reset_url,
            tokens: Arc::new(RandomTokenGenerator),
        })
    }

    pub fn with_token_generator(mut self, tokens: Arc<dyn TokenGenerator>) -> Self {
        self.tokens = tokens;
        self
    }

    fn reset_link(&self, key: &str, login: &str) -> Url {
        let mut link = self.reset_url.clone();
        link.query_pairs_mut()
            .append_pair("action", "rp")
            .append_pair("key", key)
            .append_pair("login", login);
        link
    }

    fn compose_body(account: &LocalAccount, link: &Url) -> String {
        let greeting = if account.display_name.is_empty() {
            account.login.as_str()
        } else {
            account.display_name.as_str()
        };

        format!(
            "Hi {},\n\n\
             An account with the username \"{}\" was created for you. \
             To choose a password, visit:\n\n{}\n\n\
             If you did not expect this message you can ignore it.\n",
            greeting, account.login, link
        )
    }

    pub async fn enqueue(&self, account: &LocalAccount) -> DbErrorResult<i64> {
        let key = self.tokens.suffix(RESET_KEY_LENGTH);
        let key_hash = hash_secret_blocking(key.clone()).await?;
        let link = self.reset_link(&key, &account.login);
        let now = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO password_resets (user_id, key_hash, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT (user_id) DO UPDATE SET
                    key_hash = excluded.key_hash,
                    created_at = excluded.created_at
            "#,
        )
        .bind(account.id)
        .bind(&key_hash)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let message_id = sqlx::query(
            r#"
                INSERT INTO mail_outbox (recipient, subject, body, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&account.email)
        .bind(SETUP_SUBJECT)
        .bind(Self::compose_body(account, &link))
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        info!(
            "Queued password setup message {} for account {}",
            message_id, account.id
        );

        Ok(message_id)
    }

    /// Messages not yet marked as sent, oldest first
    pub async fn pending(&self) -> DbErrorResult<Vec<OutboxMessage>> {
        Ok(sqlx::query_as::<_, OutboxMessage>(
            r#"
                SELECT id, recipient, subject, body
                FROM mail_outbox
                WHERE sent_at IS NULL
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn reset_key_hash(&self, account_id: i64) -> DbErrorResult<Option<String>> {
        Ok(
            sqlx::query_scalar("SELECT key_hash FROM password_resets WHERE user_id = ?")
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[async_trait]
impl PasswordSetupNotifier for OutboxNotifier {
    async fn send_password_setup(&self, account: &LocalAccount) -> SyncErrorResult<()> {
        self.enqueue(account).await?;
        Ok(())
    }
}
