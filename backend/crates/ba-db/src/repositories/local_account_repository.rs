//! SQLite-backed host user store.
//!
//! Credentials arrive in plaintext inside [`NewLocalAccount`] and are hashed
//! with Argon2id before the insert; the plaintext is never persisted.

use crate::password_hash::hash_secret_blocking;
use crate::{DbError, Result as DbErrorResult};

use ba_core::{
    AccountDirectory, AccountRole, LocalAccount, NewLocalAccount, Result as SyncErrorResult,
};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqlitePool};

const ACCOUNT_COLUMNS: &str =
    "id, user_login, user_email, display_name, role, better_auth_user_id, user_registered";

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    user_login: String,
    user_email: String,
    display_name: String,
    role: String,
    better_auth_user_id: Option<String>,
    user_registered: i64,
}

impl TryFrom<AccountRow> for LocalAccount {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: AccountRow) -> DbErrorResult<Self> {
        let role = AccountRole::from_str(&row.role).map_err(|e| DbError::CorruptRow {
            table: "local_users",
            message: format!("Invalid role in local_users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let registered_at: DateTime<Utc> = DateTime::from_timestamp(row.user_registered, 0)
            .ok_or_else(|| DbError::CorruptRow {
                table: "local_users",
                message: "Invalid timestamp in local_users.user_registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(LocalAccount {
            id: row.id,
            login: row.user_login,
            email: row.user_email,
            display_name: row.display_name,
            role,
            link: row.better_auth_user_id,
            registered_at,
        })
    }
}

#[derive(Clone)]
pub struct LocalAccountRepository {
    pool: SqlitePool,
}

impl LocalAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<LocalAccount>> {
        let sql = format!("SELECT {} FROM local_users WHERE user_email = ?", ACCOUNT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalAccount::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<LocalAccount>> {
        let sql = format!("SELECT {} FROM local_users WHERE id = ?", ACCOUNT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalAccount::try_from).transpose()
    }

    pub async fn login_exists(&self, login: &str) -> DbErrorResult<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM local_users WHERE user_login = ?)")
                .bind(login)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists != 0)
    }

    /// Insert the account with a hashed credential. Returns the new id.
    pub async fn create(&self, account: NewLocalAccount) -> DbErrorResult<i64> {
        let NewLocalAccount {
            login,
            email,
            display_name,
            credential,
            role,
        } = account;

        let password_hash = hash_secret_blocking(credential.expose().to_string()).await?;
        drop(credential);

        let result = sqlx::query(
            r#"
                INSERT INTO local_users (
                    user_login, user_email, user_pass, display_name, role, user_registered
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&login)
        .bind(&email)
        .bind(&password_hash)
        .bind(&display_name)
        .bind(role.as_str())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted local account {} ({})", id, login);

        Ok(id)
    }

    pub async fn link_of(&self, id: i64) -> DbErrorResult<Option<String>> {
        let link: Option<Option<String>> =
            sqlx::query_scalar("SELECT better_auth_user_id FROM local_users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(link.flatten())
    }

    #[track_caller]
    fn expect_one_row(rows_affected: u64, account_id: i64) -> DbErrorResult<()> {
        if rows_affected == 0 {
            return Err(DbError::AccountMissing {
                account_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub async fn update_link(&self, id: i64, identity_id: Option<&str>) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE local_users SET better_auth_user_id = ? WHERE id = ?")
            .bind(identity_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Self::expect_one_row(result.rows_affected(), id)
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM local_users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Self::expect_one_row(result.rows_affected(), id)
    }

    pub async fn list_linked_accounts(&self) -> DbErrorResult<Vec<LocalAccount>> {
        let sql = format!(
            "SELECT {} FROM local_users \
             WHERE better_auth_user_id IS NOT NULL AND better_auth_user_id != '' \
             ORDER BY id",
            ACCOUNT_COLUMNS
        );
        let rows = sqlx::query_as::<_, AccountRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(LocalAccount::try_from).collect()
    }

    pub async fn count_linked(&self) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM local_users \
             WHERE better_auth_user_id IS NOT NULL AND better_auth_user_id != ''",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    /// Stored credential hash, for verification only
    pub async fn password_hash(&self, id: i64) -> DbErrorResult<Option<String>> {
        Ok(
            sqlx::query_scalar("SELECT user_pass FROM local_users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[async_trait]
impl AccountDirectory for LocalAccountRepository {
    async fn find_by_email(&self, email: &str) -> SyncErrorResult<Option<LocalAccount>> {
        Ok(LocalAccountRepository::find_by_email(self, email).await?)
    }

    async fn find_by_id(&self, id: i64) -> SyncErrorResult<Option<LocalAccount>> {
        Ok(LocalAccountRepository::find_by_id(self, id).await?)
    }

    async fn login_exists(&self, login: &str) -> SyncErrorResult<bool> {
        Ok(LocalAccountRepository::login_exists(self, login).await?)
    }

    async fn create_account(&self, account: NewLocalAccount) -> SyncErrorResult<i64> {
        Ok(self.create(account).await?)
    }

    async fn get_link(&self, id: i64) -> SyncErrorResult<Option<String>> {
        Ok(self.link_of(id).await?)
    }

    async fn set_link(&self, id: i64, identity_id: &str) -> SyncErrorResult<()> {
        Ok(self.update_link(id, Some(identity_id)).await?)
    }

    async fn clear_link(&self, id: i64) -> SyncErrorResult<()> {
        Ok(self.update_link(id, None).await?)
    }

    async fn delete_account(&self, id: i64) -> SyncErrorResult<()> {
        Ok(self.delete(id).await?)
    }

    async fn list_linked(&self) -> SyncErrorResult<Vec<LocalAccount>> {
        Ok(self.list_linked_accounts().await?)
    }
}
