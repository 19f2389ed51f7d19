use crate::Result as DbErrorResult;

use ba_core::{ExternalIdentity, IdentityStore, Result as SyncErrorResult};

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct IdentityRow {
    id: String,
    name: Option<String>,
    email: String,
}

impl From<IdentityRow> for ExternalIdentity {
    fn from(row: IdentityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Read-only view of the provider's `ba_user` and `ba_account` tables.
#[derive(Clone)]
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<ExternalIdentity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT id, name, email
                FROM ba_user
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ExternalIdentity::from))
    }

    pub async fn count_accounts(&self, user_id: &str) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ba_account WHERE userId = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    pub async fn list(&self) -> DbErrorResult<Vec<ExternalIdentity>> {
        let rows = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT id, name, email
                FROM ba_user
                ORDER BY createdAt, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExternalIdentity::from).collect())
    }

    pub async fn count(&self) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ba_user")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_identity(&self, id: &str) -> SyncErrorResult<Option<ExternalIdentity>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn count_linked_accounts(&self, id: &str) -> SyncErrorResult<u64> {
        Ok(self.count_accounts(id).await?)
    }

    async fn list_identities(&self) -> SyncErrorResult<Vec<ExternalIdentity>> {
        Ok(self.list().await?)
    }

    async fn count_identities(&self) -> SyncErrorResult<u64> {
        Ok(self.count().await?)
    }
}
