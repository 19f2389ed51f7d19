use crate::Result as DbErrorResult;

use log::{info, warn};
use sqlx::SqlitePool;

/// Provider tables, in creation order
pub const IDENTITY_TABLES: [&str; 4] = ["ba_user", "ba_session", "ba_account", "ba_verification"];

const IDENTITY_SCHEMA: &str =
    include_str!("../../migrations/20260101000001_create_identity_tables.sql");

/// Inspection and teardown of the provider tables.
#[derive(Clone)]
pub struct SchemaInspector {
    pool: SqlitePool,
}

impl SchemaInspector {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn missing_identity_tables(&self) -> DbErrorResult<Vec<&'static str>> {
        let mut missing = Vec::new();

        for table in IDENTITY_TABLES {
            let exists: i64 = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
            )
            .bind(table)
            .fetch_one(&self.pool)
            .await?;

            if exists == 0 {
                missing.push(table);
            }
        }

        Ok(missing)
    }

    /// Recreate any dropped provider table. Existing tables are untouched.
    pub async fn ensure_identity_tables(&self) -> DbErrorResult<()> {
        let missing = self.missing_identity_tables().await?;
        if missing.is_empty() {
            return Ok(());
        }

        warn!("Recreating missing identity tables: {}", missing.join(", "));
        sqlx::raw_sql(IDENTITY_SCHEMA).execute(&self.pool).await?;

        Ok(())
    }

    /// Drop the provider tables, dependents first.
    pub async fn drop_identity_tables(&self) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for table in IDENTITY_TABLES.iter().rev() {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        info!("Dropped identity tables");

        Ok(())
    }
}
