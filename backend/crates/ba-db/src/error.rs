use ba_core::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Local account not found: {account_id} {location}")]
    AccountMissing {
        account_id: i64,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Secret hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let Some(db_error) = source.as_database_error()
            && db_error.is_unique_violation()
        {
            return Self::UniqueViolation {
                message: db_error.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        match error {
            DbError::UniqueViolation { message, .. } => SyncError::account_creation_failed(message),
            DbError::AccountMissing { account_id, .. } => SyncError::account_not_found(account_id),
            other => SyncError::store(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
