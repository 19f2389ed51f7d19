use crate::ClientError;

use ba_config::ConfigError;
use ba_core::SyncError;
use ba_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("No API secret: pass --secret or set auth.api_secret {location}")]
    MissingSecret { location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CommandError {
    #[track_caller]
    pub fn missing_secret() -> Self {
        Self::MissingSecret {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
