use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coarse classification used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncErrorKind {
    Validation,
    NotFound,
    Precondition,
    Store,
}

impl SyncErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Precondition => "precondition",
            Self::Store => "store",
        }
    }
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Missing required parameters: {message} {location}")]
    MissingParameters {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("External identity not found: {identity_id} {location}")]
    IdentityNotFound {
        identity_id: String,
        location: ErrorLocation,
    },

    #[error("External identity {identity_id} has no linked provider account {location}")]
    NoLinkedAccount {
        identity_id: String,
        location: ErrorLocation,
    },

    #[error("Local account not found: {account_id} {location}")]
    AccountNotFound {
        account_id: i64,
        location: ErrorLocation,
    },

    #[error("Local account {account_id} is not linked to an external identity {location}")]
    NotLinked {
        account_id: i64,
        location: ErrorLocation,
    },

    #[error("Local account creation failed: {reason} {location}")]
    AccountCreationFailed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn missing_parameters<S: Into<String>>(message: S) -> Self {
        Self::MissingParameters {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_not_found(identity_id: &str) -> Self {
        Self::IdentityNotFound {
            identity_id: identity_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_linked_account(identity_id: &str) -> Self {
        Self::NoLinkedAccount {
            identity_id: identity_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_not_found(account_id: i64) -> Self {
        Self::AccountNotFound {
            account_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_linked(account_id: i64) -> Self {
        Self::NotLinked {
            account_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_creation_failed<S: Into<String>>(reason: S) -> Self {
        Self::AccountCreationFailed {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> SyncErrorKind {
        match self {
            Self::MissingParameters { .. } | Self::Validation { .. } => SyncErrorKind::Validation,
            Self::IdentityNotFound { .. } | Self::AccountNotFound { .. } => SyncErrorKind::NotFound,
            Self::NoLinkedAccount { .. } | Self::NotLinked { .. } => SyncErrorKind::Precondition,
            Self::AccountCreationFailed { .. } | Self::StoreUnavailable { .. } => {
                SyncErrorKind::Store
            }
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameters { .. } => "MISSING_PARAMETERS",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::IdentityNotFound { .. } => "IDENTITY_NOT_FOUND",
            Self::NoLinkedAccount { .. } => "NO_LINKED_ACCOUNT",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::NotLinked { .. } => "NOT_LINKED",
            Self::AccountCreationFailed { .. } => "ACCOUNT_CREATION_FAILED",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
        }
    }

    /// Client-facing message. Store failures are reduced to a generic line;
    /// the detail stays in the server log.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingParameters { message, .. } | Self::Validation { message, .. } => {
                message.clone()
            }
            Self::IdentityNotFound { .. } => {
                "No Better Auth user found with the provided ID.".to_string()
            }
            Self::NoLinkedAccount { .. } => "The Better Auth user has no account records. \
                 A linked account is required before syncing."
                .to_string(),
            Self::AccountNotFound { .. } => "User not found.".to_string(),
            Self::NotLinked { .. } => {
                "This user is not linked to a Better Auth account.".to_string()
            }
            Self::AccountCreationFailed { .. } => {
                "The local user account could not be created.".to_string()
            }
            Self::StoreUnavailable { .. } => "The user store is unavailable.".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, SyncError>;
