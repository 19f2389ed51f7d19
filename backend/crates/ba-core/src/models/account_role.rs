use crate::{Result as SyncErrorResult, SyncError};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role assigned to a local account.
///
/// Synced accounts always receive the configured default, which is the
/// minimal-privilege `Subscriber` unless an operator overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    #[default]
    Subscriber,
    Contributor,
    Author,
    Editor,
    Administrator,
}

impl AccountRole {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subscriber => "subscriber",
            Self::Contributor => "contributor",
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Administrator => "administrator",
        }
    }
}

impl FromStr for AccountRole {
    type Err = SyncError;

    #[track_caller]
    fn from_str(s: &str) -> SyncErrorResult<Self> {
        match s {
            "subscriber" => Ok(Self::Subscriber),
            "contributor" => Ok(Self::Contributor),
            "author" => Ok(Self::Author),
            "editor" => Ok(Self::Editor),
            "administrator" => Ok(Self::Administrator),
            _ => Err(SyncError::validation(
                format!("Unknown account role '{}'", s),
                Some("role"),
            )),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
