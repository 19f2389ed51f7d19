use crate::{
    ExternalIdentity, Result as SyncErrorResult, SyncCandidate, SyncError,
    sanitize::{normalize_email, sanitize_text},
};

/// A sync request whose fields have been sanitized and checked.
///
/// Only obtainable through [`SyncRequest::validate`], so holders can rely on
/// a non-empty id and a syntactically valid email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    id: String,
    email: String,
    name: String,
}

impl SyncRequest {
    /// Sanitize raw request fields.
    ///
    /// Missing or blank `id`/`email` is `MissingParameters`; an email that
    /// is present but malformed is a `Validation` error on `email`.
    #[track_caller]
    pub fn validate(
        id: Option<&str>,
        email: Option<&str>,
        name: Option<&str>,
    ) -> SyncErrorResult<Self> {
        let id = sanitize_text(id.unwrap_or_default());
        let raw_email = email.unwrap_or_default().trim();

        if id.is_empty() || raw_email.is_empty() {
            return Err(SyncError::missing_parameters(
                "Both \"id\" and \"email\" are required.",
            ));
        }

        let email = normalize_email(raw_email).ok_or_else(|| {
            SyncError::validation(
                format!("'{}' is not a valid email address", raw_email),
                Some("email"),
            )
        })?;

        Ok(Self {
            id,
            email,
            name: sanitize_text(name.unwrap_or_default()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merge with the stored identity row; request values win when present.
    pub fn to_candidate(&self, identity: &ExternalIdentity) -> SyncCandidate {
        let name = if self.name.is_empty() {
            identity.name.clone().unwrap_or_default()
        } else {
            self.name.clone()
        };

        SyncCandidate {
            id: self.id.clone(),
            name,
            email: self.email.clone(),
        }
    }
}
