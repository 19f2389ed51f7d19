//! Argon2id hashing for generated credentials and reset keys.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use error_location::ErrorLocation;

/// Hash a secret into a PHC string. CPU-bound; call from a blocking task.
#[track_caller]
pub fn hash_secret(secret: &str) -> DbErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check a secret against a stored PHC string. Malformed hashes never match.
pub fn verify_secret(secret: &str, phc: &str) -> bool {
    PasswordHash::new(phc)
        .map(|parsed| {
            Argon2::default()
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Run [`hash_secret`] on the blocking pool.
pub(crate) async fn hash_secret_blocking(secret: String) -> DbErrorResult<String> {
    tokio::task::spawn_blocking(move || hash_secret(&secret))
        .await
        .map_err(|e| DbError::Hashing {
            message: format!("Hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
}
