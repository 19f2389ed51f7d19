use crate::Credential;

use rand::Rng;
use rand::distr::Alphanumeric;

const CREDENTIAL_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Source of random credentials and login suffixes.
pub trait TokenGenerator: Send + Sync {
    fn credential(&self, length: usize) -> Credential;

    /// Alphanumeric string used to break login collisions
    fn suffix(&self, length: usize) -> String;
}

/// Thread-local RNG backed generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn credential(&self, length: usize) -> Credential {
        let mut rng = rand::rng();
        let value = (0..length)
            .map(|_| CREDENTIAL_CHARSET[rng.random_range(0..CREDENTIAL_CHARSET.len())] as char)
            .collect();
        Credential::new(value)
    }

    fn suffix(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
