pub mod bearer_token;
pub mod error;
pub mod rate_limit_config;
pub mod secret_verifier;
pub mod sync_rate_limiter;
pub mod transport;

pub use bearer_token::parse_bearer;
pub use error::{AuthError, Result};
pub use rate_limit_config::RateLimitConfig;
pub use secret_verifier::{SecretVerifier, SecretVerifierConfig};
pub use sync_rate_limiter::SyncRateLimiter;
pub use transport::Transport;
