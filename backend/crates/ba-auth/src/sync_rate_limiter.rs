use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Process-wide limiter for the sync endpoint.
///
/// Allows a burst of `max_requests` and replenishes evenly across the window.
pub struct SyncRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: RateLimitConfig,
}

impl SyncRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            config,
        }
    }

    /// Check if request is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self) -> AuthErrorResult<()> {
        self.limiter
            .check()
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

impl Default for SyncRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
