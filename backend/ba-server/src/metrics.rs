use ba_core::SyncAction;

use std::time::Duration;

use metrics::{counter, histogram};

/// Counters for the sync endpoint.
#[derive(Clone)]
pub struct SyncMetrics {
    prefix: &'static str,
}

impl SyncMetrics {
    pub fn new() -> Self {
        Self { prefix: "ba_server" }
    }

    /// Record a completed sync and how long it took
    pub fn sync_completed(&self, action: SyncAction, duration: Duration) {
        counter!(format!("{}.sync.completed", self.prefix)).increment(1);
        counter!(format!("{}.sync.{}", self.prefix, action.as_str())).increment(1);
        histogram!(format!("{}.sync.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }

    /// Record a request rejected at the gate or by the rate limiter
    pub fn request_denied(&self, code: &str) {
        counter!(format!("{}.sync.denied", self.prefix)).increment(1);
        counter!(format!("{}.sync.denied.{}", self.prefix, code)).increment(1);
    }

    pub fn sync_failed(&self, code: &str) {
        counter!(format!("{}.sync.failed", self.prefix)).increment(1);
        counter!(format!("{}.sync.failed.{}", self.prefix, code)).increment(1);
    }
}

impl Default for SyncMetrics {
    fn default() -> Self {
        Self::new()
    }
}
