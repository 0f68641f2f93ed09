//! Telemetry switches read by the request middleware.

use std::{
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::Duration,
};

use crate::config::telemetry::TelemetryConfig;

static SLOW_REQUEST_MS: AtomicU64 = AtomicU64::new(1_000);
static PROPAGATE_PARENT: AtomicBool = AtomicBool::new(false);

pub(super) fn apply(config: &TelemetryConfig) {
    SLOW_REQUEST_MS.store(config.slow_request_threshold_ms, Ordering::Relaxed);
    PROPAGATE_PARENT.store(config.propagates_parent(), Ordering::Relaxed);
}

/// Threshold above which a request counts as slow, in milliseconds.
pub(super) fn slow_request_ms() -> u64 {
    SLOW_REQUEST_MS.load(Ordering::Relaxed)
}

pub(super) fn is_slow(elapsed: Duration) -> bool {
    elapsed.as_millis() > u128::from(slow_request_ms())
}

pub(super) fn propagates_parent() -> bool {
    PROPAGATE_PARENT.load(Ordering::Relaxed)
}
