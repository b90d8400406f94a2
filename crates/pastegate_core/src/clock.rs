//! Time source used for expiry decisions.
//!
//! All instants handled by the gate are truncated to millisecond precision so
//! that persisted timestamps, wire timestamps, and test overrides compare
//! exactly.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Provides the current instant.
pub trait Clock: Send + Sync {
    /// Current time at millisecond precision.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(Utc::now())
    }
}

/// Manually driven clock for deterministic tests.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Create a clock pinned at `now` (truncated to milliseconds).
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(now.timestamp_millis()),
        }
    }

    /// Pin the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        self.millis.store(now.timestamp_millis(), Ordering::SeqCst);
    }

    /// Move the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        // Out-of-range values cannot be stored through `new`/`set`; only an
        // absurd `advance_millis` gets here.
        from_unix_millis(self.millis.load(Ordering::SeqCst)).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Convert unix milliseconds into an instant.
///
/// # Returns
/// `None` when `millis` is outside chrono's representable range.
pub fn from_unix_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Drop sub-millisecond precision from `instant`.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    from_unix_millis(instant.timestamp_millis()).unwrap_or(instant)
}
