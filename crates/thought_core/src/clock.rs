//! Timestamp sources for submission time capture.
//!
//! # Invariants
//! - Timestamps are Unix epoch milliseconds.
//! - The store never reads the system clock directly; it asks a `Clock`.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Deterministic clock whose value only changes when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(start_epoch_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(start_epoch_ms),
        }
    }

    pub fn set(&self, epoch_ms: i64) {
        self.now_ms.store(epoch_ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta_ms` and returns the new value.
    pub fn advance(&self, delta_ms: i64) -> i64 {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst) + delta_ms
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_epoch_ms(&self) -> i64 {
        (**self).now_epoch_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};
    use std::sync::Arc;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn manual_clock_only_moves_when_told() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_epoch_ms(), 1_000);
        assert_eq!(clock.now_epoch_ms(), 1_000);

        assert_eq!(clock.advance(250), 1_250);
        clock.set(42);
        assert_eq!(clock.now_epoch_ms(), 42);
    }

    #[test]
    fn arc_clock_delegates_to_inner() {
        let clock = Arc::new(ManualClock::new(7));
        let shared = Arc::clone(&clock);
        clock.advance(3);
        assert_eq!(shared.now_epoch_ms(), 10);
    }
}
