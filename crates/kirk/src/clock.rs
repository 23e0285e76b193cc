//! Time sources for the poll loop.
//!
//! [`SystemClock`] is what real waits use. [`FakeClock`] never blocks: its
//! `sleep` advances the clock instead, so timeout behaviour can be tested
//! deterministically and instantly.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source with a sleep primitive
pub trait Clock: Debug + Send + Sync {
    /// Monotonic time since an arbitrary, fixed origin
    fn now(&self) -> Duration;

    /// Block (or pretend to block) for `duration`
    fn sleep(&self, duration: Duration);
}

/// Thread-safe clock handle
pub type SharedClock = Arc<dyn Clock>;

/// Real time, backed by [`Instant`] and [`std::thread::sleep`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Fake clock for deterministic testing
///
/// Time only moves when [`Clock::sleep`] or [`FakeClock::fast_forward`]
/// is called. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    current_ms: Arc<AtomicU64>,
}

impl FakeClock {
    /// Create a fake clock at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fake time in milliseconds
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    /// Fast-forward time by duration
    pub fn fast_forward(&self, duration: Duration) {
        let _ = self
            .current_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    /// Fast-forward time by milliseconds
    pub fn fast_forward_ms(&self, ms: u64) {
        self.fast_forward(Duration::from_millis(ms));
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms())
    }

    fn sleep(&self, duration: Duration) {
        self.fast_forward(duration);
    }
}

/// Shared handle to a fresh [`SystemClock`]
#[must_use]
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_clock_starts_at_zero() {
        let clock = FakeClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_fake_clock_sleep_advances() {
        let clock = FakeClock::new();
        clock.sleep(Duration::from_millis(250));
        clock.sleep(Duration::from_millis(250));
        assert_eq!(clock.now_ms(), 500);
    }

    #[test]
    fn test_fake_clock_clones_share_time() {
        let clock = FakeClock::new();
        let other = clock.clone();
        other.fast_forward_ms(1_000);
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        clock.sleep(Duration::from_millis(5));
        assert!(clock.now() >= first + Duration::from_millis(5));
    }

    #[test]
    fn test_shared_clock_object() {
        let clock: SharedClock = Arc::new(FakeClock::new());
        clock.sleep(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));
    }
}
