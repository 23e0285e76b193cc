//! Wait engine: bounded polling of a condition against live element state.
//!
//! A wait is a tiny state machine. It starts in [`WaitState::Polling`] and
//! ends in either [`WaitState::Succeeded`] or [`WaitState::TimedOut`]:
//!
//! 1. take a fresh [`ElementSnapshot`] (read failures give an absent one)
//! 2. evaluate the condition; on a match, stop immediately
//! 3. if `elapsed >= timeout`, stop with the last snapshot
//! 4. otherwise sleep for the poll interval and go back to 1
//!
//! There is no attempt cap besides the timeout and no cancellation; the
//! loop itself is the only retry mechanism.

use crate::accessor::ElementAccessor;
use crate::clock::{system_clock, SharedClock};
use crate::condition::Condition;
use crate::snapshot::ElementSnapshot;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default timeout for wait operations (4 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 4_000;

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// WAIT OPTIONS
// =============================================================================

/// Timeout and poll interval for one wait. Immutable while the wait runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// =============================================================================
// WAIT STATE / OUTCOME
// =============================================================================

/// Poll loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaitState {
    /// Still evaluating
    Polling,
    /// Condition matched (terminal)
    Succeeded,
    /// Timeout elapsed without a match (terminal)
    TimedOut,
}

impl WaitState {
    /// Whether the loop has stopped
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Polling)
    }
}

/// Result of a finished wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The condition matched
    Success {
        /// Time from start until the matching evaluation
        elapsed: Duration,
        /// Number of evaluations, the matching one included
        attempts: usize,
    },
    /// The timeout elapsed first
    Failure {
        /// Snapshot from the final evaluation
        last_snapshot: ElementSnapshot,
        /// Time from start until the final evaluation
        elapsed: Duration,
        /// Number of evaluations
        attempts: usize,
    },
}

impl WaitOutcome {
    /// Terminal state this outcome corresponds to
    #[must_use]
    pub const fn state(&self) -> WaitState {
        match self {
            Self::Success { .. } => WaitState::Succeeded,
            Self::Failure { .. } => WaitState::TimedOut,
        }
    }

    /// Check if the wait succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Time spent waiting
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match self {
            Self::Success { elapsed, .. } | Self::Failure { elapsed, .. } => *elapsed,
        }
    }

    /// Number of evaluations performed
    #[must_use]
    pub const fn attempts(&self) -> usize {
        match self {
            Self::Success { attempts, .. } | Self::Failure { attempts, .. } => *attempts,
        }
    }
}

// =============================================================================
// POLLER
// =============================================================================

/// Bounded-timeout poll loop
#[derive(Debug, Clone)]
pub struct Poller {
    options: WaitOptions,
    clock: SharedClock,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(WaitOptions::default())
    }
}

impl Poller {
    /// Create a poller on the system clock
    #[must_use]
    pub fn new(options: WaitOptions) -> Self {
        Self::with_clock(options, system_clock())
    }

    /// Create a poller on a custom clock
    #[must_use]
    pub fn with_clock(options: WaitOptions, clock: SharedClock) -> Self {
        Self { options, clock }
    }

    /// Options this poller runs with
    #[must_use]
    pub const fn options(&self) -> &WaitOptions {
        &self.options
    }

    /// Clock this poller measures time with
    #[must_use]
    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Poll `condition` against `accessor` until it matches or times out.
    ///
    /// Blocks the calling thread for at most the timeout plus one poll
    /// interval and one evaluation.
    pub fn poll<A>(&self, accessor: &A, condition: &Condition) -> WaitOutcome
    where
        A: ElementAccessor + ?Sized,
    {
        let timeout = self.options.timeout();
        let interval = self.options.poll_interval();
        let attribute_names = condition.attribute_names();
        let start = self.clock.now();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let snapshot = ElementSnapshot::capture(accessor, &attribute_names);
            let matched = condition.evaluate(&snapshot);
            let elapsed = self.clock.now().saturating_sub(start);

            tracing::trace!(
                condition = %condition,
                locator = %snapshot.locator,
                attempt = attempts,
                elapsed_ms = elapsed.as_millis() as u64,
                matched,
                "poll tick"
            );

            if matched {
                tracing::debug!(
                    condition = %condition,
                    locator = %snapshot.locator,
                    attempts,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "condition matched"
                );
                return WaitOutcome::Success { elapsed, attempts };
            }

            if elapsed >= timeout {
                tracing::warn!(
                    condition = %condition,
                    locator = %snapshot.locator,
                    attempts,
                    elapsed_ms = elapsed.as_millis() as u64,
                    timeout_ms = self.options.timeout_ms,
                    "condition timed out"
                );
                return WaitOutcome::Failure {
                    last_snapshot: snapshot,
                    elapsed,
                    attempts,
                };
            }

            self.clock.sleep(interval);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::accessor::MockElement;
    use crate::clock::FakeClock;
    use crate::condition::{be, have, not};
    use std::sync::Arc;

    fn fake_poller(timeout_ms: u64, interval_ms: u64) -> (Poller, FakeClock) {
        let clock = FakeClock::new();
        let options = WaitOptions::new()
            .with_timeout(timeout_ms)
            .with_poll_interval(interval_ms);
        (Poller::with_clock(options, Arc::new(clock.clone())), clock)
    }

    mod wait_options_tests {
        use super::*;

        #[test]
        fn test_wait_options_default() {
            let opts = WaitOptions::default();
            assert_eq!(opts.timeout_ms, DEFAULT_WAIT_TIMEOUT_MS);
            assert_eq!(opts.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        }

        #[test]
        fn test_wait_options_chained() {
            let opts = WaitOptions::new()
                .with_timeout(10_000)
                .with_poll_interval(200);
            assert_eq!(opts.timeout(), Duration::from_secs(10));
            assert_eq!(opts.poll_interval(), Duration::from_millis(200));
        }
    }

    mod wait_state_tests {
        use super::*;

        #[test]
        fn test_terminal_states() {
            assert!(!WaitState::Polling.is_terminal());
            assert!(WaitState::Succeeded.is_terminal());
            assert!(WaitState::TimedOut.is_terminal());
        }

        #[test]
        fn test_outcome_state() {
            let success = WaitOutcome::Success {
                elapsed: Duration::ZERO,
                attempts: 1,
            };
            assert_eq!(success.state(), WaitState::Succeeded);
            assert!(success.is_success());

            let failure = WaitOutcome::Failure {
                last_snapshot: ElementSnapshot::absent("x"),
                elapsed: Duration::from_secs(4),
                attempts: 41,
            };
            assert_eq!(failure.state(), WaitState::TimedOut);
            assert_eq!(failure.elapsed(), Duration::from_secs(4));
            assert_eq!(failure.attempts(), 41);
        }
    }

    mod poller_tests {
        use super::*;

        #[test]
        fn test_immediate_success_does_not_sleep() {
            let (poller, clock) = fake_poller(1_000, 100);
            let element = MockElement::new("#header").with_text("Kirk");
            let outcome = poller.poll(&element, &have::text("Kirk"));
            assert_eq!(
                outcome,
                WaitOutcome::Success {
                    elapsed: Duration::ZERO,
                    attempts: 1
                }
            );
            assert_eq!(clock.now_ms(), 0);
        }

        #[test]
        fn test_timeout_reports_last_snapshot() {
            let (poller, _clock) = fake_poller(400, 100);
            let element = MockElement::new("#header").with_text("Kirk");
            match poller.poll(&element, &have::text("irk")) {
                WaitOutcome::Failure {
                    last_snapshot,
                    elapsed,
                    attempts,
                } => {
                    assert_eq!(last_snapshot.text.as_deref(), Some("Kirk"));
                    assert_eq!(elapsed, Duration::from_millis(400));
                    assert_eq!(attempts, 5);
                }
                other => panic!("expected failure, got {other:?}"),
            }
        }

        #[test]
        fn test_elapsed_reaches_timeout_with_uneven_interval() {
            let (poller, _clock) = fake_poller(250, 100);
            let element = MockElement::absent("#missing");
            let outcome = poller.poll(&element, &be::visible());
            assert!(!outcome.is_success());
            assert!(outcome.elapsed() >= Duration::from_millis(250));
            assert_eq!(outcome.attempts(), 4);
        }

        #[test]
        fn test_zero_timeout_evaluates_once() {
            let (poller, _clock) = fake_poller(0, 100);
            let element = MockElement::new("#header");
            let outcome = poller.poll(&element, &have::text("Kirk"));
            assert_eq!(outcome.attempts(), 1);
            assert_eq!(outcome.state(), WaitState::TimedOut);
        }

        #[test]
        fn test_absent_element_satisfies_negated_visibility() {
            let (poller, _clock) = fake_poller(400, 100);
            let element = MockElement::absent("#input_invisible");
            assert!(poller.poll(&element, &not(be::visible())).is_success());
        }

        #[test]
        fn test_read_failures_are_absorbed() {
            let (poller, _clock) = fake_poller(1_000, 100);
            let element = MockElement::new("#header").with_text("Kirk");
            element.fail_next_reads(3);
            let outcome = poller.poll(&element, &have::text("Kirk"));
            assert!(outcome.is_success());
            assert!(outcome.attempts() > 1);
        }

        #[test]
        fn test_negated_runs_full_timeout_while_matching() {
            let (poller, _clock) = fake_poller(300, 100);
            let element = MockElement::new("#header").with_text("Kirk");
            let outcome = poller.poll(&element, &not(have::text("Kirk")));
            match outcome {
                WaitOutcome::Failure {
                    last_snapshot,
                    elapsed,
                    ..
                } => {
                    assert_eq!(last_snapshot.text.as_deref(), Some("Kirk"));
                    assert_eq!(elapsed, Duration::from_millis(300));
                }
                other => panic!("expected failure, got {other:?}"),
            }
        }
    }

    mod integration_tests {
        use super::*;

        #[test]
        fn test_condition_becomes_true_on_real_clock() {
            let element = MockElement::absent("#late");
            let writer = element.clone();

            let handle = std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(50));
                writer.set_text("Kirk");
            });

            let poller = Poller::new(
                WaitOptions::new()
                    .with_timeout(2_000)
                    .with_poll_interval(10),
            );
            let outcome = poller.poll(&element, &have::text("Kirk"));
            handle.join().unwrap();
            assert!(outcome.is_success());
            assert!(outcome.elapsed() < Duration::from_millis(2_000));
        }

        #[test]
        fn test_real_clock_timeout_elapsed() {
            let poller = Poller::new(WaitOptions::new().with_timeout(100).with_poll_interval(10));
            let element = MockElement::absent("#missing");
            let outcome = poller.poll(&element, &be::present());
            assert!(!outcome.is_success());
            assert!(outcome.elapsed() >= Duration::from_millis(100));
        }
    }
}
