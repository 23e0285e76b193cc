//! Log output for test runs.
//!
//! Kirk only emits `tracing` events; nothing is printed unless a subscriber
//! is installed. [`init_test_logging`] installs one that writes through the
//! test harness's captured output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (env-filter syntax)
pub const ENV_LOG: &str = "KIRK_LOG";

/// Filter used when `KIRK_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a compact fmt subscriber filtered by `KIRK_LOG`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes. Safe to call from every test.
pub fn init_test_logging() -> bool {
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init_test_logging();
        assert!(!init_test_logging());
    }
}
