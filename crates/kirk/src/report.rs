//! Timeout diagnostics.
//!
//! A timed-out wait becomes a [`ConditionTimeout`] whose message always has
//! the same six lines in the same order, so failures stay greppable:
//!
//! ```text
//! failed while waiting 4 seconds
//! to assert text
//! for element located {By.cssSelector: #header}
//! reason: condition did not match
//!     expected: []irk
//!     actual: [K]irk
//! ```

use crate::condition::{Condition, Description, Expected};
use crate::diff::bracket_diff;
use crate::result::{KirkError, KirkResult};
use crate::snapshot::ElementSnapshot;
use crate::wait::{WaitOptions, WaitOutcome};
use std::fmt;
use std::time::Duration;

/// A condition that did not match before its wait timed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionTimeout {
    /// Configured timeout
    pub timeout: Duration,
    /// What was asserted
    pub condition: Description,
    /// Where the element was looked for
    pub locator: String,
    /// Rendered expected value (bracketed when diffed)
    pub expected: String,
    /// Rendered actual value from the last snapshot (bracketed when diffed)
    pub actual: String,
    /// Time actually spent waiting
    pub elapsed: Duration,
    /// Number of evaluations performed
    pub attempts: usize,
}

impl ConditionTimeout {
    /// Build the diagnostic for `condition` from the last snapshot of a wait
    #[must_use]
    pub fn new(
        condition: &Condition,
        options: &WaitOptions,
        last_snapshot: &ElementSnapshot,
        elapsed: Duration,
        attempts: usize,
    ) -> Self {
        let description = condition.describe();
        let actual = condition.actual(last_snapshot);
        let (expected, actual) = if last_snapshot.present {
            render_values(condition, &description.expected, &actual)
        } else {
            (description.expected.to_string(), actual.to_string())
        };

        Self {
            timeout: options.timeout(),
            locator: last_snapshot.locator.clone(),
            condition: description,
            expected,
            actual,
            elapsed,
            attempts,
        }
    }

    /// The fixed-format, multi-line failure message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConditionTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "failed while waiting {} seconds",
            format_seconds(self.timeout)
        )?;
        writeln!(f, "to assert {}", self.condition.kind)?;
        writeln!(f, "for element located {{{}}}", self.locator)?;
        writeln!(f, "reason: condition did not match")?;
        writeln!(f, "    {}: {}", self.condition.expected_label(), self.expected)?;
        write!(f, "    actual: {}", self.actual)
    }
}

impl std::error::Error for ConditionTimeout {}

/// Turn a finished wait into a result, building the diagnostic on timeout.
///
/// Returns the elapsed time on success.
///
/// # Errors
///
/// Returns [`KirkError::ConditionTimeout`] if the wait timed out.
pub fn report(
    condition: &Condition,
    options: &WaitOptions,
    outcome: WaitOutcome,
) -> KirkResult<Duration> {
    match outcome {
        WaitOutcome::Success { elapsed, .. } => Ok(elapsed),
        WaitOutcome::Failure {
            last_snapshot,
            elapsed,
            attempts,
        } => Err(KirkError::from(ConditionTimeout::new(
            condition,
            options,
            &last_snapshot,
            elapsed,
            attempts,
        ))),
    }
}

/// Bracket-diff plain string mismatches; render everything else as-is
fn render_values(
    condition: &Condition,
    expected: &Expected,
    actual: &Expected,
) -> (String, String) {
    if !condition.is_negated() && condition.compares_text() {
        if let (Some(e), Some(a)) = (expected.as_value(), actual.as_value()) {
            if e != a {
                let diff = bracket_diff(e, a);
                return (diff.expected, diff.actual);
            }
        }
    }
    (expected.to_string(), actual.to_string())
}

/// Whole seconds print without a fractional part ("4"), others as-is ("0.25")
fn format_seconds(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64())
}
