//! Element handles: the `should` / `should_not` entry points.
//!
//! ```
//! use kirk::{be, have, Element, KirkConfig, MockElement};
//!
//! let header = Element::with_config(
//!     MockElement::new("#header").with_text("Kirk"),
//!     KirkConfig::new().with_timeout(200).with_poll_interval(10),
//! );
//! header.should(have::text("Kirk"))?.should(be::visible())?;
//!
//! let err = header.should_not(have::text("Kirk")).unwrap_err();
//! assert!(err.to_string().contains("expected not: Kirk"));
//! # Ok::<(), kirk::KirkError>(())
//! ```

use crate::accessor::ElementAccessor;
use crate::clock::{system_clock, SharedClock};
use crate::condition::{not, Condition};
use crate::config::KirkConfig;
use crate::report::report;
use crate::result::KirkResult;
use crate::snapshot::ElementSnapshot;
use crate::wait::{Poller, WaitOptions};

/// A located element (or collection) that conditions are asserted against
#[derive(Debug, Clone)]
pub struct Element<A> {
    accessor: A,
    config: KirkConfig,
    clock: SharedClock,
}

impl<A: ElementAccessor> Element<A> {
    /// Wrap an accessor with default wait settings
    #[must_use]
    pub fn new(accessor: A) -> Self {
        Self::with_config(accessor, KirkConfig::default())
    }

    /// Wrap an accessor with explicit wait settings
    #[must_use]
    pub fn with_config(accessor: A, config: KirkConfig) -> Self {
        Self {
            accessor,
            config,
            clock: system_clock(),
        }
    }

    /// Measure waits with a different clock
    #[must_use]
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Underlying accessor
    #[must_use]
    pub const fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Wait settings used when no per-call override is given
    #[must_use]
    pub const fn config(&self) -> &KirkConfig {
        &self.config
    }

    /// Read the element's current state once, without waiting
    #[must_use]
    pub fn snapshot(&self) -> ElementSnapshot {
        ElementSnapshot::capture(&self.accessor, &[])
    }

    /// Wait until `condition` holds, using the element's settings
    ///
    /// # Errors
    ///
    /// Returns [`KirkError::ConditionTimeout`](crate::KirkError::ConditionTimeout)
    /// if the condition does not hold before the timeout
    pub fn should(&self, condition: Condition) -> KirkResult<&Self> {
        self.should_with(condition, self.config.wait_options())
    }

    /// Wait until `condition` does not hold
    ///
    /// # Errors
    ///
    /// Returns [`KirkError::ConditionTimeout`](crate::KirkError::ConditionTimeout)
    /// if the condition still holds when the timeout elapses
    pub fn should_not(&self, condition: Condition) -> KirkResult<&Self> {
        self.should(not(condition))
    }

    /// [`Element::should`] with per-call wait options
    ///
    /// # Errors
    ///
    /// Returns [`KirkError::ConditionTimeout`](crate::KirkError::ConditionTimeout)
    /// if the condition does not hold before the timeout
    pub fn should_with(
        &self,
        condition: Condition,
        options: WaitOptions,
    ) -> KirkResult<&Self> {
        let poller = Poller::with_clock(options, self.clock.clone());
        let outcome = poller.poll(&self.accessor, &condition);
        let _ = report(&condition, &options, outcome)?;
        Ok(self)
    }

    /// [`Element::should_not`] with per-call wait options
    ///
    /// # Errors
    ///
    /// Returns [`KirkError::ConditionTimeout`](crate::KirkError::ConditionTimeout)
    /// if the condition still holds when the timeout elapses
    pub fn should_not_with(
        &self,
        condition: Condition,
        options: WaitOptions,
    ) -> KirkResult<&Self> {
        self.should_with(not(condition), options)
    }
}
