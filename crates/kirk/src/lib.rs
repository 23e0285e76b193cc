//! Kirk: fluent, auto-waiting element conditions
//!
//! Kirk turns "the element should have text X" into a bounded wait with a
//! precise failure message. UI elements render asynchronously, so a single
//! check is racy; Kirk re-reads the element on every tick until the
//! condition matches or the timeout elapses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      KIRK Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Element    │    │ Poller     │    │ Element    │            │
//! │   │ .should()  │───►│ (wait      │───►│ Accessor   │            │
//! │   │            │    │  loop)     │    │ (driver)   │            │
//! │   └────────────┘    └─────┬──────┘    └────────────┘            │
//! │                           │ timeout                             │
//! │                     ┌─────▼──────┐                              │
//! │                     │ Condition  │                              │
//! │                     │ Timeout    │                              │
//! │                     └────────────┘                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use kirk::prelude::*;
//!
//! let link = Element::with_config(
//!     MockElement::new(".paginator a")
//!         .with_attribute("href", "http://localhost:8086/second_page.html"),
//!     KirkConfig::new().with_timeout(100).with_poll_interval(10),
//! );
//!
//! let err = link.should(have::attr("href", "second_page.html")).unwrap_err();
//! assert!(err
//!     .to_string()
//!     .contains("actual: [http://localhost:8086/]second_page.html"));
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

mod accessor;
mod clock;
pub mod condition;
mod config;
pub mod diff;
mod element;
mod locator;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
mod report;
mod result;
mod snapshot;
mod wait;

pub use accessor::{ElementAccessor, MockElement};
pub use clock::{system_clock, Clock, FakeClock, SharedClock, SystemClock};
pub use condition::{
    be, have, not, Condition, ConditionKind, Description, Expected, ELEMENT_NOT_FOUND,
};
pub use config::{KirkConfig, ENV_POLL_INTERVAL_MS, ENV_TIMEOUT_MS};
pub use diff::{bracket_diff, BracketDiff};
pub use element::Element;
pub use locator::Selector;
pub use report::{report, ConditionTimeout};
pub use result::{KirkError, KirkResult};
pub use snapshot::ElementSnapshot;
pub use wait::{
    Poller, WaitOptions, WaitOutcome, WaitState, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_WAIT_TIMEOUT_MS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::condition::{be, have, not};
    pub use super::{
        Condition, ConditionTimeout, Element, ElementAccessor, KirkConfig, KirkError,
        KirkResult, MockElement, Selector, WaitOptions,
    };
}
