//! Result and error types for Kirk.

use crate::report::ConditionTimeout;
use thiserror::Error;

/// Result type for Kirk operations
pub type KirkResult<T> = Result<T, KirkError>;

/// Errors that can occur in Kirk
#[derive(Debug, Error)]
pub enum KirkError {
    /// A condition did not match before the wait timed out.
    ///
    /// The display form is the full multi-line diagnostic.
    #[error("{0}")]
    ConditionTimeout(Box<ConditionTimeout>),

    /// Reading element state failed (stale node, lost session, ...)
    #[error("Element access failed: {message}")]
    ElementAccess {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl KirkError {
    /// Create an element access error
    #[must_use]
    pub fn element_access(message: impl Into<String>) -> Self {
        Self::ElementAccess {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Borrow the timeout details if this is a condition timeout
    #[must_use]
    pub fn as_timeout(&self) -> Option<&ConditionTimeout> {
        match self {
            Self::ConditionTimeout(timeout) => Some(timeout),
            _ => None,
        }
    }

    /// Check whether this error is a condition timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::ConditionTimeout(_))
    }
}

impl From<ConditionTimeout> for KirkError {
    fn from(timeout: ConditionTimeout) -> Self {
        Self::ConditionTimeout(Box::new(timeout))
    }
}
