//! Conditions: named, describable predicates over an [`ElementSnapshot`].
//!
//! Conditions are built through the [`have`] and [`be`] factory modules and
//! are immutable, cheap to clone and reusable across any number of waits.
//!
//! ```
//! use kirk::{be, have, not};
//!
//! let header = have::text("Kirk");
//! let hidden = not(be::visible());
//! assert!(hidden.is_negated());
//! assert_eq!(header.describe().kind, "text");
//! ```

pub mod be;
pub mod have;

use crate::snapshot::ElementSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of a value that could not be read because the
/// element was not on the page.
pub const ELEMENT_NOT_FOUND: &str = "<element not found>";

// =============================================================================
// CONDITION KIND
// =============================================================================

/// What a condition checks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    /// Exact text of the element
    Text(String),
    /// Exact texts of every matched element, element-wise
    ExactText(Vec<String>),
    /// Number of matched elements
    CollectionSize(usize),
    /// Exact attribute value; a missing attribute reads as ""
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// Class list contains the given class
    CssClass(String),
    /// Element is displayed
    Visible,
    /// Element is enabled
    Enabled,
    /// Locator matches at least one element
    Present,
}

impl ConditionKind {
    /// Human-readable name used after "to assert" in diagnostics
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::ExactText(_) => "exact collection text".to_string(),
            Self::CollectionSize(_) => "collection size".to_string(),
            Self::Attribute { name, .. } => format!("attribute value {{{name}}}"),
            Self::CssClass(_) => "css class".to_string(),
            Self::Visible => "visibility".to_string(),
            Self::Enabled => "enabled state".to_string(),
            Self::Present => "presence".to_string(),
        }
    }

    fn matches(&self, snapshot: &ElementSnapshot) -> bool {
        match self {
            Self::Text(expected) => snapshot.text.as_deref() == Some(expected.as_str()),
            Self::ExactText(expected) => snapshot.matched_texts == *expected,
            Self::CollectionSize(expected) => snapshot.matched_count == *expected,
            Self::Attribute { name, value } => snapshot.attribute(name) == value,
            Self::CssClass(class) => snapshot
                .attribute("class")
                .split_whitespace()
                .any(|c| c == class),
            Self::Visible => snapshot.visible,
            Self::Enabled => snapshot.enabled,
            Self::Present => snapshot.present,
        }
    }

    fn expected(&self) -> Expected {
        match self {
            Self::Text(text) => Expected::Value(text.clone()),
            Self::ExactText(texts) => Expected::Sequence(texts.clone()),
            Self::CollectionSize(size) => Expected::Value(size.to_string()),
            Self::Attribute { value, .. } => Expected::Value(value.clone()),
            Self::CssClass(class) => Expected::Value(class.clone()),
            Self::Visible => Expected::Value("visible".to_string()),
            Self::Enabled => Expected::Value("enabled".to_string()),
            Self::Present => Expected::Value("present".to_string()),
        }
    }

    fn actual(&self, snapshot: &ElementSnapshot) -> Expected {
        let flag = |on: bool, yes: &str, no: &str| {
            Expected::Value((if on { yes } else { no }).to_string())
        };
        match self {
            Self::Text(_) => Expected::Value(
                snapshot
                    .text
                    .clone()
                    .unwrap_or_else(|| ELEMENT_NOT_FOUND.to_string()),
            ),
            Self::ExactText(_) => Expected::Sequence(snapshot.matched_texts.clone()),
            Self::CollectionSize(_) => Expected::Value(snapshot.matched_count.to_string()),
            Self::Attribute { name, .. } => Self::attribute_actual(snapshot, name),
            Self::CssClass(_) => Self::attribute_actual(snapshot, "class"),
            Self::Visible => flag(snapshot.visible, "visible", "invisible"),
            Self::Enabled => flag(snapshot.enabled, "enabled", "disabled"),
            Self::Present => flag(snapshot.present, "present", "absent"),
        }
    }

    fn attribute_actual(snapshot: &ElementSnapshot, name: &str) -> Expected {
        if snapshot.present {
            Expected::Value(snapshot.attribute(name).to_string())
        } else {
            Expected::Value(ELEMENT_NOT_FOUND.to_string())
        }
    }
}

// =============================================================================
// DESCRIPTION
// =============================================================================

/// A rendered expected or actual value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expected {
    /// Single scalar value
    Value(String),
    /// Ordered sequence (collection conditions)
    Sequence(Vec<String>),
}

impl Expected {
    /// The scalar value, if this is not a sequence
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Sequence(_) => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Sequence(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Diagnostic description of a condition. Never used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Condition kind, e.g. "text" or "attribute value {href}"
    pub kind: String,
    /// Expected value
    pub expected: Expected,
    /// Whether the condition is negated
    pub negated: bool,
}

impl Description {
    /// Label for the expected line: "expected" or "expected not"
    #[must_use]
    pub const fn expected_label(&self) -> &'static str {
        if self.negated {
            "expected not"
        } else {
            "expected"
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not ")?;
        }
        write!(f, "{} {}", self.kind, self.expected)
    }
}

// =============================================================================
// CONDITION
// =============================================================================

/// Immutable predicate over element state with a diagnostic description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    kind: ConditionKind,
    negated: bool,
}

impl Condition {
    /// Create a positive condition of the given kind
    #[must_use]
    pub const fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            negated: false,
        }
    }

    /// What this condition checks
    #[must_use]
    pub const fn kind(&self) -> &ConditionKind {
        &self.kind
    }

    /// Whether the condition has been negated
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Invert the condition. Negating twice restores the original.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Evaluate against a snapshot. Pure and deterministic.
    #[must_use]
    pub fn evaluate(&self, snapshot: &ElementSnapshot) -> bool {
        self.kind.matches(snapshot) != self.negated
    }

    /// Describe the condition for diagnostics
    #[must_use]
    pub fn describe(&self) -> Description {
        Description {
            kind: self.kind.name(),
            expected: self.kind.expected(),
            negated: self.negated,
        }
    }

    /// Render the snapshot's value for the property this condition checks
    #[must_use]
    pub fn actual(&self, snapshot: &ElementSnapshot) -> Expected {
        self.kind.actual(snapshot)
    }

    /// Attributes a snapshot must carry for this condition to be evaluated
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&str> {
        match &self.kind {
            ConditionKind::Attribute { name, .. } => vec![name.as_str()],
            ConditionKind::CssClass(_) => vec!["class"],
            _ => Vec::new(),
        }
    }

    /// Whether expected and actual are free-form strings worth diffing
    #[must_use]
    pub const fn compares_text(&self) -> bool {
        matches!(
            self.kind,
            ConditionKind::Text(_) | ConditionKind::Attribute { .. }
        )
    }
}

impl From<ConditionKind> for Condition {
    fn from(kind: ConditionKind) -> Self {
        Self::new(kind)
    }
}

impl std::ops::Not for Condition {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Negate a condition
#[must_use]
pub fn not(condition: Condition) -> Condition {
    condition.negate()
}
