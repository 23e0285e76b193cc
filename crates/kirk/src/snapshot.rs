//! Point-in-time element state.
//!
//! A snapshot is taken fresh on every poll tick and never reused: the node
//! behind a locator may be replaced between two reads. Acquisition failures
//! are folded into an absent snapshot rather than surfaced.

use crate::accessor::ElementAccessor;
use crate::result::KirkResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observable state of a located element at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// How the element was located
    pub locator: String,
    /// Whether the locator matched at least one element
    pub present: bool,
    /// Text of the first matched element
    pub text: Option<String>,
    /// Attributes read for this snapshot (only those a condition asked for)
    pub attributes: BTreeMap<String, String>,
    /// Whether the first matched element is displayed
    pub visible: bool,
    /// Whether the first matched element is enabled
    pub enabled: bool,
    /// Texts of all matched elements
    pub matched_texts: Vec<String>,
    /// Number of matched elements
    pub matched_count: usize,
}

impl ElementSnapshot {
    /// Snapshot of an element that is not (or no longer) on the page
    #[must_use]
    pub fn absent(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            present: false,
            text: None,
            attributes: BTreeMap::new(),
            visible: false,
            enabled: false,
            matched_texts: Vec::new(),
            matched_count: 0,
        }
    }

    /// Read the current state through `accessor`.
    ///
    /// Only the attributes named in `attribute_names` are fetched. Any
    /// accessor error yields [`ElementSnapshot::absent`].
    pub fn capture<A>(accessor: &A, attribute_names: &[&str]) -> Self
    where
        A: ElementAccessor + ?Sized,
    {
        let locator = accessor.locator_description();
        match Self::try_capture(accessor, &locator, attribute_names) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::debug!(
                    locator = %locator,
                    error = %err,
                    "element state unavailable, treating as absent"
                );
                Self::absent(locator)
            }
        }
    }

    fn try_capture<A>(accessor: &A, locator: &str, attribute_names: &[&str]) -> KirkResult<Self>
    where
        A: ElementAccessor + ?Sized,
    {
        let matched_count = accessor.size()?;
        if matched_count == 0 {
            return Ok(Self::absent(locator));
        }

        let mut attributes = BTreeMap::new();
        for name in attribute_names {
            if let Some(value) = accessor.attribute(name)? {
                let _ = attributes.insert((*name).to_string(), value);
            }
        }

        Ok(Self {
            locator: locator.to_string(),
            present: true,
            text: accessor.text()?,
            attributes,
            visible: accessor.is_visible()?,
            enabled: accessor.is_enabled()?,
            matched_texts: accessor.matched_texts()?,
            matched_count,
        })
    }

    /// Attribute value, empty when the attribute is missing
    #[must_use]
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes.get(name).map_or("", String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::accessor::MockElement;

    #[test]
    fn test_absent_defaults() {
        let snapshot = ElementSnapshot::absent("By.cssSelector: #x");
        assert!(!snapshot.present);
        assert!(!snapshot.visible);
        assert_eq!(snapshot.text, None);
        assert_eq!(snapshot.matched_count, 0);
        assert!(snapshot.matched_texts.is_empty());
    }

    #[test]
    fn test_capture_present_element() {
        let element = MockElement::new("#header")
            .with_text("Kirk")
            .with_attribute("class", "title");
        let snapshot = ElementSnapshot::capture(&element, &["class"]);
        assert!(snapshot.present);
        assert!(snapshot.visible);
        assert!(snapshot.enabled);
        assert_eq!(snapshot.text.as_deref(), Some("Kirk"));
        assert_eq!(snapshot.attribute("class"), "title");
        assert_eq!(snapshot.matched_count, 1);
        assert_eq!(snapshot.locator, "By.cssSelector: #header");
    }

    #[test]
    fn test_capture_reads_only_requested_attributes() {
        let element = MockElement::new("a")
            .with_attribute("href", "a.html")
            .with_attribute("title", "t");
        let snapshot = ElementSnapshot::capture(&element, &["href"]);
        assert_eq!(snapshot.attributes.len(), 1);
        assert_eq!(snapshot.attribute("title"), "");
    }

    #[test]
    fn test_capture_missing_attribute_is_empty() {
        let element = MockElement::new("a");
        let snapshot = ElementSnapshot::capture(&element, &["href"]);
        assert_eq!(snapshot.attribute("href"), "");
    }

    #[test]
    fn test_capture_absent_element() {
        let element = MockElement::absent("#missing");
        let snapshot = ElementSnapshot::capture(&element, &[]);
        assert_eq!(snapshot, ElementSnapshot::absent("By.cssSelector: #missing"));
    }

    #[test]
    fn test_capture_failure_becomes_absent() {
        let element = MockElement::new("#header").with_text("Kirk");
        element.fail_next_reads(1);
        let snapshot = ElementSnapshot::capture(&element, &[]);
        assert!(!snapshot.present);
        assert_eq!(snapshot.text, None);

        let snapshot = ElementSnapshot::capture(&element, &[]);
        assert_eq!(snapshot.text.as_deref(), Some("Kirk"));
    }

    #[test]
    fn test_capture_collection() {
        let element = MockElement::absent("li").with_texts(["a", "b", "c"]);
        let snapshot = ElementSnapshot::capture(&element, &[]);
        assert_eq!(snapshot.matched_count, 3);
        assert_eq!(snapshot.matched_texts, vec!["a", "b", "c"]);
    }
}
