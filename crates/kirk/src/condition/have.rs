//! `have` conditions: properties an element or collection should have.
//!
//! ```
//! use kirk::have;
//!
//! let link = have::attr("href", "second_page.html");
//! assert_eq!(link.describe().kind, "attribute value {href}");
//! ```

use super::{Condition, ConditionKind};

/// Element text equals `expected` exactly
#[must_use]
pub fn text(expected: impl Into<String>) -> Condition {
    Condition::new(ConditionKind::Text(expected.into()))
}

/// Texts of all matched elements equal `expected`, element by element
#[must_use]
pub fn exact_text<I, S>(expected: I) -> Condition
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Condition::new(ConditionKind::ExactText(
        expected.into_iter().map(Into::into).collect(),
    ))
}

/// Locator matches exactly `expected` elements (zero included)
#[must_use]
pub const fn collection_size(expected: usize) -> Condition {
    Condition::new(ConditionKind::CollectionSize(expected))
}

/// Attribute `name` equals `expected` exactly; a missing attribute reads as ""
#[must_use]
pub fn attr(name: impl Into<String>, expected: impl Into<String>) -> Condition {
    Condition::new(ConditionKind::Attribute {
        name: name.into(),
        value: expected.into(),
    })
}

/// `class` attribute contains `class` as one of its whitespace-separated entries
#[must_use]
pub fn css_class(class: impl Into<String>) -> Condition {
    Condition::new(ConditionKind::CssClass(class.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_build_positive_conditions() {
        for condition in [
            text("a"),
            exact_text(["a", "b"]),
            collection_size(0),
            attr("href", "x"),
            css_class("c"),
        ] {
            assert!(!condition.is_negated());
        }
    }

    #[test]
    fn test_exact_text_accepts_owned_strings() {
        let texts = vec![String::from("one"), String::from("two")];
        assert_eq!(
            exact_text(texts).kind(),
            &ConditionKind::ExactText(vec!["one".into(), "two".into()])
        );
    }

    #[test]
    fn test_attr_kind() {
        assert_eq!(
            attr("href", "second_page.html").kind(),
            &ConditionKind::Attribute {
                name: "href".into(),
                value: "second_page.html".into()
            }
        );
    }
}
