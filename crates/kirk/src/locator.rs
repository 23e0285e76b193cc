//! Selectors describing how an element was located.
//!
//! Kirk never resolves selectors itself; the driver behind an
//! [`ElementAccessor`](crate::ElementAccessor) does. A [`Selector`] only
//! exists so that diagnostics can say where the element was looked for,
//! rendered the way WebDriver bindings print their `By` locators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath selector
    XPath(String),
    /// Element id attribute
    Id(String),
    /// Element name attribute
    Name(String),
    /// Single CSS class name
    ClassName(String),
    /// Tag name (e.g., "input")
    TagName(String),
    /// Exact anchor text
    LinkText(String),
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// Create an id selector
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Create a name selector
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create a class name selector
    #[must_use]
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::ClassName(class.into())
    }

    /// Create a tag name selector
    #[must_use]
    pub fn tag_name(tag: impl Into<String>) -> Self {
        Self::TagName(tag.into())
    }

    /// Create a link text selector
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// WebDriver strategy name
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) => "cssSelector",
            Self::XPath(_) => "xpath",
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::ClassName(_) => "className",
            Self::TagName(_) => "tagName",
            Self::LinkText(_) => "linkText",
        }
    }

    /// Raw selector value
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::Id(v)
            | Self::Name(v)
            | Self::ClassName(v)
            | Self::TagName(v)
            | Self::LinkText(v) => v,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy(), self.value())
    }
}

impl From<&str> for Selector {
    fn from(css: &str) -> Self {
        Self::css(css)
    }
}

impl From<String> for Selector {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_display() {
        assert_eq!(
            Selector::css("#header").to_string(),
            "By.cssSelector: #header"
        );
    }

    #[test]
    fn test_strategies() {
        assert_eq!(Selector::xpath("//a").to_string(), "By.xpath: //a");
        assert_eq!(Selector::id("main").to_string(), "By.id: main");
        assert_eq!(Selector::name("q").to_string(), "By.name: q");
        assert_eq!(
            Selector::class_name("btn").to_string(),
            "By.className: btn"
        );
        assert_eq!(Selector::tag_name("input").to_string(), "By.tagName: input");
        assert_eq!(
            Selector::link_text("Next").to_string(),
            "By.linkText: Next"
        );
    }

    #[test]
    fn test_value() {
        assert_eq!(Selector::css(".paginator a").value(), ".paginator a");
    }

    #[test]
    fn test_from_str_is_css() {
        let selector: Selector = "#input_invisible".into();
        assert_eq!(selector, Selector::css("#input_invisible"));
    }
}
