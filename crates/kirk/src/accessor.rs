//! Element state access.
//!
//! [`ElementAccessor`] is the seam between Kirk and whatever browser driver
//! actually owns the page. Implementations must tolerate the element being
//! absent (report `None`/`false`/`0`) and may return
//! [`KirkError::ElementAccess`] for transient failures such as a stale node;
//! the poll loop treats both the same way.
//!
//! [`MockElement`] is an in-memory accessor for unit testing.

use crate::locator::Selector;
use crate::result::{KirkError, KirkResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Live, on-demand view of a located element (or collection of elements)
pub trait ElementAccessor {
    /// Human-readable rendering of how the element was located
    fn locator_description(&self) -> String;

    /// Visible text of the (first) matched element
    fn text(&self) -> KirkResult<Option<String>>;

    /// Value of the named attribute on the (first) matched element
    fn attribute(&self, name: &str) -> KirkResult<Option<String>>;

    /// Whether the element is displayed
    fn is_visible(&self) -> KirkResult<bool>;

    /// Whether the element is enabled for interaction
    fn is_enabled(&self) -> KirkResult<bool>;

    /// Texts of every element matched by the locator, in document order
    fn matched_texts(&self) -> KirkResult<Vec<String>>;

    /// Number of elements matched by the locator
    fn size(&self) -> KirkResult<usize>;
}

impl<A: ElementAccessor + ?Sized> ElementAccessor for &A {
    fn locator_description(&self) -> String {
        (**self).locator_description()
    }

    fn text(&self) -> KirkResult<Option<String>> {
        (**self).text()
    }

    fn attribute(&self, name: &str) -> KirkResult<Option<String>> {
        (**self).attribute(name)
    }

    fn is_visible(&self) -> KirkResult<bool> {
        (**self).is_visible()
    }

    fn is_enabled(&self) -> KirkResult<bool> {
        (**self).is_enabled()
    }

    fn matched_texts(&self) -> KirkResult<Vec<String>> {
        (**self).matched_texts()
    }

    fn size(&self) -> KirkResult<usize> {
        (**self).size()
    }
}

// =============================================================================
// MOCK ELEMENT
// =============================================================================

#[derive(Debug, Default)]
struct MockState {
    matched: Vec<String>,
    attributes: HashMap<String, String>,
    visible: bool,
    enabled: bool,
    pending_failures: usize,
    reads: usize,
}

/// Mock element for unit testing
///
/// Clones share state, so a test can hand one clone to an [`Element`]
/// and keep mutating the other (from another thread if needed) to
/// simulate asynchronous rendering.
///
/// [`Element`]: crate::Element
#[derive(Debug, Clone)]
pub struct MockElement {
    selector: Selector,
    state: Arc<Mutex<MockState>>,
}

impl MockElement {
    /// Create a mock whose locator matches nothing yet
    #[must_use]
    pub fn absent(selector: impl Into<Selector>) -> Self {
        Self {
            selector: selector.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a mock for a single visible, enabled element with empty text
    #[must_use]
    pub fn new(selector: impl Into<Selector>) -> Self {
        let element = Self::absent(selector);
        {
            let mut state = element.lock();
            state.matched.push(String::new());
            state.visible = true;
            state.enabled = true;
        }
        element
    }

    /// Set the text of the first matched element
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the texts of all matched elements
    #[must_use]
    pub fn with_texts<I, S>(self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_texts(texts);
        self
    }

    /// Set an attribute value
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set visibility
    #[must_use]
    pub fn with_visible(self, visible: bool) -> Self {
        self.set_visible(visible);
        self
    }

    /// Set enabled state
    #[must_use]
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Replace the first matched element's text, creating it if absent
    pub fn set_text(&self, text: impl Into<String>) {
        let mut state = self.lock();
        let text = text.into();
        match state.matched.first_mut() {
            Some(first) => *first = text,
            None => state.matched.push(text),
        }
    }

    /// Replace the whole matched collection
    pub fn set_texts<I, S>(&self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().matched = texts.into_iter().map(Into::into).collect();
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.lock().attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute
    pub fn remove_attribute(&self, name: &str) {
        let _ = self.lock().attributes.remove(name);
    }

    /// Set visibility
    pub fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }

    /// Set enabled state
    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    /// Detach every matched element from the page
    pub fn remove(&self) {
        let mut state = self.lock();
        state.matched.clear();
        state.attributes.clear();
        state.visible = false;
        state.enabled = false;
    }

    /// Make the next `count` reads fail as if the node went stale
    pub fn fail_next_reads(&self, count: usize) {
        self.lock().pending_failures = count;
    }

    /// Number of accessor calls served so far (failed ones included)
    #[must_use]
    pub fn reads(&self) -> usize {
        self.lock().reads
    }

    /// Selector this mock pretends to be located by
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the read and consume one scripted failure if any are pending
    fn read(&self) -> KirkResult<MutexGuard<'_, MockState>> {
        let mut state = self.lock();
        state.reads += 1;
        if state.pending_failures > 0 {
            state.pending_failures -= 1;
            return Err(KirkError::element_access(format!(
                "stale element reference: {}",
                self.selector
            )));
        }
        Ok(state)
    }
}

impl ElementAccessor for MockElement {
    fn locator_description(&self) -> String {
        self.selector.to_string()
    }

    fn text(&self) -> KirkResult<Option<String>> {
        Ok(self.read()?.matched.first().cloned())
    }

    fn attribute(&self, name: &str) -> KirkResult<Option<String>> {
        let state = self.read()?;
        if state.matched.is_empty() {
            return Ok(None);
        }
        Ok(state.attributes.get(name).cloned())
    }

    fn is_visible(&self) -> KirkResult<bool> {
        let state = self.read()?;
        Ok(!state.matched.is_empty() && state.visible)
    }

    fn is_enabled(&self) -> KirkResult<bool> {
        let state = self.read()?;
        Ok(!state.matched.is_empty() && state.enabled)
    }

    fn matched_texts(&self) -> KirkResult<Vec<String>> {
        Ok(self.read()?.matched.clone())
    }

    fn size(&self) -> KirkResult<usize> {
        Ok(self.read()?.matched.len())
    }
}
