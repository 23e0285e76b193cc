//! `be` conditions: boolean element states.

use super::{Condition, ConditionKind};

/// Element is displayed
#[must_use]
pub const fn visible() -> Condition {
    Condition::new(ConditionKind::Visible)
}

/// Element is not displayed, or not on the page at all
#[must_use]
pub fn hidden() -> Condition {
    visible().negate()
}

/// Element is enabled
#[must_use]
pub const fn enabled() -> Condition {
    Condition::new(ConditionKind::Enabled)
}

/// Locator matches at least one element
#[must_use]
pub const fn present() -> Condition {
    Condition::new(ConditionKind::Present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_is_negated_visibility() {
        let hidden = hidden();
        assert!(hidden.is_negated());
        assert_eq!(hidden.kind(), &ConditionKind::Visible);
    }

    #[test]
    fn test_states_are_positive() {
        assert!(!visible().is_negated());
        assert!(!enabled().is_negated());
        assert!(!present().is_negated());
    }
}
