// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which of the two required selectors was missing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectorKind {
    /// Selector of the swipeable items inside the container.
    Item,
    /// Selector that marks an item as active.
    Active,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("item"),
            Self::Active => f.write_str("active"),
        }
    }
}

/// Failure to construct a [`SwipeRecognizer`](crate::SwipeRecognizer).
///
/// These are the only errors the crate reports. Event handling never fails.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SwipeError {
    /// The target container did not resolve to an element.
    #[error("the touchable container is invalid")]
    InvalidTarget,
    /// A required selector was absent or empty.
    #[error("an {0} selector must be provided")]
    MissingSelector(SelectorKind),
    /// A configuration value was out of range.
    #[error("invalid swipe configuration: `{field}` must be positive and finite")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            SwipeError::MissingSelector(SelectorKind::Item).to_string(),
            "an item selector must be provided"
        );
        assert_eq!(
            SwipeError::MissingSelector(SelectorKind::Active).to_string(),
            "an active selector must be provided"
        );
        assert_eq!(
            SwipeError::InvalidConfig { field: "threshold" }.to_string(),
            "invalid swipe configuration: `threshold` must be positive and finite"
        );
    }
}
