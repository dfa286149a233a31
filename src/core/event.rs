//! Core Event trait for triggerable event names.
//!
//! An event names a group of declared transitions that can be triggered
//! as a single unit. Like states, events are opaque identifiers compared
//! for equality only; each name is unique within one registry.

use std::fmt::Debug;

/// Trait for event identifiers.
///
/// # Example
///
/// ```rust
/// use impetus::Event;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum ArticleEvent {
///     Submit,
///     Publish,
///     Retract,
/// }
///
/// impl Event for ArticleEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Submit => "Submit",
///             Self::Publish => "Publish",
///             Self::Retract => "Retract",
///         }
///     }
/// }
/// ```
pub trait Event: Clone + PartialEq + Debug + Send + Sync {
    /// Get the event's name for display, logging, and error messages.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum ArticleEvent {
        Submit,
        Publish,
    }

    impl Event for ArticleEvent {
        fn name(&self) -> &str {
            match self {
                Self::Submit => "Submit",
                Self::Publish => "Publish",
            }
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(ArticleEvent::Submit.name(), "Submit");
        assert_eq!(ArticleEvent::Publish.name(), "Publish");
    }

    #[test]
    fn events_compare_by_equality() {
        assert_eq!(ArticleEvent::Submit, ArticleEvent::Submit.clone());
        assert_ne!(ArticleEvent::Submit, ArticleEvent::Publish);
    }
}
