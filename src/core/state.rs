//! Core State trait for state machine states.
//!
//! States are opaque identifiers compared for equality only; the engine
//! never orders or hashes them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values describing the current position in a
/// machine. The event layer and the engine only ever clone and compare
/// them.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: candidate resolution and guard matching compare states
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: histories containing states serialize
///
/// # Example
///
/// ```rust
/// use impetus::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ArticleState {
///     Draft,
///     Review,
///     Published,
///     Retracted,
/// }
///
/// impl State for ArticleState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Review => "Review",
///             Self::Published => "Published",
///             Self::Retracted => "Retracted",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Retracted)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Retracted)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display, logging, and error messages.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states are typically also final states, but this is not
    /// enforced. Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum ArticleState {
        Draft,
        Review,
        Published,
        Retracted,
    }

    impl State for ArticleState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Review => "Review",
                Self::Published => "Published",
                Self::Retracted => "Retracted",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Published | Self::Retracted)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Retracted)
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(ArticleState::Draft.name(), "Draft");
        assert_eq!(ArticleState::Retracted.name(), "Retracted");
    }

    #[test]
    fn final_and_error_flags() {
        assert!(!ArticleState::Draft.is_final());
        assert!(ArticleState::Published.is_final());
        assert!(ArticleState::Retracted.is_final());
        assert!(!ArticleState::Published.is_error());
        assert!(ArticleState::Retracted.is_error());
    }

    #[test]
    fn default_flags_are_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Bare;

        impl State for Bare {
            fn name(&self) -> &str {
                "Bare"
            }
        }

        assert!(!Bare.is_final());
        assert!(!Bare.is_error());
    }

    #[test]
    fn states_compare_by_equality() {
        assert_eq!(ArticleState::Review, ArticleState::Review.clone());
        assert_ne!(ArticleState::Review, ArticleState::Published);
    }

    #[test]
    fn state_roundtrips_through_json() {
        let json = serde_json::to_string(&ArticleState::Review).unwrap();
        let back: ArticleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ArticleState::Review);
    }
}
