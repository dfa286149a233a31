//! State transition history tracking.
//!
//! Provides immutable tracking of applied transitions over time. Every
//! record carries the metadata the triggering caller supplied, so guards
//! and audit trails can be reconstructed after the fact.

use super::metadata::Metadata;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// Records are only written for transitions that were actually applied;
/// rejected attempts leave no trace here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the machine moved from
    pub from: S,
    /// The state the machine moved to
    pub to: S,
    /// Metadata supplied with the attempt, copied verbatim
    pub metadata: Metadata,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use impetus::{Metadata, State, StateHistory, StateTransition};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Setup,
///     Active,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Setup => "Setup",
///             Self::Active => "Active",
///         }
///     }
/// }
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: Phase::Setup,
///     to: Phase::Active,
///     metadata: Metadata::new(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![&Phase::Setup, &Phase::Active]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed: the initial `from`, then the
    /// `to` state of each transition in order.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get the most recently applied transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Calculate the elapsed time between the first and last recorded
    /// transitions. Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
