//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over a pending transition. The engine
//! evaluates every guard matching an attempt; a single rejection stops
//! the attempt without changing state.

use super::metadata::Metadata;
use super::state::State;

/// Borrowed view of a transition attempt, handed to guards.
///
/// A guard sees where the machine is, where the attempt would take it,
/// and the metadata the caller supplied. It never sees how the attempt
/// was produced (direct call or event trigger).
#[derive(Debug)]
pub struct PendingTransition<'a, S: State> {
    /// The instance's current state
    pub from: &'a S,
    /// The candidate target state
    pub to: &'a S,
    /// Caller-supplied metadata, forwarded verbatim
    pub metadata: &'a Metadata,
}

/// Predicate that approves or rejects a single transition attempt.
///
/// # Example
///
/// ```rust
/// use impetus::{Guard, Metadata, PendingTransition, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Queued,
///     Running,
///     Done,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// // Only start tasks that were explicitly claimed.
/// let claimed = Guard::new(|t: &PendingTransition<TaskState>| {
///     t.metadata.contains_key("claimed_by")
/// });
///
/// let empty = Metadata::new();
/// let pending = PendingTransition {
///     from: &TaskState::Queued,
///     to: &TaskState::Running,
///     metadata: &empty,
/// };
/// assert!(!claimed.check(&pending));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&PendingTransition<'_, S>) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic for a given pending
    /// transition; the engine may evaluate it once per attempt.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&PendingTransition<'_, S>) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against a pending transition.
    ///
    /// Returns `true` to approve the attempt, `false` to reject it.
    pub fn check(&self, pending: &PendingTransition<'_, S>) -> bool {
        (self.predicate)(pending)
    }
}
