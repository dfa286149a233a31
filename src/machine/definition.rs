//! Immutable machine definitions.

use crate::core::{Event, Guard, PendingTransition, State};
use crate::events::EventRegistry;
use crate::machine::builder::DefinitionBuilder;

/// A guard attached to transitions matched by optional source and target
/// states. `None` matches any state.
pub(crate) struct GuardRule<S: State> {
    pub(crate) from: Option<S>,
    pub(crate) to: Option<S>,
    pub(crate) guard: Guard<S>,
}

impl<S: State> GuardRule<S> {
    pub(crate) fn applies_to(&self, from: &S, to: &S) -> bool {
        self.from.as_ref().is_none_or(|f| f == from) && self.to.as_ref().is_none_or(|t| t == to)
    }
}

/// The immutable description of a machine class: initial state, declared
/// transitions, guard rules, and the event registry.
///
/// Built once via [`DefinitionBuilder`] and never mutated afterwards.
/// Wrap it in an `Arc` to share one definition across every instance;
/// construction must complete before the first trigger, which the
/// builder's move semantics enforce.
///
/// # Example
///
/// ```rust
/// use impetus::{event_enum, state_enum, Definition};
///
/// state_enum! {
///     enum Signal {
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum SignalEvent {
///         Switch,
///     }
/// }
///
/// let definition = Definition::builder()
///     .initial(Signal::Red)
///     .event(SignalEvent::Switch, Signal::Red, [Signal::Green])
///     .event(SignalEvent::Switch, Signal::Green, [Signal::Red])
///     .build()
///     .unwrap();
///
/// assert!(definition.permits(&Signal::Red, &Signal::Green));
/// assert!(!definition.permits(&Signal::Red, &Signal::Red));
/// ```
pub struct Definition<S: State, E: Event> {
    pub(crate) initial: S,
    pub(crate) transitions: Vec<(S, S)>,
    pub(crate) guards: Vec<GuardRule<S>>,
    pub(crate) events: EventRegistry<S, E>,
}

impl<S: State, E: Event> Definition<S, E> {
    /// Start building a definition.
    pub fn builder() -> DefinitionBuilder<S, E> {
        DefinitionBuilder::new()
    }

    /// The state every new instance starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Check whether `(from, to)` was declared as a legal transition.
    pub fn permits(&self, from: &S, to: &S) -> bool {
        self.transitions
            .iter()
            .any(|(f, t)| f == from && t == to)
    }

    /// The event registry declared for this machine class.
    pub fn events(&self) -> &EventRegistry<S, E> {
        &self.events
    }

    /// Evaluate every guard rule matching the pending transition, in
    /// registration order. The first rejection stops evaluation.
    pub(crate) fn guards_pass(&self, pending: &PendingTransition<'_, S>) -> bool {
        self.guards
            .iter()
            .filter(|rule| rule.applies_to(pending.from, pending.to))
            .all(|rule| rule.guard.check(pending))
    }
}
