//! Machine instances and the guarded transition primitive.

use crate::core::{Event, Metadata, PendingTransition, State, StateHistory, StateTransition};
use crate::machine::definition::Definition;
use crate::machine::error::MachineError;
use chrono::Utc;
use std::sync::Arc;

/// One state machine instance.
///
/// An instance couples a shared, immutable [`Definition`] with the
/// mutable state it exclusively owns: the current state and the history
/// of applied transitions. All mutation goes through `&mut self`, so an
/// instance is only ever driven by a single logical caller at a time.
///
/// # Example
///
/// ```rust
/// use impetus::{event_enum, state_enum, Definition, Machine, Metadata};
///
/// state_enum! {
///     enum LampState {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum LampEvent {
///         Toggle,
///     }
/// }
///
/// let definition = Definition::builder()
///     .initial(LampState::Off)
///     .event(LampEvent::Toggle, LampState::Off, [LampState::On])
///     .event(LampEvent::Toggle, LampState::On, [LampState::Off])
///     .build()
///     .unwrap();
///
/// let mut lamp = Machine::new(definition);
/// assert_eq!(lamp.current_state(), &LampState::Off);
///
/// let applied = lamp
///     .attempt_transition(LampState::On, &Metadata::new())
///     .unwrap();
/// assert!(applied);
/// assert_eq!(lamp.current_state(), &LampState::On);
/// ```
pub struct Machine<S: State, E: Event> {
    definition: Arc<Definition<S, E>>,
    current: S,
    history: StateHistory<S>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create an instance in the definition's initial state.
    pub fn new(definition: impl Into<Arc<Definition<S, E>>>) -> Self {
        let definition = definition.into();
        let current = definition.initial().clone();
        Self {
            definition,
            current,
            history: StateHistory::new(),
        }
    }

    /// Create an instance resumed at an explicit state, with an empty
    /// history.
    pub fn restore(definition: impl Into<Arc<Definition<S, E>>>, state: S) -> Self {
        Self {
            definition: definition.into(),
            current: state,
            history: StateHistory::new(),
        }
    }

    /// The shared definition this instance was created from.
    pub fn definition(&self) -> &Arc<Definition<S, E>> {
        &self.definition
    }

    /// The instance's current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the instance is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// The history of applied transitions.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// The most recently applied transition, if any.
    pub fn last_transition(&self) -> Option<&StateTransition<S>> {
        self.history.last()
    }

    /// Attempt a guarded transition from the current state to `to`.
    ///
    /// Returns `Ok(true)` when the transition was applied: every matching
    /// guard approved it, a history record carrying the metadata was
    /// appended, and the current state moved (a target equal to the
    /// current state is applied like any other). Returns `Ok(false)` when
    /// a guard rejected the attempt; the instance is unchanged.
    ///
    /// Attempting a `(current, to)` pair that was never declared is not a
    /// guard rejection but a hard error.
    pub fn attempt_transition(&mut self, to: S, metadata: &Metadata) -> Result<bool, MachineError> {
        if !self.definition.permits(&self.current, &to) {
            return Err(MachineError::TransitionNotDefined {
                from: self.current.name().to_string(),
                to: to.name().to_string(),
            });
        }

        let pending = PendingTransition {
            from: &self.current,
            to: &to,
            metadata,
        };
        if !self.definition.guards_pass(&pending) {
            return Ok(false);
        }

        let record = StateTransition {
            from: self.current.clone(),
            to: to.clone(),
            metadata: metadata.clone(),
            timestamp: Utc::now(),
        };
        self.history = self.history.record(record);
        self.current = to;
        Ok(true)
    }
}
