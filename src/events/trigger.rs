//! Triggering events on a machine instance.
//!
//! Resolution runs in two steps: the event name is looked up in the
//! registry (failing with `UnknownEvent`), then the current state is
//! looked up in the event's source table (failing with
//! `NoTransitionForState`). The resolved candidates are attempted in
//! declaration order through the engine's guarded transition primitive;
//! the first applied attempt wins and ends the trigger, and if every
//! candidate is rejected the trigger fails with `AllGuardsFailed`.

use crate::core::{Event, Metadata, State};
use crate::events::error::TriggerError;
use crate::machine::{Machine, MachineError};

impl<S: State, E: Event> Machine<S, E> {
    /// Trigger `event` with empty metadata, failing if nothing moved.
    ///
    /// See [`trigger_with`](Self::trigger_with).
    pub fn trigger(&mut self, event: &E) -> Result<(), TriggerError> {
        self.trigger_with(event, Metadata::new())
    }

    /// Trigger `event`, attempting its candidate targets for the current
    /// state in declaration order until one is applied.
    ///
    /// The metadata is forwarded unchanged to every attempt, so the
    /// guards of each candidate and the history record of the applied
    /// transition all observe the caller's payload. The first candidate
    /// whose guards pass wins; later candidates are never attempted. A
    /// successful transition back to the current state counts like any
    /// other.
    ///
    /// On success the chosen target is not returned; read
    /// [`current_state`](Self::current_state) afterwards.
    ///
    /// # Errors
    ///
    /// - [`TriggerError::UnknownEvent`] - `event` was never registered
    /// - [`TriggerError::NoTransitionForState`] - `event` declares
    ///   nothing for the current state
    /// - [`TriggerError::AllGuardsFailed`] - every candidate was rejected
    /// - [`TriggerError::Machine`] - the engine failed hard mid-attempt
    ///
    /// # Example
    ///
    /// ```rust
    /// use impetus::{event_enum, state_enum, Definition, Machine, Metadata};
    ///
    /// state_enum! {
    ///     enum ReviewState {
    ///         Draft,
    ///         Submitted,
    ///     }
    /// }
    ///
    /// event_enum! {
    ///     enum ReviewEvent {
    ///         Submit,
    ///     }
    /// }
    ///
    /// let definition = Definition::builder()
    ///     .initial(ReviewState::Draft)
    ///     .event(ReviewEvent::Submit, ReviewState::Draft, [ReviewState::Submitted])
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut review = Machine::new(definition);
    /// let mut metadata = Metadata::new();
    /// metadata.insert("author".to_string(), "mg@example.com".into());
    ///
    /// review.trigger_with(&ReviewEvent::Submit, metadata.clone()).unwrap();
    /// assert_eq!(review.current_state(), &ReviewState::Submitted);
    /// assert_eq!(review.last_transition().unwrap().metadata, metadata);
    /// ```
    pub fn trigger_with(&mut self, event: &E, metadata: Metadata) -> Result<(), TriggerError> {
        let targets = self.candidate_targets(event)?.to_vec();
        for target in targets {
            if self.attempt_transition(target, &metadata)? {
                return Ok(());
            }
        }
        Err(TriggerError::AllGuardsFailed {
            event: event.name().to_string(),
            state: self.current_state().name().to_string(),
        })
    }

    /// Trigger `event` with empty metadata, reporting "did it move" as a
    /// boolean.
    ///
    /// See [`try_trigger_with`](Self::try_trigger_with).
    pub fn try_trigger(&mut self, event: &E) -> Result<bool, MachineError> {
        self.try_trigger_with(event, Metadata::new())
    }

    /// Non-raising variant of [`trigger_with`](Self::trigger_with).
    ///
    /// All three trigger failure kinds (unknown event, no transition for
    /// the current state, all guards rejected) collapse to `Ok(false)`.
    /// Hard engine failures are not part of that taxonomy and propagate
    /// unchanged.
    pub fn try_trigger_with(&mut self, event: &E, metadata: Metadata) -> Result<bool, MachineError> {
        match self.trigger_with(event, metadata) {
            Ok(()) => Ok(true),
            Err(TriggerError::UnknownEvent { .. })
            | Err(TriggerError::NoTransitionForState { .. })
            | Err(TriggerError::AllGuardsFailed { .. }) => Ok(false),
            Err(TriggerError::Machine(error)) => Err(error),
        }
    }

    /// Resolve the candidate targets `event` declares for the current
    /// state, in declaration order.
    ///
    /// This is the lookup half of a trigger, without any attempts.
    ///
    /// # Errors
    ///
    /// - [`TriggerError::UnknownEvent`] - `event` was never registered
    /// - [`TriggerError::NoTransitionForState`] - `event` declares
    ///   nothing for the current state
    pub fn candidate_targets(&self, event: &E) -> Result<&[S], TriggerError> {
        let transitions = self.definition().events().lookup(event)?;
        transitions
            .targets(self.current_state())
            .ok_or_else(|| TriggerError::NoTransitionForState {
                event: event.name().to_string(),
                state: self.current_state().name().to_string(),
            })
    }

    /// Every registered event with at least one candidate target for the
    /// current state, in registration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use impetus::{event_enum, state_enum, Definition, Machine};
    ///
    /// state_enum! {
    ///     enum GateState {
    ///         Shut,
    ///         Ajar,
    ///     }
    /// }
    ///
    /// event_enum! {
    ///     enum GateEvent {
    ///         Push,
    ///         Pull,
    ///     }
    /// }
    ///
    /// let definition = Definition::builder()
    ///     .initial(GateState::Shut)
    ///     .event(GateEvent::Push, GateState::Shut, [GateState::Ajar])
    ///     .event(GateEvent::Pull, GateState::Ajar, [GateState::Shut])
    ///     .build()
    ///     .unwrap();
    ///
    /// let gate = Machine::new(definition);
    /// assert_eq!(gate.available_events(), vec![&GateEvent::Push]);
    /// ```
    pub fn available_events(&self) -> Vec<&E> {
        let current = self.current_state();
        self.definition()
            .events()
            .iter()
            .filter(|(_, transitions)| transitions.contains(current))
            .map(|(event, _)| event)
            .collect()
    }
}
