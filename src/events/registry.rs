//! The per-class event registry.
//!
//! Built once while a machine definition is constructed, read many times
//! at trigger time. States and events are equality-only identifiers, so
//! both tables are insertion-ordered pair vectors rather than hash maps;
//! the order is semantically significant (it is the attempt order and
//! the `events()` iteration order) and lookups are linear scans over
//! small tables.

use crate::core::{Event, State};
use crate::events::error::TriggerError;

/// Ordered mapping from a source state to the candidate targets an event
/// declares for it.
///
/// Every stored target sequence is non-empty: declaring an empty target
/// list for a source registers nothing for that source.
#[derive(Debug)]
pub struct TransitionsBySource<S: State> {
    entries: Vec<(S, Vec<S>)>,
}

impl<S: State> TransitionsBySource<S> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `targets` to the sequence for `from`, creating the entry if
    /// needed. Empty `targets` is a no-op.
    fn append(&mut self, from: S, targets: Vec<S>) {
        if targets.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(f, _)| *f == from) {
            Some((_, existing)) => existing.extend(targets),
            None => self.entries.push((from, targets)),
        }
    }

    /// The candidate targets declared for `from`, in declaration order.
    pub fn targets(&self, from: &S) -> Option<&[S]> {
        self.entries
            .iter()
            .find(|(f, _)| f == from)
            .map(|(_, targets)| targets.as_slice())
    }

    /// Check whether any targets are declared for `from`.
    pub fn contains(&self, from: &S) -> bool {
        self.entries.iter().any(|(f, _)| f == from)
    }

    /// Iterate `(source, targets)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[S])> {
        self.entries
            .iter()
            .map(|(from, targets)| (from, targets.as_slice()))
    }

    /// Number of source states with declared targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no source state has declared targets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of events declared for one machine class.
///
/// The registry grows only during definition construction and is read
/// immutably afterwards. Registration order is preserved and observable
/// through [`events`](Self::events) and the available-events query.
///
/// # Example
///
/// ```rust
/// use impetus::{event_enum, state_enum, EventRegistry};
///
/// state_enum! {
///     enum JobState {
///         Queued,
///         Running,
///         Done,
///     }
/// }
///
/// event_enum! {
///     enum JobEvent {
///         Start,
///         Finish,
///     }
/// }
///
/// let mut registry = EventRegistry::new();
/// registry.define_event(JobEvent::Start, [(JobState::Queued, vec![JobState::Running])]);
/// registry.define_event(JobEvent::Finish, [(JobState::Running, vec![JobState::Done])]);
///
/// let names: Vec<_> = registry.events().collect();
/// assert_eq!(names, vec![&JobEvent::Start, &JobEvent::Finish]);
/// ```
pub struct EventRegistry<S: State, E: Event> {
    events: Vec<(E, TransitionsBySource<S>)>,
}

impl<S: State, E: Event> EventRegistry<S, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Register or extend the entry for `event`.
    ///
    /// Each `(from, targets)` pair appends its targets, in order, to the
    /// sequence already declared for that source state. Declaring the
    /// same `(event, from)` pair twice therefore concatenates the target
    /// lists rather than overwriting; repeated calls for one event
    /// accumulate the way repeated `transition` statements in one event
    /// block do. A pair with an empty target list registers nothing for
    /// that source, though the event name itself becomes known.
    pub fn define_event<I>(&mut self, event: E, transitions: I)
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
    {
        let index = match self.events.iter().position(|(e, _)| *e == event) {
            Some(index) => index,
            None => {
                self.events.push((event, TransitionsBySource::new()));
                self.events.len() - 1
            }
        };
        let entry = &mut self.events[index].1;
        for (from, targets) in transitions {
            entry.append(from, targets);
        }
    }

    /// Look up the transitions declared for `event`.
    ///
    /// Fails with [`TriggerError::UnknownEvent`] when the event was never
    /// registered.
    pub fn lookup(&self, event: &E) -> Result<&TransitionsBySource<S>, TriggerError> {
        self.events
            .iter()
            .find(|(e, _)| e == event)
            .map(|(_, entry)| entry)
            .ok_or_else(|| TriggerError::UnknownEvent {
                event: event.name().to_string(),
            })
    }

    /// Check whether `event` was registered.
    pub fn contains(&self, event: &E) -> bool {
        self.events.iter().any(|(e, _)| e == event)
    }

    /// Iterate registered event names in registration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.events.iter().map(|(event, _)| event)
    }

    /// Iterate `(event, transitions)` entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &TransitionsBySource<S>)> {
        self.events.iter().map(|(event, entry)| (event, entry))
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether no events are registered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<S: State, E: Event> Default for EventRegistry<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum JobState {
        Queued,
        Running,
        Done,
        Canceled,
    }

    impl State for JobState {
        fn name(&self) -> &str {
            match self {
                Self::Queued => "Queued",
                Self::Running => "Running",
                Self::Done => "Done",
                Self::Canceled => "Canceled",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum JobEvent {
        Start,
        Finish,
        Cancel,
    }

    impl Event for JobEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
                Self::Cancel => "Cancel",
            }
        }
    }

    #[test]
    fn lookup_of_unregistered_event_fails() {
        let registry: EventRegistry<JobState, JobEvent> = EventRegistry::new();

        let err = registry.lookup(&JobEvent::Start).unwrap_err();
        assert_eq!(
            err,
            TriggerError::UnknownEvent {
                event: "Start".to_string()
            }
        );
    }

    #[test]
    fn define_event_registers_ordered_targets() {
        let mut registry = EventRegistry::new();
        registry.define_event(
            JobEvent::Cancel,
            [(JobState::Queued, vec![JobState::Canceled, JobState::Done])],
        );

        let sources = registry.lookup(&JobEvent::Cancel).unwrap();
        assert_eq!(
            sources.targets(&JobState::Queued).unwrap(),
            &[JobState::Canceled, JobState::Done]
        );
        assert!(sources.targets(&JobState::Running).is_none());
    }

    #[test]
    fn events_iterate_in_registration_order() {
        let mut registry = EventRegistry::new();
        registry.define_event(JobEvent::Cancel, [(JobState::Queued, vec![JobState::Canceled])]);
        registry.define_event(JobEvent::Start, [(JobState::Queued, vec![JobState::Running])]);
        registry.define_event(JobEvent::Finish, [(JobState::Running, vec![JobState::Done])]);

        let names: Vec<_> = registry.events().collect();
        assert_eq!(
            names,
            vec![&JobEvent::Cancel, &JobEvent::Start, &JobEvent::Finish]
        );
    }

    #[test]
    fn repeated_definitions_accumulate_sources() {
        let mut registry = EventRegistry::new();
        registry.define_event(JobEvent::Cancel, [(JobState::Queued, vec![JobState::Canceled])]);
        registry.define_event(
            JobEvent::Cancel,
            [(JobState::Running, vec![JobState::Canceled])],
        );

        let sources = registry.lookup(&JobEvent::Cancel).unwrap();
        assert!(sources.contains(&JobState::Queued));
        assert!(sources.contains(&JobState::Running));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_source_concatenates_targets() {
        let mut registry = EventRegistry::new();
        registry.define_event(JobEvent::Cancel, [(JobState::Queued, vec![JobState::Canceled])]);
        registry.define_event(JobEvent::Cancel, [(JobState::Queued, vec![JobState::Done])]);

        let sources = registry.lookup(&JobEvent::Cancel).unwrap();
        assert_eq!(
            sources.targets(&JobState::Queued).unwrap(),
            &[JobState::Canceled, JobState::Done]
        );
    }

    #[test]
    fn empty_target_list_registers_nothing_for_source() {
        let mut registry = EventRegistry::new();
        registry.define_event(JobEvent::Start, [(JobState::Queued, vec![])]);

        let sources = registry.lookup(&JobEvent::Start).unwrap();
        assert!(sources.is_empty());
        assert!(!sources.contains(&JobState::Queued));
    }

    #[test]
    fn event_can_be_registered_with_no_sources() {
        let mut registry: EventRegistry<JobState, JobEvent> = EventRegistry::new();
        registry.define_event(JobEvent::Start, []);

        assert!(registry.contains(&JobEvent::Start));
        assert!(registry.lookup(&JobEvent::Start).unwrap().is_empty());
    }
}
