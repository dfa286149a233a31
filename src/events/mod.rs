//! The event layer: named, triggerable groups of transitions.
//!
//! An event maps one or more source states to an ordered sequence of
//! candidate target states. Triggering an event resolves the candidates
//! for the instance's current state and attempts each in declaration
//! order through the engine's guarded transition primitive; the first
//! state whose guards pass wins, and later candidates are never
//! attempted.
//!
//! Failures come in three kinds, all meaning "the event did not move the
//! instance": the event was never registered ([`TriggerError::UnknownEvent`]),
//! the event has no entry for the current state
//! ([`TriggerError::NoTransitionForState`]), or every candidate was
//! rejected by its guards ([`TriggerError::AllGuardsFailed`]).

mod error;
mod registry;
mod trigger;

pub use error::TriggerError;
pub use registry::{EventRegistry, TransitionsBySource};
