//! Event trigger errors.

use crate::machine::MachineError;
use thiserror::Error;

/// Why a trigger did not move the instance to a new state.
///
/// The first three variants are the trigger taxonomy: one externally
/// visible kind ("the event could not fire") with distinguishable causes.
/// [`TriggerError::Machine`] wraps engine failures unrelated to that
/// taxonomy; the non-raising entry point re-propagates those instead of
/// converting them to `false`.
#[derive(Debug, Error, PartialEq)]
pub enum TriggerError {
    /// The event name was never registered for this machine class.
    #[error("event '{event}' is not defined")]
    UnknownEvent { event: String },

    /// The event exists but declares no transitions from the instance's
    /// current state.
    #[error("event '{event}' has no transition from state '{state}'")]
    NoTransitionForState { event: String, state: String },

    /// Every declared candidate target was attempted and rejected by its
    /// guards.
    #[error("all guards rejected event '{event}' from state '{state}'")]
    AllGuardsFailed { event: String, state: String },

    /// A hard engine failure surfaced mid-trigger.
    #[error(transparent)]
    Machine(#[from] MachineError),
}
