//! Core types shared by the machine engine and the event layer.
//!
//! This module contains the vocabulary the rest of the crate builds on:
//! - State identifiers via the `State` trait
//! - Event identifiers via the `Event` trait
//! - Guard predicates over pending transitions
//! - Opaque transition metadata
//! - Immutable history tracking
//!
//! Everything here is pure data and predicates; applying transitions is
//! the `machine` module's job.

mod event;
mod guard;
mod history;
mod metadata;
mod state;

pub use event::Event;
pub use guard::{Guard, PendingTransition};
pub use history::{StateHistory, StateTransition};
pub use metadata::Metadata;
pub use state::State;
