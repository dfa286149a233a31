//! Impetus: an event-driven state machine library
//!
//! Impetus layers named **events** on top of a guarded state machine. A
//! machine definition declares events, each grouping one or more
//! `(from → to)` transitions; an instance triggers an event by attempting
//! the declared candidate targets for its current state in declaration
//! order until one passes its guards.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`State`] trait
//! - **Event**: a named, triggerable group of transitions via the
//!   [`Event`] trait
//! - **Guards**: predicates over a pending transition that approve or
//!   reject each attempt
//! - **History**: immutable record of applied transitions, including the
//!   metadata each one carried
//!
//! # Example
//!
//! ```rust
//! use impetus::{event_enum, state_enum, Definition, Machine};
//!
//! state_enum! {
//!     enum DoorState {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//! }
//!
//! event_enum! {
//!     enum DoorEvent {
//!         OpenDoor,
//!         CloseDoor,
//!         Lock,
//!     }
//! }
//!
//! let definition = Definition::builder()
//!     .initial(DoorState::Closed)
//!     .event(DoorEvent::OpenDoor, DoorState::Closed, [DoorState::Open])
//!     .event(DoorEvent::CloseDoor, DoorState::Open, [DoorState::Closed])
//!     .event(DoorEvent::Lock, DoorState::Closed, [DoorState::Locked])
//!     .build()
//!     .unwrap();
//!
//! let mut door = Machine::new(definition);
//! door.trigger(&DoorEvent::OpenDoor).unwrap();
//! assert_eq!(door.current_state(), &DoorState::Open);
//!
//! // Locking is only declared from Closed, so it cannot fire here.
//! assert_eq!(door.try_trigger(&DoorEvent::Lock), Ok(false));
//! ```

pub mod core;
pub mod events;
pub mod machine;

mod macros;

// Re-export commonly used types
pub use core::{Event, Guard, Metadata, PendingTransition, State, StateHistory, StateTransition};
pub use events::{EventRegistry, TransitionsBySource, TriggerError};
pub use machine::{BuildError, Definition, DefinitionBuilder, Machine, MachineError};
