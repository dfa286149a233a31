//! The state machine engine: definitions, instances, and the guarded
//! transition primitive.
//!
//! A [`Definition`] is built once per machine class and holds the
//! declared transitions, guard rules, and event registry. It is immutable
//! after construction and shared read-only across instances (wrap it in
//! an `Arc`). A [`Machine`] is one instance: a definition handle plus the
//! mutable current state and history, owned exclusively by its caller.

pub mod builder;
pub mod definition;
pub mod error;
pub mod instance;

pub use builder::{BuildError, DefinitionBuilder};
pub use definition::Definition;
pub use error::MachineError;
pub use instance::Machine;
