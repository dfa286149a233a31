//! Engine errors.

use thiserror::Error;

/// Hard failures from the transition engine.
///
/// These are distinct from guard rejections: a rejected attempt is a
/// normal `false` outcome, while a `MachineError` means the attempt was
/// invalid and is never converted to a boolean result by the event layer.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MachineError {
    #[error("no transition defined from '{from}' to '{to}'")]
    TransitionNotDefined { from: String, to: String },
}
