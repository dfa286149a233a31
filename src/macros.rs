//! Macros for ergonomic state and event definitions.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use impetus::state_enum;
///
/// state_enum! {
///     pub enum UploadState {
///         Pending,
///         Transferring,
///         Stored,
///         Failed,
///     }
///     final: [Stored, Failed]
///     error: [Failed]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use impetus::event_enum;
///
/// event_enum! {
///     pub enum UploadEvent {
///         Begin,
///         Complete,
///         Abort,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum UploadState {
            Pending,
            Transferring,
            Stored,
            Failed,
        }
        final: [Stored, Failed]
        error: [Failed]
    }

    event_enum! {
        enum UploadEvent {
            Begin,
            Complete,
        }
    }

    #[test]
    fn state_enum_generates_trait_impl() {
        assert_eq!(UploadState::Pending.name(), "Pending");
        assert!(!UploadState::Pending.is_final());
        assert!(UploadState::Stored.is_final());
        assert!(!UploadState::Stored.is_error());
        assert!(UploadState::Failed.is_error());
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum PlainState {
                One,
                Two,
            }
        }

        assert!(!PlainState::One.is_final());
        assert!(!PlainState::Two.is_error());
    }

    #[test]
    fn event_enum_generates_trait_impl() {
        assert_eq!(UploadEvent::Begin.name(), "Begin");
        assert_eq!(UploadEvent::Complete.name(), "Complete");
        assert_ne!(UploadEvent::Begin, UploadEvent::Complete);
    }

    #[test]
    fn macros_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        event_enum! {
            pub enum PublicEvent {
                Go,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
        assert_eq!(PublicEvent::Go.name(), "Go");
    }
}
