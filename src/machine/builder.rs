//! Builder for machine definitions.

use crate::core::{Event, Guard, PendingTransition, State};
use crate::events::EventRegistry;
use crate::machine::definition::{Definition, GuardRule};
use thiserror::Error;

/// Errors that can occur when building a definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Nothing declared. Add at least one transition or event")]
    NoTransitions,
}

/// Fluent builder for [`Definition`].
///
/// Declarations are accumulated in call order, which is semantically
/// significant: candidate targets are attempted and guards evaluated in
/// the order they were declared.
///
/// # Example
///
/// ```rust
/// use impetus::{event_enum, state_enum, Definition};
///
/// state_enum! {
///     enum OrderState {
///         Cart,
///         Placed,
///         Shipped,
///     }
/// }
///
/// event_enum! {
///     enum OrderEvent {
///         Checkout,
///         Ship,
///     }
/// }
///
/// let definition = Definition::builder()
///     .initial(OrderState::Cart)
///     .event(OrderEvent::Checkout, OrderState::Cart, [OrderState::Placed])
///     .event(OrderEvent::Ship, OrderState::Placed, [OrderState::Shipped])
///     .guard(OrderState::Placed, OrderState::Shipped, |t| {
///         t.metadata.contains_key("carrier")
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.events().len(), 2);
/// ```
pub struct DefinitionBuilder<S: State, E: Event> {
    initial: Option<S>,
    transitions: Vec<(S, S)>,
    guards: Vec<GuardRule<S>>,
    events: EventRegistry<S, E>,
}

impl<S: State, E: Event> DefinitionBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            guards: Vec::new(),
            events: EventRegistry::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare `(from, to)` as a legal transition.
    ///
    /// Duplicate declarations are collapsed.
    pub fn transition(mut self, from: S, to: S) -> Self {
        self.push_transition(from, to);
        self
    }

    /// Declare an event mapping `from` to ordered candidate `targets`,
    /// and declare each underlying `(from, target)` transition.
    ///
    /// Calling this again for the same event accumulates: further source
    /// states extend the event, and repeating a source state appends to
    /// its target list. An empty `targets` registers the event name
    /// without making it applicable anywhere.
    pub fn event<I>(mut self, event: E, from: S, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let targets: Vec<S> = targets.into_iter().collect();
        for target in &targets {
            self.push_transition(from.clone(), target.clone());
        }
        self.events.define_event(event, [(from, targets)]);
        self
    }

    /// Register an event in the registry without declaring the underlying
    /// transitions.
    ///
    /// This is the raw registry operation: a candidate target that was
    /// never declared via [`transition`](Self::transition) or
    /// [`event`](Self::event) is rejected by the engine at attempt time
    /// with a hard error rather than a guard rejection.
    pub fn define_event<I>(mut self, event: E, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
    {
        self.events.define_event(event, transitions);
        self
    }

    /// Attach a guard to transitions matched by `from` and `to`.
    ///
    /// Pass a state to match it exactly, or `None` to match any state on
    /// that side. Guards are evaluated in declaration order and every
    /// matching guard must approve an attempt.
    pub fn guard<F>(mut self, from: impl Into<Option<S>>, to: impl Into<Option<S>>, predicate: F) -> Self
    where
        F: Fn(&PendingTransition<'_, S>) -> bool + Send + Sync + 'static,
    {
        self.guards.push(GuardRule {
            from: from.into(),
            to: to.into(),
            guard: Guard::new(predicate),
        });
        self
    }

    /// Build the definition.
    ///
    /// Fails if no initial state was set, or if nothing at all was
    /// declared.
    pub fn build(self) -> Result<Definition<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() && self.events.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(Definition {
            initial,
            transitions: self.transitions,
            guards: self.guards,
            events: self.events,
        })
    }

    fn push_transition(&mut self, from: S, to: S) {
        if !self.transitions.iter().any(|(f, t)| *f == from && *t == to) {
            self.transitions.push((from, to));
        }
    }
}

impl<S: State, E: Event> Default for DefinitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum OrderState {
        Cart,
        Placed,
        Shipped,
    }

    impl State for OrderState {
        fn name(&self) -> &str {
            match self {
                Self::Cart => "Cart",
                Self::Placed => "Placed",
                Self::Shipped => "Shipped",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum OrderEvent {
        Checkout,
        Ship,
    }

    impl Event for OrderEvent {
        fn name(&self) -> &str {
            match self {
                Self::Checkout => "Checkout",
                Self::Ship => "Ship",
            }
        }
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = DefinitionBuilder::<OrderState, OrderEvent>::new()
            .transition(OrderState::Cart, OrderState::Placed)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_some_declaration() {
        let result = DefinitionBuilder::<OrderState, OrderEvent>::new()
            .initial(OrderState::Cart)
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn event_declares_underlying_transitions() {
        let definition = DefinitionBuilder::new()
            .initial(OrderState::Cart)
            .event(
                OrderEvent::Checkout,
                OrderState::Cart,
                [OrderState::Placed],
            )
            .build()
            .unwrap();

        assert!(definition.permits(&OrderState::Cart, &OrderState::Placed));
    }

    #[test]
    fn define_event_leaves_transitions_undeclared() {
        let definition = DefinitionBuilder::new()
            .initial(OrderState::Cart)
            .define_event(
                OrderEvent::Checkout,
                [(OrderState::Cart, vec![OrderState::Placed])],
            )
            .build()
            .unwrap();

        assert!(definition.events().contains(&OrderEvent::Checkout));
        assert!(!definition.permits(&OrderState::Cart, &OrderState::Placed));
    }

    #[test]
    fn duplicate_transitions_collapse() {
        let definition: Definition<OrderState, OrderEvent> = DefinitionBuilder::new()
            .initial(OrderState::Cart)
            .transition(OrderState::Cart, OrderState::Placed)
            .transition(OrderState::Cart, OrderState::Placed)
            .event(
                OrderEvent::Checkout,
                OrderState::Cart,
                [OrderState::Placed],
            )
            .build()
            .unwrap();

        assert_eq!(definition.transitions.len(), 1);
    }

    #[test]
    fn repeated_event_calls_accumulate() {
        let definition = DefinitionBuilder::new()
            .initial(OrderState::Cart)
            .event(
                OrderEvent::Checkout,
                OrderState::Cart,
                [OrderState::Placed],
            )
            .event(
                OrderEvent::Checkout,
                OrderState::Placed,
                [OrderState::Shipped],
            )
            .build()
            .unwrap();

        let sources = definition.events().lookup(&OrderEvent::Checkout).unwrap();
        assert!(sources.contains(&OrderState::Cart));
        assert!(sources.contains(&OrderState::Placed));
    }
}
