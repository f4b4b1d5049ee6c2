//! The transition registry.
//!
//! The registry is the static catalog of every transition the domain knows
//! about. It is populated once at startup and read-only afterwards; it does
//! no permission or state filtering itself, which keeps one registry
//! reusable across all actors and records.

use crate::error::RegistryError;
use crate::state::WILDCARD;
use crate::transition::Transition;
use std::collections::HashMap;

/// Ordered catalog of registered transitions, keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct TransitionRegistry {
    transitions: Vec<Transition>,
    by_name: HashMap<String, usize>,
}

impl TransitionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a sequence of transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if two transitions share a name.
    pub fn with_transitions(
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for transition in transitions {
            registry.register(transition)?;
        }
        Ok(registry)
    }

    /// Registers a transition.
    ///
    /// Registration is where the declared-transition invariants are
    /// enforced: the destination must be a concrete state (the wildcard is
    /// only meaningful as a source) and the action name must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition violates an invariant or if a
    /// transition with the same name is already registered. All of these
    /// are startup misconfiguration and should abort initialization.
    pub fn register(&mut self, transition: Transition) -> Result<(), RegistryError> {
        if transition.dest().as_str() == WILDCARD {
            return Err(RegistryError::WildcardDestination {
                name: transition.name().to_string(),
            });
        }
        if transition.action_name().is_empty() {
            return Err(RegistryError::EmptyActionName {
                name: transition.name().to_string(),
            });
        }
        if self.by_name.contains_key(transition.name()) {
            return Err(RegistryError::DuplicateTransition {
                name: transition.name().to_string(),
            });
        }
        self.by_name
            .insert(transition.name().to_string(), self.transitions.len());
        self.transitions.push(transition);
        Ok(())
    }

    /// Returns all transitions in registration order.
    ///
    /// Registration order is not display order; display ordering by sort
    /// index is the engine's job.
    pub fn all(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// Looks up a transition by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Transition> {
        self.by_name
            .get(name)
            .and_then(|&index| self.transitions.get(index))
    }

    /// Returns the number of registered transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if no transitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
