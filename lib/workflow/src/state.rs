//! Workflow states and transition sources.
//!
//! States are opaque identifiers; the engine never enumerates them. The set
//! of reachable states is implicit in the sources and destinations of the
//! registered transitions. The wildcard `*` is not a state: it only appears
//! as a transition source, meaning "from any state".

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wildcard source marker in string form.
pub const WILDCARD: &str = "*";

/// A named node in the workflow graph.
///
/// The name is the value stored in the record's state field (e.g.
/// `"SubmittedState"`), so it is part of the application's persisted
/// vocabulary and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Creates a state from its name.
    ///
    /// The wildcard `*` is reserved for [`TransitionSource::Any`] and must
    /// not be used as a state name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the state name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The source side of a transition: a concrete state or the wildcard.
///
/// String form is the state name, or `*` for the wildcard, matching how the
/// application's transition tables spell it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransitionSource {
    /// Matches any current state (e.g. cancellation).
    Any,
    /// Matches exactly one state.
    From(State),
}

impl TransitionSource {
    /// Returns true if a record in `state` may take a transition with this
    /// source.
    #[must_use]
    pub fn matches(&self, state: &State) -> bool {
        match self {
            Self::Any => true,
            Self::From(source) => source == state,
        }
    }
}

impl From<String> for TransitionSource {
    fn from(name: String) -> Self {
        if name == WILDCARD {
            Self::Any
        } else {
            Self::From(State::new(name))
        }
    }
}

impl From<State> for TransitionSource {
    fn from(state: State) -> Self {
        // A state carrying the wildcard name is the wildcard
        if state.as_str() == WILDCARD {
            Self::Any
        } else {
            Self::From(state)
        }
    }
}

impl From<TransitionSource> for String {
    fn from(source: TransitionSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for TransitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "{}", WILDCARD),
            Self::From(state) => write!(f, "{}", state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_source_matches_only_its_state() {
        let source = TransitionSource::from(State::new("SubmittedState"));
        assert!(source.matches(&State::new("SubmittedState")));
        assert!(!source.matches(&State::new("CancelledState")));
    }

    #[test]
    fn wildcard_source_matches_everything() {
        let source = TransitionSource::Any;
        assert!(source.matches(&State::new("SubmittedState")));
        assert!(source.matches(&State::new("RegisteredState")));
    }

    #[test]
    fn source_from_wildcard_string() {
        let source = TransitionSource::from("*".to_string());
        assert_eq!(source, TransitionSource::Any);
    }

    #[test]
    fn source_from_wildcard_named_state_normalizes_to_any() {
        let source = TransitionSource::from(State::new("*"));
        assert_eq!(source, TransitionSource::Any);
    }

    #[test]
    fn source_display_forms() {
        assert_eq!(TransitionSource::Any.to_string(), "*");
        let source = TransitionSource::from(State::new("DeptApprovedState"));
        assert_eq!(source.to_string(), "DeptApprovedState");
    }

    #[test]
    fn state_serde_is_transparent() {
        let state = State::new("SubmittedState");
        let json = serde_json::to_string(&state).expect("serialize");
        assert_eq!(json, "\"SubmittedState\"");
    }

    #[test]
    fn source_serde_uses_string_form() {
        let json = serde_json::to_string(&TransitionSource::Any).expect("serialize");
        assert_eq!(json, "\"*\"");
        let parsed: TransitionSource = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, TransitionSource::Any);

        let parsed: TransitionSource =
            serde_json::from_str("\"SubmittedState\"").expect("deserialize");
        assert_eq!(parsed, TransitionSource::From(State::new("SubmittedState")));
    }
}
