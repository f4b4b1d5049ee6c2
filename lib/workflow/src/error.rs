//! Error types for the workflow crate.
//!
//! Two layers, matching who can act on them:
//! - `RegistryError`: Startup misconfiguration (fatal; fix the catalog)
//! - `EngineError`: Per-request validation failures, reported to the caller
//!   as distinct kinds so it can render the right user-facing message
//!
//! None of these trigger automatic retries, and a failed validation never
//! touches the record.

use crate::state::State;
use intern_desk_authz::Permission;
use std::fmt;

/// Errors from transition registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two transitions were registered under the same name.
    DuplicateTransition { name: String },
    /// A transition's destination is the wildcard.
    ///
    /// The wildcard is only meaningful as a source; a record can never be
    /// moved "to any state".
    WildcardDestination { name: String },
    /// A transition's action name is empty.
    EmptyActionName { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTransition { name } => {
                write!(f, "duplicate transition registration: {name}")
            }
            Self::WildcardDestination { name } => {
                write!(f, "transition {name} has the wildcard as its destination")
            }
            Self::EmptyActionName { name } => {
                write!(f, "transition {name} has an empty action name")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors from applying a transition to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested transition name is not in the registry.
    UnknownTransition { name: String },
    /// The transition's source does not match the record's current state.
    ///
    /// This guards against skipping states and against replaying a stale UI
    /// action after the record's state changed concurrently.
    IllegalTransition { name: String, current: State },
    /// The actor holds none of the transition's required permissions.
    PermissionDenied {
        name: String,
        required: Vec<Permission>,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTransition { name } => {
                write!(f, "unknown transition: {name}")
            }
            Self::IllegalTransition { name, current } => {
                write!(f, "transition {name} is not legal from state {current}")
            }
            Self::PermissionDenied { name, required } => {
                let names: Vec<_> = required.iter().map(Permission::as_str).collect();
                write!(
                    f,
                    "transition {name} requires one of [{}]",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_display() {
        let err = RegistryError::DuplicateTransition {
            name: "CancelTransition".to_string(),
        };
        assert!(err.to_string().contains("duplicate transition"));
        assert!(err.to_string().contains("CancelTransition"));
    }

    #[test]
    fn wildcard_destination_display() {
        let err = RegistryError::WildcardDestination {
            name: "BadTransition".to_string(),
        };
        assert!(err.to_string().contains("wildcard as its destination"));
    }

    #[test]
    fn empty_action_name_display() {
        let err = RegistryError::EmptyActionName {
            name: "BadTransition".to_string(),
        };
        assert!(err.to_string().contains("empty action name"));
    }

    #[test]
    fn unknown_transition_display() {
        let err = EngineError::UnknownTransition {
            name: "FrobnicateTransition".to_string(),
        };
        assert!(err.to_string().contains("unknown transition"));
    }

    #[test]
    fn illegal_transition_display() {
        let err = EngineError::IllegalTransition {
            name: "RegisterTransition".to_string(),
            current: State::new("SubmittedState"),
        };
        assert!(err.to_string().contains("not legal from state SubmittedState"));
    }

    #[test]
    fn permission_denied_display() {
        let err = EngineError::PermissionDenied {
            name: "CancelTransition".to_string(),
            required: vec![Permission::DeptApprove, Permission::Register],
        };
        assert!(err.to_string().contains("dept_approve, register"));
    }
}
