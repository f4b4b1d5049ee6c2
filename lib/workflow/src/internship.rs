//! The internship approval pipeline's standard transition catalog.
//!
//! The pipeline is linear: submitted, department-approved, signature
//! authority-approved, registered. Cancellation is reachable from any state
//! via a wildcard source. `CancelledState` and `RegisteredState` are
//! absorbing: no pipeline transitions leave them.
//!
//! Transitions are rows of data here rather than one type per transition;
//! none of them carries behavior beyond its declared fields.

use crate::error::RegistryError;
use crate::registry::TransitionRegistry;
use crate::state::{State, TransitionSource};
use crate::transition::Transition;
use intern_desk_authz::Permission;

/// Transition name for department approval.
pub const DEPT_APPROVE_TRANSITION: &str = "DeptApproveTransition";
/// Transition name for signature authority approval.
pub const SIG_AUTH_APPROVE_TRANSITION: &str = "SigAuthApproveTransition";
/// Transition name for registrar registration.
pub const REGISTER_TRANSITION: &str = "RegisterTransition";
/// Transition name for cancellation.
pub const CANCEL_TRANSITION: &str = "CancelTransition";

/// Pipeline state constructors.
///
/// The names are the values stored in the internship record's state field.
pub mod states {
    use super::State;

    /// Awaiting department review.
    #[must_use]
    pub fn submitted() -> State {
        State::new("SubmittedState")
    }

    /// Approved by the academic department.
    #[must_use]
    pub fn dept_approved() -> State {
        State::new("DeptApprovedState")
    }

    /// Approved by a signature authority.
    #[must_use]
    pub fn sig_auth_approved() -> State {
        State::new("SigAuthApprovedState")
    }

    /// Registered with the registrar. Absorbing.
    #[must_use]
    pub fn registered() -> State {
        State::new("RegisteredState")
    }

    /// Cancelled. Absorbing; reachable from any state.
    #[must_use]
    pub fn cancelled() -> State {
        State::new("CancelledState")
    }
}

/// Builds the standard internship transition registry.
///
/// # Errors
///
/// Returns an error if the catalog registers a duplicate name, which is a
/// fatal startup misconfiguration.
pub fn standard_registry() -> Result<TransitionRegistry, RegistryError> {
    TransitionRegistry::with_transitions([
        Transition::new(
            DEPT_APPROVE_TRANSITION,
            states::submitted(),
            states::dept_approved(),
            "Approve (Department)",
        )
        .with_permissions([Permission::DeptApprove])
        .with_sort_index(1),
        Transition::new(
            SIG_AUTH_APPROVE_TRANSITION,
            states::dept_approved(),
            states::sig_auth_approved(),
            "Approve (Signature Authority)",
        )
        .with_permissions([Permission::SigAuthApprove])
        .with_sort_index(2),
        Transition::new(
            REGISTER_TRANSITION,
            states::sig_auth_approved(),
            states::registered(),
            "Register",
        )
        .with_permissions([Permission::Register])
        .with_sort_index(3),
        Transition::new(
            CANCEL_TRANSITION,
            TransitionSource::Any,
            states::cancelled(),
            "Cancel",
        )
        .with_permissions([
            Permission::DeptApprove,
            Permission::SigAuthApprove,
            Permission::Register,
        ])
        .with_sort_index(10),
    ])
}
