//! Transition definitions.
//!
//! A transition is a declared, permission-gated edge in the workflow graph:
//! a source state (or wildcard), a destination state, a human-facing action
//! label, the permissions that allow it (any-of), and a sort index for
//! display ordering. Transitions are plain data; no transition carries
//! custom behavior beyond its declared fields.

use crate::state::{State, TransitionSource};
use intern_desk_authz::{Permission, PermissionCheck};
use serde::{Deserialize, Serialize};

/// A declared state change in the approval workflow.
///
/// Immutable after construction. The `name` uniquely identifies the
/// transition type within a registry (e.g. `"CancelTransition"`); the
/// `action_name` is the label shown to users (e.g. `"Cancel"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    name: String,
    source: TransitionSource,
    dest: State,
    action_name: String,
    required_permissions: Vec<Permission>,
    sort_index: i32,
}

impl Transition {
    /// Creates a transition with no required permissions and sort index 0.
    ///
    /// An empty required-permission list means the transition is always
    /// allowed; gate it with [`Transition::with_permissions`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source: impl Into<TransitionSource>,
        dest: State,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            dest,
            action_name: action_name.into(),
            required_permissions: Vec::new(),
            sort_index: 0,
        }
    }

    /// Sets the permissions that allow this transition (actor needs any one).
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.required_permissions = permissions.into_iter().collect();
        self
    }

    /// Sets the sort index (ascending = higher display priority).
    #[must_use]
    pub fn with_sort_index(mut self, sort_index: i32) -> Self {
        self.sort_index = sort_index;
        self
    }

    /// Returns the unique transition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source state pattern.
    #[must_use]
    pub fn source(&self) -> &TransitionSource {
        &self.source
    }

    /// Returns the destination state.
    #[must_use]
    pub fn dest(&self) -> &State {
        &self.dest
    }

    /// Returns the human-facing action label.
    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Returns the permissions that allow this transition.
    #[must_use]
    pub fn required_permissions(&self) -> &[Permission] {
        &self.required_permissions
    }

    /// Returns the sort index.
    #[must_use]
    pub fn sort_index(&self) -> i32 {
        self.sort_index
    }

    /// Returns true if this transition may be taken from `state`.
    #[must_use]
    pub fn applies_to(&self, state: &State) -> bool {
        self.source.matches(state)
    }

    /// Returns true if the actor holds at least one required permission.
    ///
    /// A transition with no required permissions is allowed for everyone.
    pub fn allowed_for(&self, permissions: &impl PermissionCheck) -> bool {
        self.required_permissions.is_empty() || permissions.has_any(&self.required_permissions)
    }
}
