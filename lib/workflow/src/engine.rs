//! The workflow engine.
//!
//! Stateless over an immutable registry, so any number of callers may
//! compute available actions concurrently. `apply` mutates only the record
//! it is handed; mutual exclusion between racing writers is the surrounding
//! persistence layer's responsibility.

use crate::error::EngineError;
use crate::record::Workflowable;
use crate::registry::TransitionRegistry;
use crate::state::State;
use crate::transition::Transition;
use chrono::{DateTime, Utc};
use intern_desk_authz::PermissionCheck;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One selectable action for UI rendering.
///
/// The projection of a legal transition that the form layer turns into an
/// action button: the label to show, the transition name to post back, and
/// the state the record would move to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOption {
    /// Unique transition name to request on submission.
    pub transition_name: String,
    /// Human-facing action label.
    pub action_name: String,
    /// The state the transition leads to.
    pub dest_state: State,
}

impl From<&Transition> for ActionOption {
    fn from(transition: &Transition) -> Self {
        Self {
            transition_name: transition.name().to_string(),
            action_name: transition.action_name().to_string(),
            dest_state: transition.dest().clone(),
        }
    }
}

/// The outcome of a successful `apply`.
///
/// Callers dispatch post-transition side effects (cancellation notices,
/// contract regeneration) from this; the engine itself triggers none.
#[derive(Debug, Clone)]
pub struct AppliedTransition<'a> {
    /// The transition that was applied.
    pub transition: &'a Transition,
    /// The record's state before the transition.
    pub previous: State,
    /// The record's state after the transition.
    pub new_state: State,
    /// When the transition was applied.
    pub applied_at: DateTime<Utc>,
}

/// Computes legal transitions and applies requested ones.
///
/// Holds the registry built at startup; immutable afterwards. Actor
/// permissions are supplied per call, so one engine serves every actor.
#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    registry: TransitionRegistry,
}

impl WorkflowEngine {
    /// Creates an engine over a fully-populated registry.
    #[must_use]
    pub fn new(registry: TransitionRegistry) -> Self {
        Self { registry }
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &TransitionRegistry {
        &self.registry
    }

    /// Returns the transitions legal from `state` for the given actor,
    /// sorted ascending by sort index.
    ///
    /// Ties keep registration order (stable sort) so the display order is
    /// deterministic. An empty result is the normal answer for terminal
    /// states, not an error.
    pub fn available_transitions(
        &self,
        state: &State,
        permissions: &impl PermissionCheck,
    ) -> Vec<&Transition> {
        let mut matching: Vec<&Transition> = self
            .registry
            .all()
            .filter(|transition| transition.applies_to(state) && transition.allowed_for(permissions))
            .collect();
        matching.sort_by_key(|transition| transition.sort_index());

        debug!(state = %state, count = matching.len(), "computed available transitions");
        matching
    }

    /// Returns the legal transitions from `state` projected as UI actions.
    pub fn available_actions(
        &self,
        state: &State,
        permissions: &impl PermissionCheck,
    ) -> Vec<ActionOption> {
        self.available_transitions(state, permissions)
            .into_iter()
            .map(ActionOption::from)
            .collect()
    }

    /// Validates and applies the named transition to a record.
    ///
    /// Validation order: the transition must exist, its source must match
    /// the record's current state, and the actor must hold one of its
    /// required permissions. A failed validation leaves the record
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTransition`],
    /// [`EngineError::IllegalTransition`], or
    /// [`EngineError::PermissionDenied`] for the respective validation
    /// failure.
    #[instrument(skip(self, record, permissions), fields(internship = %record.id()))]
    pub fn apply<'a>(
        &'a self,
        record: &mut impl Workflowable,
        transition_name: &str,
        permissions: &impl PermissionCheck,
    ) -> Result<AppliedTransition<'a>, EngineError> {
        let transition =
            self.registry
                .get(transition_name)
                .ok_or_else(|| EngineError::UnknownTransition {
                    name: transition_name.to_string(),
                })?;

        let current = record.current_state();
        if !transition.applies_to(current) {
            return Err(EngineError::IllegalTransition {
                name: transition_name.to_string(),
                current: current.clone(),
            });
        }

        if !transition.allowed_for(permissions) {
            return Err(EngineError::PermissionDenied {
                name: transition_name.to_string(),
                required: transition.required_permissions().to_vec(),
            });
        }

        let previous = current.clone();
        let new_state = transition.dest().clone();
        record.set_state(new_state.clone());

        debug!(from = %previous, to = %new_state, "applied transition");

        Ok(AppliedTransition {
            transition,
            previous,
            new_state,
            applied_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TransitionRegistry;
    use crate::state::TransitionSource;
    use intern_desk_authz::{Permission, PermissionSet};
    use intern_desk_core::InternshipId;

    struct TestRecord {
        id: InternshipId,
        state: State,
    }

    impl TestRecord {
        fn in_state(name: &str) -> Self {
            Self {
                id: InternshipId::new(),
                state: State::new(name),
            }
        }
    }

    impl Workflowable for TestRecord {
        fn id(&self) -> InternshipId {
            self.id
        }

        fn current_state(&self) -> &State {
            &self.state
        }

        fn set_state(&mut self, state: State) {
            self.state = state;
        }
    }

    fn test_engine() -> WorkflowEngine {
        let registry = TransitionRegistry::with_transitions([
            Transition::new(
                "CancelTransition",
                TransitionSource::Any,
                State::new("CancelledState"),
                "Cancel",
            )
            .with_permissions([
                Permission::DeptApprove,
                Permission::SigAuthApprove,
                Permission::Register,
            ])
            .with_sort_index(10),
            Transition::new(
                "DeptApproveTransition",
                State::new("SubmittedState"),
                State::new("DeptApprovedState"),
                "Approve (Department)",
            )
            .with_permissions([Permission::DeptApprove])
            .with_sort_index(1),
        ])
        .expect("distinct names should register");
        WorkflowEngine::new(registry)
    }

    fn dept_actor() -> PermissionSet {
        [Permission::DeptApprove].into_iter().collect()
    }

    #[test]
    fn available_filters_by_state_and_permission() {
        let engine = test_engine();

        let from_submitted =
            engine.available_transitions(&State::new("SubmittedState"), &dept_actor());
        let names: Vec<_> = from_submitted.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["DeptApproveTransition", "CancelTransition"]);

        // From a later state only the wildcard cancel applies
        let from_approved =
            engine.available_transitions(&State::new("DeptApprovedState"), &dept_actor());
        let names: Vec<_> = from_approved.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["CancelTransition"]);
    }

    #[test]
    fn available_is_empty_without_permissions() {
        let engine = test_engine();
        let actions =
            engine.available_transitions(&State::new("SubmittedState"), &PermissionSet::new());
        assert!(actions.is_empty());
    }

    #[test]
    fn available_is_empty_for_terminal_state() {
        let engine = test_engine();
        // No transitions leave CancelledState except the wildcard cancel,
        // which the sample registry still matches; an actor without any
        // permission sees nothing either way.
        let actions =
            engine.available_transitions(&State::new("CancelledState"), &PermissionSet::new());
        assert!(actions.is_empty());
    }

    #[test]
    fn available_sorted_by_sort_index_stable_on_ties() {
        let registry = TransitionRegistry::with_transitions([
            Transition::new("BTransition", State::new("S"), State::new("T"), "B")
                .with_sort_index(5),
            Transition::new("ATransition", State::new("S"), State::new("T"), "A")
                .with_sort_index(5),
            Transition::new("CTransition", State::new("S"), State::new("T"), "C")
                .with_sort_index(1),
        ])
        .expect("distinct names should register");
        let engine = WorkflowEngine::new(registry);

        let names: Vec<_> = engine
            .available_transitions(&State::new("S"), &PermissionSet::new())
            .iter()
            .map(|t| t.name())
            .collect();
        // Ascending by sort index; the tie keeps registration order
        assert_eq!(names, vec!["CTransition", "BTransition", "ATransition"]);
    }

    #[test]
    fn apply_cancel_from_submitted() {
        let engine = test_engine();
        let mut record = TestRecord::in_state("SubmittedState");

        let applied = engine
            .apply(&mut record, "CancelTransition", &dept_actor())
            .expect("cancel should be legal");

        assert_eq!(record.current_state().as_str(), "CancelledState");
        assert_eq!(applied.transition.name(), "CancelTransition");
        assert_eq!(applied.previous, State::new("SubmittedState"));
        assert_eq!(applied.new_state, State::new("CancelledState"));
    }

    #[test]
    fn apply_without_permission_is_denied_and_state_unchanged() {
        let engine = test_engine();
        let mut record = TestRecord::in_state("SubmittedState");

        let result = engine.apply(&mut record, "CancelTransition", &PermissionSet::new());

        assert!(matches!(
            result,
            Err(EngineError::PermissionDenied { ref name, .. }) if name == "CancelTransition"
        ));
        assert_eq!(record.current_state().as_str(), "SubmittedState");
    }

    #[test]
    fn apply_unknown_transition() {
        let engine = test_engine();
        let mut record = TestRecord::in_state("SubmittedState");

        let result = engine.apply(&mut record, "FrobnicateTransition", &dept_actor());

        assert!(matches!(
            result,
            Err(EngineError::UnknownTransition { ref name }) if name == "FrobnicateTransition"
        ));
        assert_eq!(record.current_state().as_str(), "SubmittedState");
    }

    #[test]
    fn apply_from_wrong_state_is_illegal_and_state_unchanged() {
        let engine = test_engine();
        let mut record = TestRecord::in_state("DeptApprovedState");

        let result = engine.apply(&mut record, "DeptApproveTransition", &dept_actor());

        assert!(matches!(
            result,
            Err(EngineError::IllegalTransition { ref current, .. })
                if current == &State::new("DeptApprovedState")
        ));
        assert_eq!(record.current_state().as_str(), "DeptApprovedState");
    }

    #[test]
    fn apply_ungated_transition_with_no_permissions() {
        let registry = TransitionRegistry::with_transitions([Transition::new(
            "ReturnToDraftTransition",
            State::new("SubmittedState"),
            State::new("DraftState"),
            "Return to draft",
        )])
        .expect("single transition should register");
        let engine = WorkflowEngine::new(registry);
        let mut record = TestRecord::in_state("SubmittedState");

        engine
            .apply(&mut record, "ReturnToDraftTransition", &PermissionSet::new())
            .expect("ungated transition should be allowed for everyone");
        assert_eq!(record.current_state().as_str(), "DraftState");
    }

    #[test]
    fn action_options_serialize_for_ui() {
        let engine = test_engine();
        let actions = engine.available_actions(&State::new("DeptApprovedState"), &dept_actor());

        assert_eq!(actions.len(), 1);
        let json = serde_json::to_string(&actions[0]).expect("serialize");
        assert_eq!(
            json,
            "{\"transitionName\":\"CancelTransition\",\"actionName\":\"Cancel\",\"destState\":\"CancelledState\"}"
        );
    }
}
