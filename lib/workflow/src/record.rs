//! The record-side contract of the workflow engine.

use crate::state::State;
use intern_desk_core::InternshipId;

/// An entity whose state field the workflow engine manages.
///
/// The engine reads and writes only the workflow state; everything else on
/// the record belongs to the surrounding application, as does persisting the
/// new state and guarding against concurrent writers (e.g. with an
/// optimistic version check).
pub trait Workflowable {
    /// Returns the record's identity.
    fn id(&self) -> InternshipId;

    /// Returns the record's current workflow state.
    fn current_state(&self) -> &State;

    /// Replaces the record's workflow state.
    ///
    /// Called by the engine only after a transition has passed validation.
    fn set_state(&mut self, state: State);
}
