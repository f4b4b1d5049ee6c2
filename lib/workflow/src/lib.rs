//! Approval workflow engine for the intern-desk application.
//!
//! This crate provides the state-transition layer that governs how an
//! internship record moves through its approval pipeline, including:
//!
//! - **States**: Opaque named nodes in the workflow graph
//! - **Transitions**: Permission-gated edges, declared as data
//! - **Registry**: The read-only catalog of registered transitions
//! - **Engine**: Computes legal actions and applies requested transitions
//! - **Catalog**: The internship approval pipeline's standard transitions
//!
//! The engine is pure synchronous computation: it performs no I/O and
//! triggers no side effects. Callers dispatch notifications, contract
//! regeneration, and persistence from the returned [`AppliedTransition`].

pub mod engine;
pub mod error;
pub mod internship;
pub mod record;
pub mod registry;
pub mod state;
pub mod transition;

pub use engine::{ActionOption, AppliedTransition, WorkflowEngine};
pub use error::{EngineError, RegistryError};
pub use record::Workflowable;
pub use registry::TransitionRegistry;
pub use state::{State, TransitionSource};
pub use transition::Transition;
