//! Permission vocabulary and capability checks for intern-desk.
//!
//! This crate defines the named permissions the internship workflow cares
//! about and the `PermissionCheck` capability interface consumed by the
//! workflow engine. Resolving a user's roles into permissions is the
//! authentication subsystem's job; this crate only models the result.

mod error;
mod types;

pub use error::AuthzError;
pub use types::{Permission, PermissionCheck, PermissionSet};
