//! Permission types for the internship approval workflow.

use crate::error::AuthzError;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A named permission in the internship workflow.
///
/// The string forms are the permission names the surrounding application
/// stores against user roles (e.g. in its roles table), so they are part of
/// the application's wire vocabulary and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Approve an internship on behalf of the academic department.
    DeptApprove,
    /// Approve an internship as a signature authority.
    SigAuthApprove,
    /// Register an approved internship with the registrar.
    Register,
}

impl Permission {
    /// Returns the stable permission name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeptApprove => "dept_approve",
            Self::SigAuthApprove => "sig_auth_approve",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dept_approve" => Ok(Self::DeptApprove),
            "sig_auth_approve" => Ok(Self::SigAuthApprove),
            "register" => Ok(Self::Register),
            other => Err(AuthzError::UnknownPermission {
                name: other.to_string(),
            }),
        }
    }
}

/// Capability interface for permission checks.
///
/// The workflow engine only ever asks "does this actor hold this
/// permission", so any authorization backend can sit behind this trait.
pub trait PermissionCheck {
    /// Returns true if the actor holds the given permission.
    fn has(&self, permission: Permission) -> bool;

    /// Returns true if the actor holds at least one of the given permissions.
    fn has_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has(*p))
    }
}

/// The set of permissions granted to an authenticated actor.
///
/// Supplied per call by the caller after it resolves the actor's roles;
/// the workflow engine holds no session state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants a permission.
    pub fn grant(&mut self, permission: Permission) {
        self.granted.insert(permission);
    }

    /// Parses a set from permission names.
    ///
    /// This is the entry point for callers holding the raw names stored
    /// against a user's roles.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is not in the permission vocabulary.
    pub fn from_names<I, S>(names: I) -> Result<Self, Report<AuthzError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.grant(name.as_ref().parse()?);
        }
        Ok(set)
    }

    /// Returns the number of granted permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.granted.len()
    }

    /// Returns true if no permissions are granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl PermissionCheck for PermissionSet {
    fn has(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}
