//! Authorization error types.

use std::fmt;

/// Authorization errors.
#[derive(Debug)]
pub enum AuthzError {
    /// A permission name not present in the vocabulary.
    UnknownPermission {
        /// The name that failed to resolve.
        name: String,
    },
}

impl fmt::Display for AuthzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPermission { name } => {
                write!(f, "unknown permission name '{}'", name)
            }
        }
    }
}

impl std::error::Error for AuthzError {}
