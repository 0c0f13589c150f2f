//! Error types for config-tree

use crate::leaf::LeafKind;
use crate::node::NodeKind;

/// Result type for config-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or querying configuration trees
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Nothing is stored at the path
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// A value is stored at the path but it cannot be read as the requested type
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// A leaf was used where a branch was expected, or the other way round
    #[error("Wrong node variant: expected {expected}, found {found}")]
    WrongVariant { expected: NodeKind, found: NodeKind },

    /// Two children of one branch share a name
    #[error("Duplicate key in branch: {key}")]
    DuplicateKey { key: String },

    /// A child name is empty or contains the path separator
    #[error("Invalid key name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A flat key cannot be placed in the tree without overwriting another one
    #[error("Conflicting path {path}: {reason}")]
    ConflictingPath { path: String, reason: String },
}

impl Error {
    pub fn not_found(path: impl ToString) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    pub fn type_mismatch(path: impl ToString, expected: &'static str, found: LeafKind) -> Self {
        Self::TypeMismatch {
            path: path.to_string(),
            expected,
            found: found.to_string(),
        }
    }

    pub fn conflicting(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::ConflictingPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason,
        }
    }

    /// Whether this is the recoverable "nothing stored here" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
