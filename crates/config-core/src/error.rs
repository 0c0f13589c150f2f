//! Error types for config-core

use std::path::PathBuf;

/// Result type for config-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accessing configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URI names a scheme no backend is known for
    #[error("Unknown configuration backend scheme: {scheme}")]
    UnknownScheme { scheme: String },

    #[error("Invalid configuration URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Settings file with an extension we cannot parse
    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to parse {format} settings at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Failed to serialize {format} settings for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    // Transparent wrappers for underlying crate errors
    /// Model error from config-tree
    #[error(transparent)]
    Tree(#[from] config_tree::Error),

    /// Driver error from config-backend
    #[error(transparent)]
    Backend(#[from] config_backend::Error),
}

impl Error {
    pub(crate) fn invalid_uri(uri: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUri {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this is the recoverable "nothing stored at this path" case.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Tree(err) => err.is_not_found(),
            Self::Backend(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Whether the backend reported that it cannot perform the operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::Backend(config_backend::Error::UnsupportedOperation { .. })
        )
    }
}
