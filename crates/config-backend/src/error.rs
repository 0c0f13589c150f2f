//! Error types for config-backend

use std::path::PathBuf;

/// Result type for config-backend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a backend
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural error from the tree model
    #[error(transparent)]
    Tree(#[from] config_tree::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    /// The backend cannot perform this shape of operation
    #[error("The {backend} backend does not support {operation}")]
    UnsupportedOperation {
        backend: &'static str,
        operation: String,
    },

    /// Connection or transport failure, passed through untouched
    #[error("The {backend} backend is unavailable: {message}")]
    BackendUnavailable { backend: String, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported(backend: &'static str, operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            backend,
            operation: operation.into(),
        }
    }

    pub fn unavailable(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Tree(err) if err.is_not_found())
    }
}
