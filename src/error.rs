//! Error types for fsentity
//!
//! Domain-specific error types using thiserror.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem entity errors
///
/// Every variant carries the path the failing operation targeted. OS
/// failures are classified once, at the call site that observed them
/// (see [`EntityError::from_io`]); nothing is retried or suppressed.
#[derive(Error, Debug)]
pub enum EntityError {
    /// The path, or a required ancestor, does not exist
    #[error("Not found: '{path}': {error}")]
    NotFound { path: PathBuf, error: String },

    /// The operation is blocked by filesystem access control
    #[error("Permission denied for '{path}': {error}")]
    PermissionDenied { path: PathBuf, error: String },

    /// Empty-only removal was requested on a non-empty directory
    #[error("Directory not empty: '{path}'")]
    DirectoryNotEmpty { path: PathBuf },

    /// Non-empty directory removal is intentionally unimplemented
    #[error("Removing a non-empty directory is not supported: '{path}'")]
    RemoveNonEmptyUnsupported { path: PathBuf },

    /// Any other IO failure, with path context
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

impl EntityError {
    /// Classify an `io::Error` raised for `path` into an entity error.
    pub(crate) fn from_io(path: &Path, error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
                error: error.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                error: error.to_string(),
            },
            io::ErrorKind::DirectoryNotEmpty => Self::DirectoryNotEmpty {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                error: error.to_string(),
            },
        }
    }

    /// The path the failing operation targeted
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::DirectoryNotEmpty { path }
            | Self::RemoveNonEmptyUnsupported { path }
            | Self::Io { path, .. } => path,
        }
    }
}
