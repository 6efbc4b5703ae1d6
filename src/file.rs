//! File handles
//!
//! A [`File`] is a path plus a construction-time existence snapshot.
//! Content never stays in memory between calls; every read and write
//! opens and closes the underlying file within the method body.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entity::{apply_create_options, Creatable, CreateOptions, Entity};
use crate::error::EntityError;

/// Handle to a single file on the filesystem
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    existed: bool,
}

impl File {
    /// Create a handle for `path` without touching the filesystem.
    ///
    /// The path is stored verbatim (no normalization) and must be
    /// non-empty. The existence snapshot is taken here, once.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug_assert!(!path.as_os_str().is_empty(), "file path must be non-empty");
        let existed = path.exists();
        Self { path, existed }
    }

    /// Create a handle and apply construction-time creation policy.
    ///
    /// With `create_ancestors`, missing parent directories are created
    /// first; with `create`, a missing file is then established empty.
    /// An existing file is never touched, so this path never truncates.
    pub fn with_options(
        path: impl Into<PathBuf>,
        options: CreateOptions,
    ) -> Result<Self, EntityError> {
        let file = Self::new(path);
        apply_create_options(&file, options)?;
        Ok(file)
    }

    /// Replace the file's content with `content`.
    ///
    /// Open-truncate-write-close. Creates the file when missing, but
    /// not its ancestors; fails with [`EntityError::NotFound`] when an
    /// ancestor directory is missing.
    pub fn write(&self, content: &str) -> Result<(), EntityError> {
        tracing::debug!(
            "Writing {} bytes to {}",
            content.len(),
            self.path.display()
        );
        fs::write(&self.path, content).map_err(|e| EntityError::from_io(&self.path, &e))
    }

    /// Read the file's entire content.
    ///
    /// Open-read-close, no streaming. Fails with
    /// [`EntityError::NotFound`] when the file is absent.
    pub fn read(&self) -> Result<String, EntityError> {
        fs::read_to_string(&self.path).map_err(|e| EntityError::from_io(&self.path, &e))
    }

    /// Delete the file.
    ///
    /// Fails with [`EntityError::NotFound`] when the file is absent.
    pub fn remove(&self) -> Result<(), EntityError> {
        tracing::debug!("Removing file: {}", self.path.display());
        fs::remove_file(&self.path).map_err(|e| EntityError::from_io(&self.path, &e))
    }
}

impl Entity for File {
    fn path(&self) -> &Path {
        &self.path
    }

    fn existed_at_construction(&self) -> bool {
        self.existed
    }
}

impl Creatable for File {
    /// Write the empty string, establishing an empty file.
    ///
    /// Destructive when called directly on a non-empty file: the content
    /// is truncated. The constructor path guards with an existence check
    /// and only invokes this for absent files.
    fn make(&self) -> Result<(), EntityError> {
        self.write("")
    }
}
