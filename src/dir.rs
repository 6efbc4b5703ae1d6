//! Directory handles
//!
//! A [`Dir`] is a path plus a construction-time existence snapshot.
//! Listings are read from the filesystem on every call and returned in
//! filesystem order; nothing is cached, so results can be stale the
//! instant they are returned.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entity::{apply_create_options, Creatable, CreateOptions, Entity};
use crate::error::EntityError;
use crate::file::File;

/// Handle to a directory on the filesystem
#[derive(Debug, Clone)]
pub struct Dir {
    path: PathBuf,
    existed: bool,
}

/// A typed child handle produced by [`Dir::all`]
///
/// Children that are directories become [`Entry::Dir`]; everything else
/// becomes [`Entry::File`].
#[derive(Debug)]
pub enum Entry {
    /// Child that is currently a regular file (or an unclassified entry)
    File(File),
    /// Child that is currently a directory
    Dir(Dir),
}

impl Dir {
    /// Create a handle for `path` without touching the filesystem.
    ///
    /// The path is stored verbatim (no normalization) and must be
    /// non-empty. The existence snapshot is taken here, once.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug_assert!(
            !path.as_os_str().is_empty(),
            "directory path must be non-empty"
        );
        let existed = path.exists();
        Self { path, existed }
    }

    /// Create a handle and apply construction-time creation policy.
    ///
    /// With `create_ancestors`, missing parent directories are created
    /// first; with `create`, the directory itself is then created if
    /// absent. An existing directory is left untouched.
    pub fn with_options(
        path: impl Into<PathBuf>,
        options: CreateOptions,
    ) -> Result<Self, EntityError> {
        let dir = Self::new(path);
        apply_create_options(&dir, options)?;
        Ok(dir)
    }

    /// Names of all direct children, excluding `.` and `..`.
    ///
    /// Filesystem listing order: unspecified and not guaranteed stable.
    /// Non-UTF-8 names are lossily converted.
    pub fn all_names(&self) -> Result<Vec<String>, EntityError> {
        let names = self
            .read_entries()?
            .iter()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    /// Paths of all direct children: this directory's path joined with
    /// each child name, in the same order as [`all_names`](Dir::all_names).
    pub fn all_paths(&self) -> Result<Vec<PathBuf>, EntityError> {
        let paths = self
            .read_entries()?
            .iter()
            .map(fs::DirEntry::path)
            .collect();
        Ok(paths)
    }

    /// Subset of [`all_paths`](Dir::all_paths) that are currently
    /// regular files. Symbolic links are classified by their target.
    pub fn file_paths(&self) -> Result<Vec<PathBuf>, EntityError> {
        let paths = self
            .all_paths()?
            .into_iter()
            .filter(|path| path.is_file())
            .collect();
        Ok(paths)
    }

    /// Base names of [`file_paths`](Dir::file_paths).
    pub fn file_names(&self) -> Result<Vec<String>, EntityError> {
        let names = self
            .file_paths()?
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    /// Subset of [`all_paths`](Dir::all_paths) that are currently
    /// directories.
    pub fn dir_paths(&self) -> Result<Vec<PathBuf>, EntityError> {
        let paths = self
            .all_paths()?
            .into_iter()
            .filter(|path| path.is_dir())
            .collect();
        Ok(paths)
    }

    /// Typed handles for all direct children, in
    /// [`all_paths`](Dir::all_paths) order.
    pub fn all(&self) -> Result<Vec<Entry>, EntityError> {
        let entries = self
            .all_paths()?
            .into_iter()
            .map(|path| {
                if path.is_dir() {
                    Entry::Dir(Dir::new(path))
                } else {
                    Entry::File(File::new(path))
                }
            })
            .collect();
        Ok(entries)
    }

    /// Remove the directory.
    ///
    /// With `remove_non_empty` false, only an empty directory is
    /// removed; a populated one fails with
    /// [`EntityError::DirectoryNotEmpty`] and is left untouched.
    ///
    /// Passing `remove_non_empty` as true always fails with
    /// [`EntityError::RemoveNonEmptyUnsupported`] before touching the
    /// filesystem: recursive removal is intentionally unimplemented.
    pub fn remove(&self, remove_non_empty: bool) -> Result<(), EntityError> {
        if remove_non_empty {
            return Err(EntityError::RemoveNonEmptyUnsupported {
                path: self.path.clone(),
            });
        }
        tracing::debug!("Removing directory: {}", self.path.display());
        fs::remove_dir(&self.path).map_err(|e| EntityError::from_io(&self.path, &e))
    }

    /// Read and collect the raw directory entries for one listing call.
    fn read_entries(&self) -> Result<Vec<fs::DirEntry>, EntityError> {
        let reader = fs::read_dir(&self.path).map_err(|e| EntityError::from_io(&self.path, &e))?;
        let mut entries = Vec::new();
        for entry in reader {
            entries.push(entry.map_err(|e| EntityError::from_io(&self.path, &e))?);
        }
        Ok(entries)
    }
}

impl Entity for Dir {
    fn path(&self) -> &Path {
        &self.path
    }

    fn existed_at_construction(&self) -> bool {
        self.existed
    }
}

impl Creatable for Dir {
    /// Create a single directory level.
    ///
    /// Fails with [`EntityError::NotFound`] when the parent is missing;
    /// `create_ancestors` at construction exists to avoid exactly that.
    fn make(&self) -> Result<(), EntityError> {
        tracing::debug!("Creating directory: {}", self.path.display());
        fs::create_dir(&self.path).map_err(|e| EntityError::from_io(&self.path, &e))
    }
}

impl Entry {
    /// Whether this child was classified as a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this child was classified as a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// The inner file handle, if this child is one.
    #[must_use]
    pub fn into_file(self) -> Option<File> {
        match self {
            Self::File(file) => Some(file),
            Self::Dir(_) => None,
        }
    }

    /// The inner directory handle, if this child is one.
    #[must_use]
    pub fn into_dir(self) -> Option<Dir> {
        match self {
            Self::Dir(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}

impl Entity for Entry {
    fn path(&self) -> &Path {
        match self {
            Self::File(file) => file.path(),
            Self::Dir(dir) => dir.path(),
        }
    }

    fn existed_at_construction(&self) -> bool {
        match self {
            Self::File(file) => file.existed_at_construction(),
            Self::Dir(dir) => dir.existed_at_construction(),
        }
    }
}
