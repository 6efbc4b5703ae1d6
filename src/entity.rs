//! Shared entity behavior
//!
//! The read-only surface common to file and directory handles, the
//! creation primitive each concrete type supplies, and the
//! construction-time creation policy that ties the two together.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dir::Dir;
use crate::error::EntityError;

/// Construction-time creation flags
///
/// Both flags default to off; a plain `new` constructor never touches
/// the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOptions {
    /// Create the entity itself if it does not exist
    pub create: bool,
    /// Create missing ancestor directories first
    pub create_ancestors: bool,
}

/// Read-only surface shared by every filesystem handle
///
/// All provided methods are functions of [`path`](Entity::path) plus the
/// current filesystem state; nothing is cached between calls.
pub trait Entity {
    /// The path this handle points at, exactly as given at construction.
    fn path(&self) -> &Path;

    /// Whether the path resolved to an existing filesystem object when
    /// this handle was constructed.
    ///
    /// A frozen snapshot: creating or removing the entity later, through
    /// this handle or externally, never updates it.
    fn existed_at_construction(&self) -> bool;

    /// Whether the path currently resolves to any filesystem object.
    fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Handle for the containing directory.
    ///
    /// Pure path decomposition; no filesystem access, no creation flags.
    /// The filesystem root is its own parent; a bare relative component
    /// yields a handle to the empty path.
    fn parent_dir(&self) -> Dir {
        let parent = self.path().parent().unwrap_or(self.path());
        Dir::new(parent)
    }

    /// Last modification time as whole seconds since the Unix epoch.
    ///
    /// Queried fresh on every call. Fails with [`EntityError::NotFound`]
    /// when the entity does not currently exist. Pre-epoch timestamps
    /// clamp to 0.
    fn last_modified(&self) -> Result<u64, EntityError> {
        let metadata =
            fs::metadata(self.path()).map_err(|e| EntityError::from_io(self.path(), &e))?;
        let modified = metadata
            .modified()
            .map_err(|e| EntityError::from_io(self.path(), &e))?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0))
    }

    /// Seconds elapsed since the last modification, measured at call time.
    ///
    /// Saturates at 0 for modification times in the future.
    fn seconds_since_modified(&self) -> Result<u64, EntityError> {
        let modified = self.last_modified()?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Ok(now.saturating_sub(modified))
    }

    /// Whether the current process may write to the existing path.
    ///
    /// `false` when the path is missing or its metadata cannot be read.
    /// Approximated from the permission bits, so the answer is
    /// platform-dependent under ACLs or when running as root.
    fn is_writable(&self) -> bool {
        fs::metadata(self.path())
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }
}

/// Creation capability for entity types that can be brought into
/// existence on demand.
pub trait Creatable: Entity {
    /// Creation primitive: establish the entity at [`path`](Entity::path).
    ///
    /// Creates the entity itself only; ancestors must already exist.
    fn make(&self) -> Result<(), EntityError>;

    /// Create the full chain of missing ancestor directories above the
    /// entity's path.
    fn make_ancestor_dirs(&self) -> Result<(), EntityError> {
        let parent = self.parent_dir();
        tracing::debug!("Creating ancestor directories: {}", parent.path().display());
        fs::create_dir_all(parent.path()).map_err(|e| EntityError::from_io(parent.path(), &e))
    }
}

/// Apply construction-time creation policy to a freshly built handle.
///
/// Ancestor creation runs strictly before self-creation, so creating an
/// entity deep inside a missing directory chain succeeds in one call.
/// Self-creation is guarded by an existence check; an entity that
/// already exists is left untouched.
pub fn apply_create_options<E: Creatable>(
    entity: &E,
    options: CreateOptions,
) -> Result<(), EntityError> {
    if options.create_ancestors && !entity.parent_dir().exists() {
        entity.make_ancestor_dirs()?;
    }
    if options.create && !entity.exists() {
        entity.make()?;
    }
    Ok(())
}
