//! Fsentity - typed handles for files and directories
//!
//! This library provides lightweight handles over filesystem entities:
//! existence checks, modification-time queries, creation-on-demand at
//! construction time, file content access, and directory listing.
//!
//! Every operation is a direct, synchronous passthrough to a single
//! `std::fs` call. A handle holds a path and a construction-time
//! existence snapshot; no file descriptors or cached state survive
//! between method calls.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`entity`] - Shared handle behavior and construction-time creation policy
//! - [`file`] - File handles (read, write, remove)
//! - [`dir`] - Directory handles (listing, typed children, make/remove)
//! - [`error`] - Error types and handling

pub mod dir;
pub mod entity;
pub mod error;
pub mod file;

pub use dir::{Dir, Entry};
pub use entity::{apply_create_options, Creatable, CreateOptions, Entity};
pub use error::EntityError;
pub use file::File;

#[cfg(test)]
pub mod test_utils;
