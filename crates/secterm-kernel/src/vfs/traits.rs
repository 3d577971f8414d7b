//! Core VFS traits and types.

use thiserror::Error;

/// Type of a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// Errors raised while building a filesystem layout.
///
/// Lookups never fail; they answer `None`/`false`. Only construction can go
/// wrong, and it goes wrong before any session sees the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("path must be absolute: {0}")]
    NotAbsolute(String),
    #[error("cannot create the root as a file")]
    RootIsDirectory,
    #[error("not a directory: {0}")]
    NotDirectory(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
}

/// Read-only filesystem interface seen by commands.
///
/// All paths must be canonical (see [`crate::paths::resolve`]); callers
/// resolve before they ask.
pub trait Filesystem: Send + Sync {
    /// Kind of the node at `path`, or `None` if nothing is there.
    fn stat(&self, path: &str) -> Option<EntryType>;

    /// Child names of the directory at `path`, in insertion order.
    ///
    /// `None` if `path` is missing or is a file.
    fn list_directory(&self, path: &str) -> Option<Vec<String>>;

    /// Content of the file at `path`. `None` if missing or a directory.
    fn read_file(&self, path: &str) -> Option<&str>;

    /// True if `path` is a directory. False when any segment is missing or
    /// passes through a file.
    fn is_directory(&self, path: &str) -> bool {
        self.stat(path) == Some(EntryType::Directory)
    }

    /// True if `path` is a file.
    fn is_file(&self, path: &str) -> bool {
        self.stat(path) == Some(EntryType::File)
    }
}
