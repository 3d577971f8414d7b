//! Virtual Filesystem (VFS) for secterm.
//!
//! A single static tree, built once when the host starts and shared
//! read-only by every terminal session:
//!
//! ```text
//! /                      # root, always a directory
//! ├── /docs/             # regions.txt, companies.txt
//! └── /secrets           # readable only as root
//! ```
//!
//! Commands see it through the [`Filesystem`] trait and always pass
//! canonical paths produced by [`crate::paths::resolve`].

mod memory;
mod traits;

pub use memory::{Directory, Node, VfsBuilder, VirtualFs};
pub use traits::{EntryType, Filesystem, VfsError};
