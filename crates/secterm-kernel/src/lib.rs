//! secterm-kernel: the core of the secret terminal.
//!
//! This crate provides:
//!
//! - **Paths**: Lexical resolution of `.`/`..` against a working directory
//! - **VFS**: A static in-memory tree of directories and files
//! - **Session**: Per-terminal cwd, authentication and puzzle state
//! - **Tools**: Tool trait, registry, and builtin commands
//! - **Dispatch**: The line interpreter tying them together
//! - **Config**: Host-configurable password, riddle and map data
//!
//! ```
//! use secterm_kernel::{Session, Shell, ShellConfig};
//!
//! let shell = Shell::with_default_layout(ShellConfig::default()).unwrap();
//! let mut session = Session::new();
//!
//! shell.dispatch("cd /docs", &mut session);
//! let out = shell.dispatch("ls", &mut session);
//! assert_eq!(out.lines, ["regions.txt", "companies.txt"]);
//! ```

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod help;
pub mod paths;
pub mod session;
pub mod tools;
pub mod vfs;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{RiddleConfig, ShellConfig};
pub use dispatch::{CommandDispatcher, Shell};
pub use session::{PuzzleStage, Session};
pub use vfs::{EntryType, Filesystem, VfsBuilder, VfsError, VirtualFs};

// Data types, re-exported so hosts need only this crate
pub use secterm_types::{
    AuthState, Dispatch, Event, ExecResult, NavTarget, ShellError, ToolArgs, ToolSchema,
    UxvAction,
};
