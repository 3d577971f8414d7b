//! Command system for secterm.
//!
//! Every command is a [`Tool`]: a name, a schema declaring its arguments,
//! and a synchronous handler. The dispatcher looks the command up in a
//! [`ToolRegistry`], checks arity against the schema, then runs it.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Shell builtins (help, ls, cd, cat, login, ...)
//! └── Map verbs (goto, scan, regions, companies, uxv)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{validate_against_schema, Tool};
