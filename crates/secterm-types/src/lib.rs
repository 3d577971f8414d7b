//! Pure data types for secterm — events, diagnostics, results, command schemas.
//!
//! This crate is a leaf dependency with no I/O. Hosts that only render output
//! and react to events can depend on it without pulling in the kernel.

pub mod error;
pub mod event;
pub mod result;
pub mod tool;

pub use error::*;
pub use event::*;
pub use result::*;
pub use tool::*;

use serde::{Deserialize, Serialize};

/// Authentication state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Guest,
    /// `login` was issued; the next line is a password attempt.
    AwaitingPassword,
    Root,
}

impl AuthState {
    pub fn is_root(self) -> bool {
        matches!(self, AuthState::Root)
    }
}
