//! Shell diagnostics.
//!
//! None of these ever escape `dispatch` as a Rust error: each one is turned
//! into a single output line at the point of dispatch. The `Display` impl is
//! that line.

use thiserror::Error;

/// A non-fatal command failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{command}: {path}: No such file or directory")]
    PathNotFound { command: String, path: String },
    #[error("{command}: {path}: Not a directory")]
    NotADirectory { command: String, path: String },
    #[error("{command}: {path}: Is a directory")]
    NotAFile { command: String, path: String },
    #[error("{command}: {path}: Permission denied")]
    PermissionDenied { command: String, path: String },
    #[error("Access denied.")]
    AuthFailure,
    #[error("Unknown: {0}")]
    UnknownCommand(String),
    #[error("Usage: {usage}")]
    BadArguments { usage: String },
    #[error("{command}: unknown target: {target}")]
    UnknownTarget { command: String, target: String },
}

impl ShellError {
    pub fn not_found(command: &str, path: impl Into<String>) -> Self {
        Self::PathNotFound {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn not_a_directory(command: &str, path: impl Into<String>) -> Self {
        Self::NotADirectory {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn not_a_file(command: &str, path: impl Into<String>) -> Self {
        Self::NotAFile {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn permission_denied(command: &str, path: impl Into<String>) -> Self {
        Self::PermissionDenied {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn usage(usage: impl Into<String>) -> Self {
        Self::BadArguments {
            usage: usage.into(),
        }
    }

    pub fn unknown_target(command: &str, target: impl Into<String>) -> Self {
        Self::UnknownTarget {
            command: command.to_string(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_output_line() {
        assert_eq!(
            ShellError::UnknownCommand("frobnicate".into()).to_string(),
            "Unknown: frobnicate"
        );
        assert_eq!(
            ShellError::permission_denied("cat", "/secrets").to_string(),
            "cat: /secrets: Permission denied"
        );
        assert_eq!(ShellError::usage("cat <path>").to_string(), "Usage: cat <path>");
    }
}
