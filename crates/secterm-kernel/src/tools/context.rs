//! Execution context for tools.

use secterm_types::ToolSchema;

use crate::clock::Clock;
use crate::config::ShellConfig;
use crate::paths;
use crate::session::Session;
use crate::vfs::Filesystem;

/// Execution context passed to tools.
///
/// Borrowed for the duration of a single dispatch: the session mutably,
/// everything else read-only.
pub struct ExecContext<'a> {
    /// The terminal's session, mutated in place.
    pub session: &'a mut Session,
    /// The shared, read-only filesystem.
    pub fs: &'a dyn Filesystem,
    /// Host-configured constants.
    pub config: &'a ShellConfig,
    /// Time source for `date`.
    pub clock: &'a dyn Clock,
    /// Schemas of every registered command, for `help`.
    pub tool_schemas: &'a [ToolSchema],
}

impl<'a> ExecContext<'a> {
    pub fn new(
        session: &'a mut Session,
        fs: &'a dyn Filesystem,
        config: &'a ShellConfig,
        clock: &'a dyn Clock,
        tool_schemas: &'a [ToolSchema],
    ) -> Self {
        Self {
            session,
            fs,
            config,
            clock,
            tool_schemas,
        }
    }

    /// Resolve a path argument against the session's cwd.
    pub fn resolve_path(&self, path: &str) -> String {
        paths::resolve(&self.session.cwd, path)
    }

    /// Change the current working directory. The caller has checked it.
    pub fn set_cwd(&mut self, path: String) {
        self.session.cwd = path;
    }

    /// True if the session is authenticated.
    pub fn is_root(&self) -> bool {
        self.session.auth.is_root()
    }
}
