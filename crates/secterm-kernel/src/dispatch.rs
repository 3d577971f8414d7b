//! Command dispatch: the single entry point for every line the user types.
//!
//! ```text
//! raw line ──▶ trim ──▶ empty?            ──▶ one blank line
//!                   ├─▶ riddle pending?   ──▶ answer check
//!                   ├─▶ awaiting password? ──▶ password check / lockout
//!                   └─▶ tokenize ──▶ ToolRegistry lookup ──▶ arity check ──▶ Tool::execute
//! ```
//!
//! Dispatch is synchronous and total. It mutates the caller's [`Session`]
//! and returns the output lines and events; it never schedules timers,
//! performs I/O or returns an error.

use std::sync::Arc;

use secterm_types::{AuthState, Dispatch, Event, ExecResult, ShellError, ToolArgs, ToolSchema};

use crate::clock::{Clock, SystemClock};
use crate::config::ShellConfig;
use crate::session::{PuzzleStage, Session};
use crate::tools::{register_builtins, validate_against_schema, ExecContext, Tool, ToolRegistry};
use crate::vfs::{Filesystem, VfsError, VirtualFs};

/// Anything that can turn an input line into output for a session.
pub trait CommandDispatcher {
    fn dispatch(&self, line: &str, session: &mut Session) -> Dispatch;
}

/// The shell: a command registry bound to a filesystem and configuration.
///
/// A `Shell` holds no per-terminal state and is never mutated by
/// dispatching, so one instance can serve any number of sessions.
pub struct Shell {
    fs: Arc<dyn Filesystem>,
    config: Arc<ShellConfig>,
    clock: Arc<dyn Clock>,
    tools: ToolRegistry,
    schemas: Vec<ToolSchema>,
}

impl Shell {
    /// Create a shell with all builtins over `fs`.
    pub fn new(fs: Arc<dyn Filesystem>, config: ShellConfig) -> Self {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        let schemas = tools.schemas();
        Self {
            fs,
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
            tools,
            schemas,
        }
    }

    /// Create a shell over the stock layout rendered from `config`.
    pub fn with_default_layout(config: ShellConfig) -> Result<Self, VfsError> {
        let fs = VirtualFs::default_layout(&config)?;
        Ok(Self::new(Arc::new(fs), config))
    }

    /// Replace the time source used by `date`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Add or replace a command.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.register(tool);
        self.schemas = self.tools.schemas();
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn fs(&self) -> &dyn Filesystem {
        self.fs.as_ref()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Process one line for `session`.
    pub fn dispatch(&self, line: &str, session: &mut Session) -> Dispatch {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Dispatch::blank();
        }

        // The riddle and the password prompt both swallow the whole line,
        // and neither answer is a command worth keeping in history.
        if session.puzzle == PuzzleStage::RiddlePending {
            return self.answer_riddle(trimmed, session).into();
        }
        if session.auth == AuthState::AwaitingPassword {
            return self.check_password(trimmed, session).into();
        }

        self.run_command(trimmed, session).into()
    }

    #[tracing::instrument(level = "debug", skip(self, line, session), fields(command = tracing::field::Empty))]
    fn run_command(&self, line: &str, session: &mut Session) -> ExecResult {
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        tracing::Span::current().record("command", name);

        let Some(tool) = self.tools.get(name) else {
            tracing::debug!("unknown command");
            return ExecResult::failure(ShellError::UnknownCommand(name.to_string()));
        };

        session.record(line);

        let args = ToolArgs::parse(rest);
        if let Err(e) = validate_against_schema(&args, &tool.schema()) {
            return ExecResult::failure(e);
        }

        let mut ctx = ExecContext::new(
            session,
            self.fs.as_ref(),
            &self.config,
            self.clock.as_ref(),
            &self.schemas,
        );
        let result = tool.execute(&args, &mut ctx);
        if let Some(error) = &result.error {
            tracing::debug!(%error, "command failed");
        }
        result
    }

    fn check_password(&self, attempt: &str, session: &mut Session) -> ExecResult {
        if attempt == self.config.password {
            session.auth = AuthState::Root;
            session.failed_attempts = 0;
            tracing::info!("root access granted");
            return ExecResult::line("Access granted. Welcome, root.").with_event(Event::Unlock {
                id: self.config.unlock_id.clone(),
            });
        }

        session.auth = AuthState::Guest;
        session.failed_attempts += 1;
        tracing::info!(attempts = session.failed_attempts, "password rejected");

        let mut result = ExecResult::failure(ShellError::AuthFailure);
        if session.failed_attempts >= self.config.lockout_threshold.get() {
            session.failed_attempts = 0;
            tracing::warn!(duration_ms = self.config.lockout_ms, "lockout triggered");
            result = result.with_event(Event::Alert {
                duration_ms: self.config.lockout_ms,
            });
        }
        result
    }

    fn answer_riddle(&self, answer: &str, session: &mut Session) -> ExecResult {
        let riddle = &self.config.riddle;
        if !riddle.accepts(answer) {
            return ExecResult::line(riddle.hint.clone());
        }
        session.puzzle = PuzzleStage::Inactive;
        tracing::info!("riddle solved");
        ExecResult::line(riddle.success.clone()).with_event(Event::Unlock {
            id: riddle.unlock_id.clone(),
        })
    }
}

impl CommandDispatcher for Shell {
    fn dispatch(&self, line: &str, session: &mut Session) -> Dispatch {
        Shell::dispatch(self, line, session)
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("tools", &self.tools)
            .finish_non_exhaustive()
    }
}
