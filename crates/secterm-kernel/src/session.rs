//! Per-terminal session state.
//!
//! One `Session` belongs to one open terminal overlay. It is never shared,
//! so it carries no locks; the dispatcher mutates it in place.

use secterm_types::AuthState;

/// Riddle sub-state. Independent of authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleStage {
    #[default]
    Inactive,
    /// The riddle was posed; the next line is an answer.
    RiddlePending,
}

/// Mutable state for one terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Canonical absolute working directory.
    pub cwd: String,
    pub auth: AuthState,
    /// Consecutive wrong passwords since the last success or lockout.
    pub failed_attempts: u32,
    pub puzzle: PuzzleStage,
    /// Submitted command lines, oldest first.
    pub history: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh guest session at `/`.
    pub fn new() -> Self {
        Self {
            cwd: "/".to_string(),
            auth: AuthState::Guest,
            failed_attempts: 0,
            puzzle: PuzzleStage::Inactive,
            history: Vec::new(),
        }
    }

    /// Restore the defaults in place, e.g. when the overlay closes.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `root` when authenticated, otherwise `guest`.
    pub fn whoami(&self) -> &'static str {
        if self.auth.is_root() {
            "root"
        } else {
            "guest"
        }
    }

    /// Prompt string for hosts, e.g. `guest@secterm:/docs$ `.
    pub fn prompt(&self) -> String {
        let sigil = if self.auth.is_root() { '#' } else { '$' };
        format!("{}@secterm:{}{} ", self.whoami(), self.cwd, sigil)
    }

    /// Append a submitted command line to the history.
    pub fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
