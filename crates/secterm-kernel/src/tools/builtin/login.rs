//! login / logout: enter and leave the root session.
//!
//! `login` only arms the password prompt. The password itself is read by
//! the dispatcher on the next line, outside the command grammar.

use secterm_types::{AuthState, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Login tool: move to the password challenge.
pub struct Login;

impl Tool for Login {
    fn name(&self) -> &str {
        "login"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("login", "Authenticate as root")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        if ctx.is_root() {
            return ExecResult::line("Already authenticated.");
        }
        ctx.session.auth = AuthState::AwaitingPassword;
        tracing::info!("password challenge issued");
        ExecResult::line("Password:")
    }
}

/// Logout tool: drop back to guest.
pub struct Logout;

impl Tool for Logout {
    fn name(&self) -> &str {
        "logout"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("logout", "Drop root privileges")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        if !ctx.is_root() {
            return ExecResult::line("Not logged in.");
        }
        ctx.session.auth = AuthState::Guest;
        tracing::info!("session dropped to guest");
        ExecResult::line("Logged out.")
    }
}
