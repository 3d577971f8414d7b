//! sudo: always refused; `sudo su` also trips the alert.

use secterm_types::{Event, ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Sudo;

impl Tool for Sudo {
    fn name(&self) -> &str {
        "sudo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("sudo", "Run a command as another user")
            .param(ParamSchema::required("command", "Command to run").variadic())
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(command) = args.rest(0) else {
            return ExecResult::failure(ShellError::usage(self.schema().usage()));
        };

        let mut result = ExecResult::failure(ShellError::permission_denied("sudo", command.as_str()));
        if command.eq_ignore_ascii_case("su") {
            tracing::warn!("sudo su attempted");
            result.push_line("This incident will be reported.");
            result = result.with_event(Event::Alert {
                duration_ms: ctx.config.sudo_alert_ms,
            });
        }
        result
    }
}
