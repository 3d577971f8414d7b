//! pwd: print the working directory.

use secterm_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Pwd tool: print current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print working directory")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(ctx.session.cwd.clone())
    }
}
