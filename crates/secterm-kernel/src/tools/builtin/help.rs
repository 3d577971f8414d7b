//! help: list commands, or describe one.

use secterm_types::{ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::help::{format_tool_help, format_tool_list};
use crate::tools::{ExecContext, Tool};

/// Help tool: built from the registry's schemas.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "List commands, or describe one")
            .param(ParamSchema::optional("command", "Command to describe"))
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        match args.get(0) {
            None => ExecResult::lines(format_tool_list(ctx.tool_schemas)),
            Some(name) => match format_tool_help(name, ctx.tool_schemas) {
                Some(lines) => ExecResult::lines(lines),
                None => ExecResult::failure(ShellError::UnknownCommand(name.to_string())),
            },
        }
    }
}
