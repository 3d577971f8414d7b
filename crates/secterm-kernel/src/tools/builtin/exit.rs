//! exit: close the terminal overlay.

use secterm_types::{Event, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Exit;

impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Close the terminal")
    }

    fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line("Connection closed.").with_event(Event::Close)
    }
}
