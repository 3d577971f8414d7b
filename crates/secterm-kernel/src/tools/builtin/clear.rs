//! clear: ask the host to wipe the scrollback.

use secterm_types::{Event, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Clear;

impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the screen")
    }

    fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::empty().with_event(Event::Clear)
    }
}
