//! goto: fly the map camera to a region or company.

use secterm_types::{Event, ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Goto;

impl Tool for Goto {
    fn name(&self) -> &str {
        "goto"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("goto", "Move the map to a region or company")
            .param(ParamSchema::required("target", "Region key or company name").variadic())
            .example("Fly to a region", "goto europe")
            .example("Names may contain spaces", "goto helix aerospace")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(wanted) = args.rest(0) else {
            return ExecResult::failure(ShellError::usage(self.schema().usage()));
        };
        match ctx.config.find_target(&wanted) {
            Some(target) => ExecResult::line(format!("Navigating to {}...", target))
                .with_event(Event::Navigate { target }),
            None => ExecResult::failure(ShellError::unknown_target("goto", wanted)),
        }
    }
}
