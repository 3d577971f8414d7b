//! scan: sweep one target, or every sector.

use secterm_types::{Event, ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Scan;

impl Tool for Scan {
    fn name(&self) -> &str {
        "scan"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("scan", "Scan a region or company, or everything")
            .param(ParamSchema::optional("target", "Region key or company name").variadic())
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(wanted) = args.rest(0) else {
            return ExecResult::line("Scanning all sectors...")
                .with_event(Event::Scan { target: None });
        };
        match ctx.config.find_target(&wanted) {
            Some(target) => ExecResult::line(format!("Scanning {}...", target))
                .with_event(Event::Scan {
                    target: Some(target),
                }),
            None => ExecResult::failure(ShellError::unknown_target("scan", wanted)),
        }
    }
}
